use crate::analysis::aggregate::{DailyActivity, HourCount, MapPayload, SummaryMetrics, WeekdayCount};
use crate::analysis::buckets::BucketCount;
use crate::analysis::describe::{DescriptiveStats, HistogramBin};
use crate::routes::earthquakes::models::{Earthquake, RegionCount};
use crate::routes::statistics::models::MonthlyStatistic;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};
use utoipa::{IntoParams, ToSchema};

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema, Display, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum VisualizationType {
    /// Share of events per region and per magnitude class
    #[default]
    Pie,
    /// Daily event count and daily mean magnitude
    Area,
    /// Busiest regions and depth classes
    Bar,
    /// Monthly trend and time-of-day pattern
    Line,
    /// Epicentres, map centre and strongest events
    Map,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct VisualizationParams {
    pub visualization: Option<VisualizationType>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ExportParams {
    /// Comma separated column names, in output order. Defaults to
    /// `date,time,magnitude,depth,remark,latitude,longitude`.
    pub columns: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum VisualizationPayload {
    Pie {
        top_regions: Vec<RegionCount>,
        magnitude_distribution: Vec<BucketCount>,
    },
    Area {
        daily: Vec<DailyActivity>,
    },
    Bar {
        top_regions: Vec<RegionCount>,
        depth_distribution: Vec<BucketCount>,
    },
    Line {
        monthly: Vec<MonthlyStatistic>,
        hourly: Vec<HourCount>,
    },
    Map {
        map: MapPayload,
        strongest: Vec<Earthquake>,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct DashboardResponse {
    pub visualization: VisualizationType,
    pub summary: SummaryMetrics,
    pub payload: VisualizationPayload,
}

#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct AnalysisResponse {
    pub weekday: Vec<WeekdayCount>,
    pub hourly: Vec<HourCount>,
    pub magnitude: DescriptiveStats,
    pub depth: DescriptiveStats,
    pub magnitude_histogram: Vec<HistogramBin>,
    pub depth_histogram: Vec<HistogramBin>,
}
