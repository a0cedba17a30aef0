use super::db::Model;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Precomputed per-month aggregate maintained by the database.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct MonthlyStatistic {
    /// First day of the month
    pub month: NaiveDate,
    pub event_count: i64,
    pub mean_magnitude: f64,
    pub max_magnitude: f64,
    pub min_magnitude: f64,
}

impl From<Model> for MonthlyStatistic {
    fn from(model: Model) -> Self {
        Self {
            month: model.month,
            event_count: model.event_count,
            mean_magnitude: model.mean_magnitude,
            max_magnitude: model.max_magnitude,
            min_magnitude: model.min_magnitude,
        }
    }
}
