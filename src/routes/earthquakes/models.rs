use super::db::Model;
use chrono::{NaiveDate, NaiveTime};
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// One catalogued seismic event.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct Earthquake {
    pub id: i32,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub latitude: f64,
    pub longitude: f64,
    /// Hypocentre depth in kilometres
    pub depth: i32,
    pub magnitude: f64,
    /// Free-text region label, grouped by exact match
    pub remark: String,
}

impl From<Model> for Earthquake {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            date: model.date,
            time: model.time,
            latitude: model.latitude,
            longitude: model.longitude,
            depth: model.depth,
            magnitude: model.magnitude,
            remark: model.remark,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, ToSchema, FromQueryResult)]
pub struct RegionCount {
    pub remark: String,
    pub event_count: i64,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct TopQueryParams {
    /// Number of records to return, at least 1
    pub limit: Option<u64>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct MagnitudeRangeParams {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct DepthRangeParams {
    pub min: i32,
    pub max: i32,
}
