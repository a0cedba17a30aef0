use super::describe::mean;
use crate::routes::earthquakes::models::{Earthquake, RegionCount};
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use utoipa::ToSchema;

const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct DailyActivity {
    pub date: NaiveDate,
    pub event_count: usize,
    pub mean_magnitude: f64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct HourCount {
    /// Hour of day, 0-23
    pub hour: u32,
    pub event_count: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct WeekdayCount {
    pub weekday: String,
    pub event_count: usize,
}

/// Headline numbers shown above the charts. Statistics over an empty set are
/// `None`.
#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct SummaryMetrics {
    pub total_events: usize,
    pub catalog_events: usize,
    /// `total_events - catalog_events`, never positive
    pub filtered_out_delta: i64,
    pub mean_magnitude: Option<f64>,
    pub max_magnitude: Option<f64>,
    pub mean_depth: Option<f64>,
    pub max_depth: Option<i32>,
    pub distinct_regions: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct MapPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub magnitude: f64,
    pub depth: i32,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub remark: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct MapCenter {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct MapPayload {
    pub points: Vec<MapPoint>,
    /// Mean epicentre of the shown events, absent when nothing is shown
    pub center: Option<MapCenter>,
}

/// Event count per exact region label, most active first, ties by label.
/// Counts always sum to `records.len()` when no limit is given.
pub fn rank_regions(records: &[Earthquake], limit: Option<usize>) -> Vec<RegionCount> {
    let mut counts: BTreeMap<&str, i64> = BTreeMap::new();
    for record in records {
        *counts.entry(record.remark.as_str()).or_insert(0) += 1;
    }

    // BTreeMap iterates by label, and the sort is stable
    let mut ranking: Vec<RegionCount> = counts
        .into_iter()
        .map(|(remark, event_count)| RegionCount {
            remark: remark.to_string(),
            event_count,
        })
        .collect();
    ranking.sort_by(|a, b| b.event_count.cmp(&a.event_count));

    if let Some(limit) = limit {
        ranking.truncate(limit);
    }
    ranking
}

/// The `n` strongest records. Equal magnitudes keep their input order.
pub fn top_by_magnitude(records: &[Earthquake], n: usize) -> Vec<Earthquake> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.magnitude.total_cmp(&a.magnitude));
    sorted.truncate(n);
    sorted
}

/// Event count and mean magnitude per calendar day, oldest day first. Days
/// without events are absent.
pub fn daily_activity(records: &[Earthquake]) -> Vec<DailyActivity> {
    let mut days: BTreeMap<NaiveDate, (usize, f64)> = BTreeMap::new();
    for record in records {
        let entry = days.entry(record.date).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += record.magnitude;
    }

    days.into_iter()
        .map(|(date, (event_count, magnitude_sum))| DailyActivity {
            date,
            event_count,
            mean_magnitude: magnitude_sum / event_count as f64,
        })
        .collect()
}

/// Event count for every hour of the day, zero filled.
pub fn hourly_counts(records: &[Earthquake]) -> Vec<HourCount> {
    let mut hours = [0usize; 24];
    for record in records {
        hours[record.time.hour() as usize] += 1;
    }
    hours
        .iter()
        .enumerate()
        .map(|(hour, &event_count)| HourCount {
            hour: hour as u32,
            event_count,
        })
        .collect()
}

/// Event count per weekday, Monday first, zero filled.
pub fn weekday_counts(records: &[Earthquake]) -> Vec<WeekdayCount> {
    let mut days = [0usize; 7];
    for record in records {
        days[record.date.weekday().num_days_from_monday() as usize] += 1;
    }
    WEEKDAYS
        .iter()
        .zip(days)
        .map(|(name, event_count)| WeekdayCount {
            weekday: name.to_string(),
            event_count,
        })
        .collect()
}

impl SummaryMetrics {
    pub fn compute(catalog_events: usize, filtered: &[Earthquake]) -> Self {
        let magnitudes: Vec<f64> = filtered.iter().map(|r| r.magnitude).collect();
        let depths: Vec<f64> = filtered.iter().map(|r| f64::from(r.depth)).collect();
        let distinct_regions = filtered
            .iter()
            .map(|r| r.remark.as_str())
            .collect::<HashSet<_>>()
            .len();

        Self {
            total_events: filtered.len(),
            catalog_events,
            filtered_out_delta: filtered.len() as i64 - catalog_events as i64,
            mean_magnitude: mean(&magnitudes),
            max_magnitude: magnitudes.iter().copied().reduce(f64::max),
            mean_depth: mean(&depths),
            max_depth: filtered.iter().map(|r| r.depth).max(),
            distinct_regions,
        }
    }
}

impl MapPayload {
    pub fn from_records(records: &[Earthquake]) -> Self {
        let latitudes: Vec<f64> = records.iter().map(|r| r.latitude).collect();
        let longitudes: Vec<f64> = records.iter().map(|r| r.longitude).collect();
        let center = match (mean(&latitudes), mean(&longitudes)) {
            (Some(latitude), Some(longitude)) => Some(MapCenter {
                latitude,
                longitude,
            }),
            _ => None,
        };

        Self {
            points: records
                .iter()
                .map(|r| MapPoint {
                    latitude: r.latitude,
                    longitude: r.longitude,
                    magnitude: r.magnitude,
                    depth: r.depth,
                    date: r.date,
                    time: r.time,
                    remark: r.remark.clone(),
                })
                .collect(),
            center,
        }
    }
}
