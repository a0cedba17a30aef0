use crate::routes::earthquakes::models::Earthquake;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A closed interval with optional ends. A missing end is unbounded on that
/// side; a range whose `min` exceeds its `max` contains nothing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InclusiveRange<T> {
    pub min: Option<T>,
    pub max: Option<T>,
}

impl<T: PartialOrd + Copy> InclusiveRange<T> {
    pub fn new(min: Option<T>, max: Option<T>) -> Self {
        Self { min, max }
    }

    pub fn between(min: T, max: T) -> Self {
        Self::new(Some(min), Some(max))
    }

    pub fn unbounded() -> Self {
        Self::new(None, None)
    }

    pub fn contains(&self, value: T) -> bool {
        self.min.is_none_or(|min| min <= value) && self.max.is_none_or(|max| value <= max)
    }
}

/// Magnitude, depth and date predicates applied together.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RecordFilter {
    pub magnitude: InclusiveRange<f64>,
    pub depth: InclusiveRange<i32>,
    pub date: InclusiveRange<NaiveDate>,
}

impl Default for RecordFilter {
    fn default() -> Self {
        Self {
            magnitude: InclusiveRange::unbounded(),
            depth: InclusiveRange::unbounded(),
            date: InclusiveRange::unbounded(),
        }
    }
}

impl RecordFilter {
    pub fn matches(&self, record: &Earthquake) -> bool {
        self.magnitude.contains(record.magnitude)
            && self.depth.contains(record.depth)
            && self.date.contains(record.date)
    }

    /// Records satisfying every predicate, in their original order.
    pub fn apply(&self, records: &[Earthquake]) -> Vec<Earthquake> {
        records
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect()
    }
}

/// Query-string form of [`RecordFilter`]. Every bound is optional.
#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
pub struct FilterParams {
    pub min_magnitude: Option<f64>,
    pub max_magnitude: Option<f64>,
    pub min_depth: Option<i32>,
    pub max_depth: Option<i32>,
    /// Inclusive, `YYYY-MM-DD`
    pub start_date: Option<NaiveDate>,
    /// Inclusive, `YYYY-MM-DD`
    pub end_date: Option<NaiveDate>,
}

impl From<&FilterParams> for RecordFilter {
    fn from(params: &FilterParams) -> Self {
        Self {
            magnitude: InclusiveRange::new(params.min_magnitude, params.max_magnitude),
            depth: InclusiveRange::new(params.min_depth, params.max_depth),
            date: InclusiveRange::new(params.start_date, params.end_date),
        }
    }
}

/// Span of the full catalog, used as the default position of the range
/// controls. Field names match [`FilterParams`] so the bounds can be sent
/// straight back as a filter. Every field is `None` for an empty catalog.
#[derive(Clone, Debug, Default, PartialEq, Serialize, ToSchema)]
pub struct FilterBounds {
    pub min_magnitude: Option<f64>,
    pub max_magnitude: Option<f64>,
    pub min_depth: Option<i32>,
    pub max_depth: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl FilterBounds {
    pub fn from_records(records: &[Earthquake]) -> Self {
        let mut magnitude = InclusiveRange::unbounded();
        let mut depth = InclusiveRange::unbounded();
        let mut date = InclusiveRange::unbounded();
        for record in records {
            widen(&mut magnitude, record.magnitude);
            widen(&mut depth, record.depth);
            widen(&mut date, record.date);
        }
        Self {
            min_magnitude: magnitude.min,
            max_magnitude: magnitude.max,
            min_depth: depth.min,
            max_depth: depth.max,
            start_date: date.min,
            end_date: date.max,
        }
    }
}

fn widen<T: PartialOrd + Copy>(range: &mut InclusiveRange<T>, value: T) {
    if range.min.is_none_or(|min| value < min) {
        range.min = Some(value);
    }
    if range.max.is_none_or(|max| value > max) {
        range.max = Some(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::test_support::quake;

    fn sample() -> Vec<Earthquake> {
        vec![
            quake(1, "2024-01-05", "10:00:00", 2.9, 10, "Banda Sea"),
            quake(2, "2024-01-10", "11:00:00", 3.0, 55, "Banda Sea"),
            quake(3, "2024-02-01", "12:00:00", 5.0, 320, "Java"),
            quake(4, "2024-03-15", "13:00:00", 4.2, 100, "Sumatra"),
        ]
    }

    fn ids(records: &[Earthquake]) -> Vec<i32> {
        records.iter().map(|r| r.id).collect()
    }

    #[test]
    fn magnitude_bounds_are_inclusive() {
        let filter = RecordFilter {
            magnitude: InclusiveRange::between(3.0, 5.0),
            ..Default::default()
        };
        let out = filter.apply(&sample());
        assert_eq!(ids(&out), vec![2, 3, 4]);
        assert!(out.iter().all(|r| (3.0..=5.0).contains(&r.magnitude)));
    }

    #[test]
    fn reversed_ranges_match_nothing() {
        let records = sample();
        let by_magnitude = RecordFilter {
            magnitude: InclusiveRange::between(5.0, 3.0),
            ..Default::default()
        };
        let by_depth = RecordFilter {
            depth: InclusiveRange::between(300, 0),
            ..Default::default()
        };
        assert!(by_magnitude.apply(&records).is_empty());
        assert!(by_depth.apply(&records).is_empty());
    }

    #[test]
    fn date_range_includes_both_endpoints() {
        let filter = RecordFilter {
            date: InclusiveRange::between(
                NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
                NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            ),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&sample())), vec![2, 3]);
    }

    #[test]
    fn predicates_are_conjunctive() {
        let filter = RecordFilter {
            magnitude: InclusiveRange::new(Some(3.0), None),
            depth: InclusiveRange::new(None, Some(100)),
            date: InclusiveRange::unbounded(),
        };
        assert_eq!(ids(&filter.apply(&sample())), vec![2, 4]);
    }

    #[test]
    fn unbounded_filter_keeps_everything_in_order() {
        let records = sample();
        assert_eq!(RecordFilter::default().apply(&records), records);
    }

    #[test]
    fn params_convert_into_filter() {
        let params = FilterParams {
            min_magnitude: Some(4.0),
            max_depth: Some(400),
            ..Default::default()
        };
        let filter = RecordFilter::from(&params);
        assert_eq!(filter.magnitude, InclusiveRange::new(Some(4.0), None));
        assert_eq!(filter.depth, InclusiveRange::new(None, Some(400)));
        assert_eq!(filter.date, InclusiveRange::unbounded());
    }

    #[test]
    fn bounds_span_the_catalog() {
        let bounds = FilterBounds::from_records(&sample());
        assert_eq!((bounds.min_magnitude, bounds.max_magnitude), (Some(2.9), Some(5.0)));
        assert_eq!((bounds.min_depth, bounds.max_depth), (Some(10), Some(320)));
        assert_eq!(bounds.start_date, NaiveDate::from_ymd_opt(2024, 1, 5));
        assert_eq!(bounds.end_date, NaiveDate::from_ymd_opt(2024, 3, 15));
        assert_eq!(FilterBounds::from_records(&[]), FilterBounds::default());
    }
}
