//! Pure transformations over an already fetched record set: filtering,
//! categorisation and the aggregates behind each dashboard widget.

pub mod aggregate;
pub mod buckets;
pub mod describe;
pub mod filter;

pub use filter::{FilterBounds, FilterParams, InclusiveRange, RecordFilter};

#[cfg(test)]
pub(crate) mod test_support {
    use crate::routes::earthquakes::models::Earthquake;

    pub fn quake(
        id: i32,
        date: &str,
        time: &str,
        magnitude: f64,
        depth: i32,
        remark: &str,
    ) -> Earthquake {
        Earthquake {
            id,
            date: date.parse().unwrap(),
            time: time.parse().unwrap(),
            latitude: -7.5 + f64::from(id) * 0.1,
            longitude: 110.0 + f64::from(id) * 0.1,
            depth,
            magnitude,
            remark: remark.to_string(),
        }
    }
}
