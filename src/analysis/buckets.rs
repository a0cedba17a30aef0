use crate::routes::earthquakes::models::Earthquake;
use serde::Serialize;
use strum::{Display, EnumIter, IntoEnumIterator};
use utoipa::ToSchema;

/// Strength class of an event. Each threshold belongs to the higher class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter)]
pub enum MagnitudeBucket {
    #[strum(to_string = "Small (< 3.0)")]
    Small,
    #[strum(to_string = "Medium (3.0-4.0)")]
    Medium,
    #[strum(to_string = "Large (4.0-5.0)")]
    Large,
    #[strum(to_string = "Very Large (>= 5.0)")]
    VeryLarge,
}

impl MagnitudeBucket {
    pub fn classify(magnitude: f64) -> Self {
        if magnitude < 3.0 {
            MagnitudeBucket::Small
        } else if magnitude < 4.0 {
            MagnitudeBucket::Medium
        } else if magnitude < 5.0 {
            MagnitudeBucket::Large
        } else {
            MagnitudeBucket::VeryLarge
        }
    }
}

/// Hypocentre depth class. Bins are closed on the right; the shallowest bin
/// also takes its lower edge and anything above the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter)]
pub enum DepthBucket {
    #[strum(to_string = "0-50 km")]
    UpTo50,
    #[strum(to_string = "50-100 km")]
    UpTo100,
    #[strum(to_string = "100-200 km")]
    UpTo200,
    #[strum(to_string = "200-300 km")]
    UpTo300,
    #[strum(to_string = "300+ km")]
    Deeper,
}

impl DepthBucket {
    pub fn classify(depth: i32) -> Self {
        match depth {
            i32::MIN..=50 => DepthBucket::UpTo50,
            51..=100 => DepthBucket::UpTo100,
            101..=200 => DepthBucket::UpTo200,
            201..=300 => DepthBucket::UpTo300,
            _ => DepthBucket::Deeper,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct BucketCount {
    pub label: String,
    pub count: usize,
}

/// Counts per bucket in bucket order, empty buckets included.
fn count_by<B, F>(records: &[Earthquake], classify: F) -> Vec<BucketCount>
where
    B: IntoEnumIterator + PartialEq + std::fmt::Display,
    F: Fn(&Earthquake) -> B,
{
    let classified: Vec<B> = records.iter().map(classify).collect();
    B::iter()
        .map(|bucket| BucketCount {
            count: classified.iter().filter(|c| **c == bucket).count(),
            label: bucket.to_string(),
        })
        .collect()
}

pub fn magnitude_distribution(records: &[Earthquake]) -> Vec<BucketCount> {
    count_by(records, |r| MagnitudeBucket::classify(r.magnitude))
}

pub fn depth_distribution(records: &[Earthquake]) -> Vec<BucketCount> {
    count_by(records, |r| DepthBucket::classify(r.depth))
}
