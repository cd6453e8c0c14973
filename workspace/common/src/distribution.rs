//! Height distribution bucketing.
//!
//! Records are partitioned into five fixed height ranges per gender. The
//! ranges start at [`MIN_BUCKETED_HEIGHT_CM`]; shorter records are not
//! counted anywhere. Whether that floor is intended is still open, so the
//! range table is kept in one place for whoever decides.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use crate::user::{Gender, UserRecord};

/// Number of height buckets.
pub const BUCKET_COUNT: usize = 5;

/// Records shorter than this are excluded from every bucket.
pub const MIN_BUCKETED_HEIGHT_CM: f64 = 150.0;

/// A half-open height range `[lower_cm, upper_cm)`. `upper_cm == None`
/// means the range is open ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightRange {
    pub lower_cm: f64,
    pub upper_cm: Option<f64>,
    pub label: &'static str,
}

impl HeightRange {
    pub fn contains(&self, height_cm: f64) -> bool {
        height_cm >= self.lower_cm && self.upper_cm.is_none_or(|upper| height_cm < upper)
    }
}

pub const HEIGHT_RANGES: [HeightRange; BUCKET_COUNT] = [
    HeightRange { lower_cm: MIN_BUCKETED_HEIGHT_CM, upper_cm: Some(160.0), label: "150 cm+" },
    HeightRange { lower_cm: 160.0, upper_cm: Some(170.0), label: "160 cm+" },
    HeightRange { lower_cm: 170.0, upper_cm: Some(180.0), label: "170 cm+" },
    HeightRange { lower_cm: 180.0, upper_cm: Some(190.0), label: "180 cm+" },
    HeightRange { lower_cm: 190.0, upper_cm: None, label: "190 cm+" },
];

/// Per-range record counts, in [`HEIGHT_RANGES`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DistributionBuckets([u32; BUCKET_COUNT]);

impl DistributionBuckets {
    pub fn new(counts: [u32; BUCKET_COUNT]) -> Self {
        Self(counts)
    }

    pub fn counts(&self) -> &[u32; BUCKET_COUNT] {
        &self.0
    }

    pub fn total(&self) -> u64 {
        self.0.iter().map(|&c| u64::from(c)).sum()
    }

    fn increment(&mut self, index: usize) {
        self.0[index] += 1;
    }
}

impl Index<usize> for DistributionBuckets {
    type Output = u32;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

/// Returns the bucket index for a height, or `None` when the height is below
/// the floor or not a finite number.
fn bucket_index(height_cm: f64) -> Option<usize> {
    HEIGHT_RANGES.iter().position(|range| range.contains(height_cm))
}

/// Counts the records of `gender` per height range.
///
/// Records with another gender, a missing gender or height, or a height
/// below [`MIN_BUCKETED_HEIGHT_CM`] are skipped without error.
pub fn bucket(records: &[UserRecord], gender: Gender) -> DistributionBuckets {
    let buckets = records
        .iter()
        .filter(|record| record.gender == Some(gender))
        .filter_map(|record| record.height.and_then(bucket_index))
        .fold(DistributionBuckets::default(), |mut acc, index| {
            acc.increment(index);
            acc
        });

    tracing::trace!(gender = gender.as_str(), counts = ?buckets.counts(), "Bucketed height distribution");
    buckets
}
