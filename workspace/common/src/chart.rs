use serde::{Deserialize, Serialize};

use crate::distribution::{DistributionBuckets, HEIGHT_RANGES};

pub const MALE_COLOR: &str = "rgba(75, 192, 192, 0.6)";
pub const FEMALE_COLOR: &str = "rgba(255, 99, 132, 0.6)";

/// Bar thickness in pixels.
pub const BAR_THICKNESS: u32 = 40;

/// Fraction of each category slot occupied by its bars.
pub const CATEGORY_PERCENTAGE: f64 = 0.5;

/// One named bar set of the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub name: String,
    pub values: DistributionBuckets,
    pub color: String,
    pub bar_thickness: u32,
    pub category_percentage: f64,
}

/// Display-ready dataset handed to the rendering surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataset {
    pub labels: Vec<String>,
    pub series: Vec<ChartSeries>,
}

impl ChartSeries {
    fn new(name: &str, values: DistributionBuckets, color: &str) -> Self {
        Self {
            name: name.to_string(),
            values,
            color: color.to_string(),
            bar_thickness: BAR_THICKNESS,
            category_percentage: CATEGORY_PERCENTAGE,
        }
    }
}

/// Builds the two-series bar chart dataset from the per-gender buckets.
pub fn present(male: DistributionBuckets, female: DistributionBuckets) -> ChartDataset {
    ChartDataset {
        labels: HEIGHT_RANGES.iter().map(|range| range.label.to_string()).collect(),
        series: vec![
            ChartSeries::new("Male", male, MALE_COLOR),
            ChartSeries::new("Female", female, FEMALE_COLOR),
        ],
    }
}
