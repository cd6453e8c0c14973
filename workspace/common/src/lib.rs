//! Core types shared between the dashboard frontend and the CLI.
//! Everything here is pure or generic over a [`UserSource`], so the
//! bucketing and lifecycle rules are tested natively without a browser.

mod chart;
mod distribution;
mod format;
mod lifecycle;
mod loader;
mod user;

pub use chart::{
    present, ChartDataset, ChartSeries, BAR_THICKNESS, CATEGORY_PERCENTAGE, FEMALE_COLOR,
    MALE_COLOR,
};
pub use distribution::{
    bucket, DistributionBuckets, HeightRange, BUCKET_COUNT, HEIGHT_RANGES, MIN_BUCKETED_HEIGHT_CM,
};
pub use format::{count_up_value, format_count};
pub use lifecycle::{run, DistributionView, ViewLifecycle, ViewState};
pub use loader::{load, LoadError, UserSource};
pub use user::{Gender, UserPage, UserRecord};
