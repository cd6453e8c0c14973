//! Load-and-render lifecycle of the height distribution view.
//!
//! The view starts in [`ViewState::Loading`] and settles exactly once, into
//! either [`ViewState::Ready`] or [`ViewState::Failed`]. It never goes back
//! to loading.

use tracing::{error, info, warn};

use crate::chart::{present, ChartDataset};
use crate::distribution::{bucket, DistributionBuckets};
use crate::loader::{load, LoadError, UserSource};
use crate::user::{Gender, UserRecord};

/// Everything the ready view renders.
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionView {
    pub male: DistributionBuckets,
    pub female: DistributionBuckets,
    pub dataset: ChartDataset,
    /// Number of records received, bucketed or not.
    pub total: usize,
}

impl DistributionView {
    pub fn from_records(records: &[UserRecord]) -> Self {
        let male = bucket(records, Gender::Male);
        let female = bucket(records, Gender::Female);

        Self {
            male,
            female,
            dataset: present(male, female),
            total: records.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    #[default]
    Loading,
    Ready(DistributionView),
    Failed(String),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn view(&self) -> Option<&DistributionView> {
        match self {
            Self::Ready(view) => Some(view),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }
}

impl From<Result<Vec<UserRecord>, LoadError>> for ViewState {
    fn from(result: Result<Vec<UserRecord>, LoadError>) -> Self {
        match result {
            Ok(records) => Self::Ready(DistributionView::from_records(&records)),
            Err(err) => Self::Failed(err.to_string()),
        }
    }
}

/// Owns the view state and enforces the single Loading → settled transition.
#[derive(Debug, Default)]
pub struct ViewLifecycle {
    state: ViewState,
}

impl ViewLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn into_state(self) -> ViewState {
        self.state
    }

    /// Applies the load outcome. Returns `false` and leaves the state
    /// untouched if the lifecycle has already settled.
    pub fn settle(&mut self, result: Result<Vec<UserRecord>, LoadError>) -> bool {
        if !self.state.is_loading() {
            warn!("Ignoring load result, view already settled");
            return false;
        }

        self.state = ViewState::from(result);
        match &self.state {
            ViewState::Ready(view) => info!(total = view.total, "Height distribution ready"),
            ViewState::Failed(err) => error!("Height distribution failed to load: {}", err),
            ViewState::Loading => {}
        }
        true
    }
}

/// Runs one full load sequence against `source` and returns the settled state.
pub async fn run<S: UserSource>(source: &S) -> ViewState {
    let mut lifecycle = ViewLifecycle::new();
    lifecycle.settle(load(source).await);
    lifecycle.into_state()
}
