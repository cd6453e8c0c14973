use thiserror::Error;
use tracing::{debug, info, warn};

use crate::user::UserRecord;

/// Errors produced while loading user records.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    /// The request could not be sent or the connection failed.
    #[error("Request failed: {0}")]
    Request(String),

    /// The data source answered with a non-success status.
    #[error("HTTP error: {0}")]
    Status(u16),

    /// The response body could not be decoded.
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// A source of user records.
///
/// Implementations are single-shot: no retry, no timeout, no cancellation.
#[allow(async_fn_in_trait)]
pub trait UserSource {
    /// Total number of records available.
    async fn count(&self) -> Result<u64, LoadError>;

    /// Fetches up to `total` records.
    async fn fetch_users(&self, total: u64) -> Result<Vec<UserRecord>, LoadError>;
}

/// Fetches the record count, then that many records.
///
/// Receiving fewer records than announced is not an error; the caller works
/// with what arrived.
pub async fn load<S: UserSource>(source: &S) -> Result<Vec<UserRecord>, LoadError> {
    debug!("Loading user count");
    let total = source.count().await?;
    debug!(total, "Fetching user records");

    let users = source.fetch_users(total).await?;
    if (users.len() as u64) < total {
        warn!(expected = total, received = users.len(), "Data source returned fewer records than announced");
    }

    info!(count = users.len(), "Loaded user records");
    Ok(users)
}
