use crate::api_client;
use common::{LoadError, UserPage, UserRecord, UserSource};

/// Endpoint that returns only the total count.
pub fn count_endpoint() -> &'static str {
    "/users?limit=1&select=id"
}

pub fn fetch_endpoint(total: u64) -> String {
    format!("/users?limit={}&skip=0", total)
}

pub async fn count_users() -> Result<u64, LoadError> {
    log::trace!("Fetching total user count");
    let page = api_client::get::<UserPage>(count_endpoint()).await?;
    log::debug!("Data source reports {} users", page.total);
    Ok(page.total)
}

pub async fn fetch_users(total: u64) -> Result<Vec<UserRecord>, LoadError> {
    // `limit=0` means "everything" to the data source, so skip the request
    if total == 0 {
        log::debug!("No users to fetch");
        return Ok(Vec::new());
    }

    log::trace!("Fetching {} users", total);
    let result = api_client::get::<UserPage>(&fetch_endpoint(total)).await;

    if let Err(ref e) = result {
        log::error!("Failed to fetch users: {}", e);
    } else {
        log::info!("Successfully fetched users");
    }

    result.map(|page| page.users)
}

/// [`UserSource`] backed by the configured HTTP data source.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HttpUserSource;

impl UserSource for HttpUserSource {
    async fn count(&self) -> Result<u64, LoadError> {
        count_users().await
    }

    async fn fetch_users(&self, total: u64) -> Result<Vec<UserRecord>, LoadError> {
        fetch_users(total).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(count_endpoint(), "/users?limit=1&select=id");
        assert_eq!(fetch_endpoint(208), "/users?limit=208&skip=0");
    }
}
