use common::{LoadError, UserPage, UserRecord, UserSource};
use serde::de::DeserializeOwned;
use tracing::{debug, error, instrument, trace};

/// [`UserSource`] talking to the HTTP data source with `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestUserSource {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestUserSource {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, LoadError> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("GET request to: {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            let err = LoadError::Request(e.to_string());
            error!("GET {} - {}", endpoint, err);
            err
        })?;

        let status = response.status();
        if !status.is_success() {
            let err = LoadError::Status(status.as_u16());
            error!("GET {} - {}", endpoint, err);
            return Err(err);
        }

        trace!("GET {} - Response received, parsing JSON", endpoint);
        response.json::<T>().await.map_err(|e| {
            let err = LoadError::Decode(e.to_string());
            error!("GET {} - {}", endpoint, err);
            err
        })
    }
}

impl UserSource for ReqwestUserSource {
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn count(&self) -> Result<u64, LoadError> {
        let page: UserPage = self.get("/users?limit=1&select=id").await?;
        Ok(page.total)
    }

    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn fetch_users(&self, total: u64) -> Result<Vec<UserRecord>, LoadError> {
        // `limit=0` asks the data source for everything
        if total == 0 {
            return Ok(Vec::new());
        }
        let page: UserPage = self.get(&format!("/users?limit={}&skip=0", total)).await?;
        Ok(page.users)
    }
}
