pub mod users;

use common::LoadError;
use gloo_net::http::Request;
use serde::Deserialize;
use crate::settings;

fn api_base() -> String {
    settings::get_settings().data_source_url().to_string()
}

/// Common GET request handler
pub async fn get<T>(endpoint: &str) -> Result<T, LoadError>
where
    T: for<'de> Deserialize<'de>,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| {
            let err = LoadError::Request(e.to_string());
            log::error!("GET {} - {}", endpoint, err);
            err
        })?;

    if !response.ok() {
        let err = LoadError::Status(response.status());
        log::error!("GET {} - {}", endpoint, err);
        return Err(err);
    }

    log::trace!("GET {} - Response received, parsing JSON", endpoint);
    let data: T = response
        .json()
        .await
        .map_err(|e| {
            let err = LoadError::Decode(e.to_string());
            log::error!("GET {} - {}", endpoint, err);
            err
        })?;

    log::info!("GET {} - Success", endpoint);
    Ok(data)
}
