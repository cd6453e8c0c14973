use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Default config file, looked up in the working directory.
pub const CONFIG_FILE: &str = "dashboard.toml";

/// Prefix of the environment variables overriding the config file.
pub const ENV_PREFIX: &str = "DASHBOARD";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid data source URL '{0}'")]
    InvalidDataSource(String),
}

/// Application configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DashboardConfig {
    /// Base URL of the user data source
    pub data_source_url: String,
    /// Bind address for `serve`
    pub bind_address: String,
    /// Directory holding the built frontend bundle
    pub static_dir: String,
}

impl DashboardConfig {
    /// Loads `.env`, then defaults, `dashboard.toml` and `DASHBOARD_*` variables.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::load_from(Path::new(CONFIG_FILE), Environment::with_prefix(ENV_PREFIX))
    }

    /// Layered load with an explicit file and environment source.
    pub fn load_from(file: &Path, env: Environment) -> Result<Self, ConfigError> {
        tracing::debug!("Loading configuration from {}", file.display());

        let config: DashboardConfig = Config::builder()
            .set_default("data_source_url", "https://dummyjson.com")?
            .set_default("bind_address", "0.0.0.0:3000")?
            .set_default("static_dir", "workspace/frontend/dist")?
            .add_source(File::from(file).required(false))
            .add_source(env)
            .build()?
            .try_deserialize()?;

        config.validate()?;
        tracing::trace!(?config, "Configuration loaded");
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let url = &self.data_source_url;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidDataSource(url.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(map))
    }

    #[test]
    fn test_defaults_without_file_or_env() {
        let config = DashboardConfig::load_from(Path::new("does-not-exist.toml"), env(&[])).unwrap();

        assert_eq!(config.data_source_url, "https://dummyjson.com");
        assert_eq!(config.bind_address, "0.0.0.0:3000");
        assert_eq!(config.static_dir, "workspace/frontend/dist");
    }

    #[test]
    fn test_env_overrides_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "data_source_url = \"http://file.example\"").unwrap();
        writeln!(file, "bind_address = \"127.0.0.1:9000\"").unwrap();

        let config = DashboardConfig::load_from(
            file.path(),
            env(&[("DASHBOARD_DATA_SOURCE_URL", "http://env.example")]),
        )
        .unwrap();

        assert_eq!(config.data_source_url, "http://env.example");
        assert_eq!(config.bind_address, "127.0.0.1:9000");
    }

    #[test]
    fn test_rejects_non_http_data_source() {
        let err = DashboardConfig::load_from(
            Path::new("does-not-exist.toml"),
            env(&[("DASHBOARD_DATA_SOURCE_URL", "ftp://users.example")]),
        )
        .unwrap_err();

        assert!(matches!(err, ConfigError::InvalidDataSource(_)));
    }
}
