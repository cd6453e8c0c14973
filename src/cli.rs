use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use crate::config::DashboardConfig;
use commands::{report, serve, ReportFormat};

#[derive(Parser)]
#[command(name = "height-dashboard")]
#[command(about = "Height distribution dashboard: data report and frontend hosting")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load all users once and print the height distribution by gender
    Report {
        /// Base URL of the user data source
        ///
        /// Overrides `data_source_url` from dashboard.toml / DASHBOARD_DATA_SOURCE_URL.
        #[arg(short, long)]
        data_source_url: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Table)]
        format: ReportFormat,
    },
    /// Serve the built frontend bundle
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long)]
        bind_address: Option<String>,

        /// Directory with the `trunk build` output
        #[arg(short, long)]
        static_dir: Option<String>,
    },
}

impl Cli {
    pub async fn run(self, config: DashboardConfig) -> Result<()> {
        match self.command {
            Commands::Report { data_source_url, format } => {
                let url = data_source_url.unwrap_or(config.data_source_url);
                report(&url, format).await?;
            }
            Commands::Serve { bind_address, static_dir } => {
                let bind_address = bind_address.unwrap_or(config.bind_address);
                let static_dir = static_dir.unwrap_or(config.static_dir);
                serve(&bind_address, &static_dir).await?;
            }
        }
        Ok(())
    }
}
