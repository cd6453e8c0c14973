use anyhow::{bail, Result};
use clap::ValueEnum;
use common::{format_count, ChartDataset, DistributionView, ViewState, HEIGHT_RANGES};
use std::fmt::Write;
use tracing::{info, trace};

use crate::source::ReqwestUserSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human readable table
    Table,
    /// The chart dataset as JSON
    Json,
}

/// Loads the users once and prints the height distribution.
pub async fn report(data_source_url: &str, format: ReportFormat) -> Result<()> {
    trace!("Entering report function");
    info!("Loading users from {}", data_source_url);

    let source = ReqwestUserSource::new(data_source_url);
    let view = match common::run(&source).await {
        ViewState::Ready(view) => view,
        ViewState::Failed(err) => bail!("Could not load user data: {}", err),
        ViewState::Loading => bail!("Load did not settle"),
    };

    let output = match format {
        ReportFormat::Table => render_table(&view),
        ReportFormat::Json => render_json(&view.dataset)?,
    };
    println!("{}", output);
    Ok(())
}

pub fn render_table(view: &DistributionView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<10} {:>8} {:>8}", "Height", "Male", "Female");
    for (i, range) in HEIGHT_RANGES.iter().enumerate() {
        let _ = writeln!(out, "{:<10} {:>8} {:>8}", range.label, view.male[i], view.female[i]);
    }
    let _ = write!(out, "Total users: {}", format_count(view.total as u64));
    out
}

pub fn render_json(dataset: &ChartDataset) -> Result<String> {
    Ok(serde_json::to_string_pretty(dataset)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{Gender, UserRecord};

    #[test]
    fn test_render_table() {
        let view = DistributionView::from_records(&[
            UserRecord::new(155.0, Gender::Male),
            UserRecord::new(165.0, Gender::Female),
            UserRecord::new(195.0, Gender::Male),
        ]);

        let table = render_table(&view);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 7);
        assert_eq!(lines[1].split_whitespace().collect::<Vec<_>>(), vec!["150", "cm+", "1", "0"]);
        assert_eq!(lines[2].split_whitespace().collect::<Vec<_>>(), vec!["160", "cm+", "0", "1"]);
        assert_eq!(lines[5].split_whitespace().collect::<Vec<_>>(), vec!["190", "cm+", "1", "0"]);
        assert_eq!(lines[6], "Total users: 3");
    }

    #[test]
    fn test_render_json_contains_series() {
        let view = DistributionView::from_records(&[]);
        let json: serde_json::Value = serde_json::from_str(&render_json(&view.dataset).unwrap()).unwrap();

        assert_eq!(json["labels"].as_array().unwrap().len(), 5);
        assert_eq!(json["series"][1]["name"], "Female");
    }
}
