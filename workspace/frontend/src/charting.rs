//! Bridge to the Plotly rendering surface.
//!
//! [`init_chart_surface`] must be called by application setup before any
//! chart renders. It applies the global Plotly config and is idempotent:
//! only the first call does anything.

use std::sync::Once;

use common::ChartDataset;
use serde_json::{json, Value};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, js_name = newPlot, catch)]
    fn new_plot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = Plotly, js_name = setPlotConfig, catch)]
    fn set_plot_config(config: JsValue) -> Result<JsValue, JsValue>;
}

static INIT: Once = Once::new();

pub fn plot_config() -> Value {
    json!({"responsive": true, "displayModeBar": false})
}

/// One-time chart surface setup. Safe to call any number of times.
pub fn init_chart_surface() {
    INIT.call_once(|| {
        log::debug!("Initializing chart surface");
        let result = serde_wasm_bindgen::to_value(&plot_config())
            .map_err(JsValue::from)
            .and_then(set_plot_config);

        match result {
            Ok(_) => log::info!("Chart surface initialized"),
            Err(e) => log::warn!("Chart surface unavailable: {:?}", e),
        }
    });
}

/// Grouped bar traces, one per series.
pub fn bar_traces(dataset: &ChartDataset) -> Value {
    let traces: Vec<Value> = dataset
        .series
        .iter()
        .map(|series| {
            json!({
                "type": "bar",
                "name": series.name,
                "x": dataset.labels,
                "y": series.values.counts(),
                "marker": {"color": series.color},
            })
        })
        .collect();
    Value::Array(traces)
}

/// Layout for the bar chart. Plotly sizes bars relative to the category
/// slot, so the series' category fraction becomes the gap between groups.
pub fn bar_layout(dataset: &ChartDataset) -> Value {
    let category_percentage = dataset
        .series
        .first()
        .map(|s| s.category_percentage)
        .unwrap_or(1.0);

    json!({
        "barmode": "group",
        "bargap": 1.0 - category_percentage,
        "margin": {"t": 10, "r": 10, "l": 40, "b": 40},
        "paper_bgcolor": "rgba(0,0,0,0)",
        "plot_bgcolor": "rgba(0,0,0,0)",
        "xaxis": {"showgrid": false},
        "yaxis": {"showgrid": true, "gridcolor": "#eee", "rangemode": "tozero"},
        "showlegend": true,
        "legend": {"orientation": "h", "y": 1.1},
    })
}

/// Draws `dataset` into the element with id `div_id`.
pub fn render_bar_chart(div_id: &str, dataset: &ChartDataset) -> Result<(), JsValue> {
    let data = serde_wasm_bindgen::to_value(&bar_traces(dataset))?;
    let layout = serde_wasm_bindgen::to_value(&bar_layout(dataset))?;
    let config = serde_wasm_bindgen::to_value(&plot_config())?;

    log::trace!("Rendering bar chart into #{}", div_id);
    new_plot(div_id, data, layout, config)?;
    Ok(())
}
