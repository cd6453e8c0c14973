use common::ChartDataset;
use web_sys::Element;
use yew::prelude::*;

use crate::charting::render_bar_chart;

#[derive(Properties, PartialEq)]
pub struct HeightChartProps {
    pub dataset: ChartDataset,
}

/// Grouped bar chart of the height distribution per gender.
#[function_component(HeightChart)]
pub fn height_chart(props: &HeightChartProps) -> Html {
    let chart_ref = use_node_ref();

    use_effect_with((chart_ref.clone(), props.dataset.clone()), move |(chart_ref, dataset)| {
        if let Some(element) = chart_ref.cast::<Element>() {
            let div_id = element.id();
            if !div_id.is_empty() {
                if let Err(e) = render_bar_chart(&div_id, dataset) {
                    log::error!("Failed to render height chart: {:?}", e);
                }
            }
        }
        || ()
    });

    html! {
        <div ref={chart_ref} id="chart-height-distribution" class="chart-container" style="height: 400px;"></div>
    }
}
