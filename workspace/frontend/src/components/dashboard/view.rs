use common::ViewState;
use yew::prelude::*;

use super::chart::HeightChart;
use super::stats::TotalUsers;
use crate::common::error::ErrorDisplay;
use crate::common::skeleton::DistributionSkeleton;
use crate::components::effects::SplitText;
use crate::hooks::use_height_distribution;

/// Height distribution by gender: skeleton while loading, then the chart and
/// the total user count.
#[function_component(HeightDistribution)]
pub fn height_distribution() -> Html {
    let state = use_height_distribution();

    let on_title_animated = Callback::from(|_: ()| {
        log::info!("All letters have animated");
    });

    match &*state {
        ViewState::Loading => html! { <DistributionSkeleton /> },
        ViewState::Failed(err) => html! { <ErrorDisplay message={err.clone()} /> },
        ViewState::Ready(view) => html! {
            <div class="min-w-[1000px] w-1/2 p-20">
                <SplitText
                    text="Height distribution by gender."
                    class="text-2xl font-semibold text-center"
                    delay_ms={150}
                    on_complete={on_title_animated}
                />
                <HeightChart dataset={view.dataset.clone()} />
                <TotalUsers total={view.total} />
            </div>
        },
    }
}
