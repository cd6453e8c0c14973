use yew::prelude::*;
use crate::components::dashboard::HeightDistribution;
use crate::components::layout::layout::Layout;

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    html! {
        <Layout title="Dashboard">
            <HeightDistribution />
        </Layout>
    }
}
