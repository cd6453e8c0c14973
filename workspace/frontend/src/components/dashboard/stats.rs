use yew::prelude::*;

use crate::components::effects::CountUp;

#[derive(Properties, PartialEq)]
pub struct TotalUsersProps {
    pub total: usize,
}

#[function_component(TotalUsers)]
pub fn total_users(props: &TotalUsersProps) -> Html {
    html! {
        <div class="stats shadow bg-base-100">
            <div class="stat">
                <div class="stat-title">{"Total users"}</div>
                <div class="stat-value text-primary">
                    <CountUp to={props.total as u64} duration_ms={1000} class="count-up-text" />
                </div>
            </div>
        </div>
    }
}
