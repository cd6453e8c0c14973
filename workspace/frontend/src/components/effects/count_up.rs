use common::{count_up_value, format_count};
use gloo_timers::callback::Interval;
use yew::prelude::*;

const FRAME_MS: u32 = 16;

#[derive(Properties, PartialEq)]
pub struct CountUpProps {
    pub to: u64,
    #[prop_or(1000)]
    pub duration_ms: u32,
    #[prop_or_default]
    pub class: Classes,
}

/// Counts from 0 up to `to`, rendered with thousands separators.
#[function_component(CountUp)]
pub fn count_up(props: &CountUpProps) -> Html {
    let value = use_state_eq(|| 0u64);

    {
        let value = value.clone();
        let duration_ms = props.duration_ms;
        use_effect_with(props.to, move |&to| {
            let started = js_sys::Date::now();
            let interval = Interval::new(FRAME_MS, move || {
                let elapsed = (js_sys::Date::now() - started).max(0.0) as u32;
                value.set(count_up_value(to, elapsed, duration_ms));
            });
            move || drop(interval)
        });
    }

    html! {
        <span class={props.class.clone()}>{ format_count(*value) }</span>
    }
}
