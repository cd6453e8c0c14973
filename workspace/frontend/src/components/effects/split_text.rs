use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Length of a single letter's reveal animation, see `.split-letter` in index.html.
const LETTER_ANIMATION_MS: u32 = 600;

#[derive(Properties, PartialEq)]
pub struct SplitTextProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// Delay between consecutive letters.
    #[prop_or(150)]
    pub delay_ms: u32,
    /// Fired once after the last letter finished animating.
    #[prop_or_default]
    pub on_complete: Option<Callback<()>>,
}

/// Reveals `text` letter by letter.
#[function_component(SplitText)]
pub fn split_text(props: &SplitTextProps) -> Html {
    let letters: Vec<char> = props.text.chars().collect();
    let total_ms = (letters.len() as u32).saturating_sub(1) * props.delay_ms + LETTER_ANIMATION_MS;

    {
        let on_complete = props.on_complete.clone();
        use_effect_with(props.text.clone(), move |_| {
            let timeout = on_complete.map(|on_complete| {
                Timeout::new(total_ms, move || on_complete.emit(()))
            });
            move || drop(timeout)
        });
    }

    html! {
        <p class={props.class.clone()} aria-label={props.text.clone()}>
            { for letters.iter().enumerate().map(|(i, letter)| {
                let style = format!("animation-delay: {}ms", i as u32 * props.delay_ms);
                html! {
                    <span class="split-letter inline-block" style={style} aria-hidden="true">
                        { if letter.is_whitespace() { '\u{00a0}'.to_string() } else { letter.to_string() } }
                    </span>
                }
            }) }
        </p>
    }
}
