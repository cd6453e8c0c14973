use yew::prelude::*;
use common::ViewState;
use crate::api_client::users::HttpUserSource;

/// Loads the height distribution once, on mount.
///
/// The returned state starts as `Loading` and settles to `Ready` or `Failed`.
/// There is no refetch; a result arriving after unmount is dropped by Yew.
#[hook]
pub fn use_height_distribution() -> UseStateHandle<ViewState> {
    let state = use_state(ViewState::default);

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            log::debug!("Height distribution mounted, starting load");

            wasm_bindgen_futures::spawn_local(async move {
                let settled = common::run(&HttpUserSource).await;
                state.set(settled);
            });
            || ()
        });
    }

    state
}
