use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::config::DisplayConfig;
use crate::constants::CANVAS_ID;
use crate::rng::Rng;
use crate::state::{self, SharedState};
use crate::{canvas, channel, render_loop};

fn start(state: SharedState, readout: RwSignal<String>) -> Result<(), JsValue> {
    canvas::resize(&state)?;
    canvas::setup_resize_handler(state.clone())?;
    channel::listen(state.clone(), readout)?;
    render_loop::start_render_loop(state);
    Ok(())
}

#[component]
pub fn App(config: DisplayConfig) -> impl IntoView {
    let app_state = state::new_shared_state(config, Rng::from_entropy());

    // Mirrors the latest score for screen readers; the canvas itself is opaque to them
    let readout = RwSignal::new(String::new());

    let state_for_mount = send_wrapper::SendWrapper::new(app_state);
    Effect::new(move |_| {
        let state = (*state_for_mount).clone();
        match start(state, readout) {
            Ok(()) => web_sys::console::log_1(&"Score display ready".into()),
            Err(e) => web_sys::console::error_1(&e),
        }
    });

    view! {
        <canvas id=CANVAS_ID></canvas>
        <p
            class="score-readout"
            aria-live="polite"
            style="position: absolute; left: -9999px;"
        >
            {move || readout.get()}
        </p>
    }
}
