mod app;
mod canvas;
mod channel;
mod color;
mod config;
mod constants;
mod effects;
mod feedback;
mod particles;
mod protocol;
mod render_loop;
mod renderer;
mod rng;
mod state;

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::DisplayConfig;

fn main() {
    console_error_panic_hook::set_once();

    let config = DisplayConfig::from_location();

    // Mount inside the host container when one is configured and present
    let host = config
        .container_id()
        .and_then(|id| web_sys::window()?.document()?.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());

    match host {
        Some(host) => leptos::mount::mount_to(host, move || view! { <app::App config=config /> }).forget(),
        None => leptos::mount::mount_to_body(move || view! { <app::App config=config /> }),
    }
}
