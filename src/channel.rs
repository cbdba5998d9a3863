use leptos::prelude::{RwSignal, Set};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::MessageEvent;

use crate::protocol::{self, ScoreEvent};
use crate::state::{self, SharedState};

// postMessage payloads arrive either as JSON strings or as structured-clone objects
fn message_text(data: &JsValue) -> Option<String> {
    if let Some(text) = data.as_string() {
        return Some(text);
    }
    if !data.is_object() {
        return None;
    }
    js_sys::JSON::stringify(data).ok().map(String::from)
}

/// Listen for score results posted to this window. Accepted messages are
/// queued for the next frame; everything else is dropped silently.
pub fn listen(state: SharedState, readout: RwSignal<String>) -> Result<(), JsValue> {
    let on_message = Closure::wrap(Box::new(move |e: MessageEvent| {
        let Some(event) = message_text(&e.data()).and_then(|text| protocol::decode(&text)) else {
            return;
        };

        state.borrow_mut().push_event(event);

        let ScoreEvent::Received { score, max_score } = event;
        let text = state::display_text(score, max_score);
        web_sys::console::log_1(&format!("新的分數已接收: {}", text).into());
        readout.set(text);
    }) as Box<dyn FnMut(MessageEvent)>);

    let window = web_sys::window().ok_or("no window")?;
    window.add_event_listener_with_callback("message", on_message.as_ref().unchecked_ref())?;
    on_message.forget();
    Ok(())
}
