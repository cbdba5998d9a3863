use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

use crate::constants::CANVAS_ID;
use crate::state::SharedState;

fn window_size(window: &web_sys::Window) -> Option<(f64, f64)> {
    let w = window.inner_width().ok()?.as_f64()?;
    let h = window.inner_height().ok()?.as_f64()?;
    Some((w, h))
}

fn container_size(document: &web_sys::Document, id: &str) -> Option<(f64, f64)> {
    let rect = document.get_element_by_id(id)?.get_bounding_client_rect();
    Some((rect.width(), rect.height()))
}

/// Refit the surface to the configured sizing policy and repaint it white.
pub fn resize(state: &SharedState) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let window_dims = window_size(&window).ok_or("window has no size")?;

    let (w, h) = {
        let s = state.borrow();
        let container = s.config.container_id().and_then(|id| container_size(&document, id));
        s.config.resolve_size(window_dims, container)
    };

    let canvas: HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or("score canvas not mounted")?
        .dyn_into()?;
    canvas.set_width(w as u32);
    canvas.set_height(h as u32);

    // Resizing wipes the bitmap to transparent
    if let Some(ctx) = get_canvas_context(CANVAS_ID) {
        ctx.set_fill_style_str("#ffffff");
        ctx.fill_rect(0.0, 0.0, w, h);
    }

    let mut s = state.borrow_mut();
    s.screen_w = w;
    s.screen_h = h;
    Ok(())
}

pub fn setup_resize_handler(state: SharedState) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
        if let Err(e) = resize(&state) {
            web_sys::console::warn_1(&e);
        }
    }) as Box<dyn FnMut(web_sys::Event)>);

    let window = web_sys::window().ok_or("no window")?;
    window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub fn get_canvas_context(id: &str) -> Option<web_sys::CanvasRenderingContext2d> {
    let document = web_sys::window()?.document()?;
    let canvas = document.get_element_by_id(id)?;
    let canvas: HtmlCanvasElement = canvas.unchecked_into();
    canvas
        .get_context("2d")
        .ok()?
        .map(|c| c.unchecked_into())
}
