use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::canvas;
use crate::constants::CANVAS_ID;
use crate::renderer;
use crate::state::SharedState;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn request_frame(callback: &FrameCallback) {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return,
    };
    if let Some(cb) = callback.borrow().as_ref() {
        let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Drive `renderer::render` from `requestAnimationFrame` for the lifetime of the page.
pub fn start_render_loop(state: SharedState) {
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |_timestamp: f64| {
        // Canvas may be gone (host tore it down); keep pumping regardless
        if let Some(ctx) = canvas::get_canvas_context(CANVAS_ID) {
            renderer::render(&ctx, &state);
        }

        request_frame(&f);
    }) as Box<dyn FnMut(f64)>));

    request_frame(&g);
}
