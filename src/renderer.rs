use web_sys::CanvasRenderingContext2d;

use crate::constants::*;
use crate::effects;
use crate::feedback::{Caption, Decoration, Shape};
use crate::state::SharedState;

pub fn render(ctx: &CanvasRenderingContext2d, state: &SharedState) {
    let plan = state.borrow_mut().tick();

    let s = state.borrow();
    let (w, h) = (s.screen_w, s.screen_h);

    // Translucent wash instead of a clear, so particles leave trails
    ctx.set_fill_style_str(TRAIL_FADE);
    ctx.fill_rect(0.0, 0.0, w, h);

    draw_caption(ctx, &plan.headline, w, h);
    draw_caption(ctx, &plan.score_line, w, h);

    if let Some(decoration) = plan.decoration {
        draw_decoration(ctx, decoration, w, h);
    }

    if !s.show.is_empty() {
        effects::render_fireworks(ctx, &s.show);
    }
}

fn draw_caption(ctx: &CanvasRenderingContext2d, caption: &Caption, w: f64, h: f64) {
    if caption.text.is_empty() {
        return;
    }
    ctx.set_font(&format!("{}px sans-serif", caption.size));
    ctx.set_text_align("center");
    ctx.set_fill_style_str(&caption.color.to_css());
    let _ = ctx.fill_text(&caption.text, w / 2.0, h / 2.0 + caption.offset_y);
}

fn draw_decoration(ctx: &CanvasRenderingContext2d, decoration: Decoration, w: f64, h: f64) {
    let cx = w / 2.0;
    let cy = h / 2.0 + DECORATION_OFFSET_Y;
    ctx.set_fill_style_str(&decoration.color.to_css());
    match decoration.shape {
        Shape::Circle => {
            ctx.begin_path();
            let _ = ctx.arc(cx, cy, DECORATION_SIZE / 2.0, 0.0, std::f64::consts::PI * 2.0);
            ctx.fill();
        }
        Shape::Square => {
            let half = DECORATION_SIZE / 2.0;
            ctx.fill_rect(cx - half, cy - half, DECORATION_SIZE, DECORATION_SIZE);
        }
    }
}
