use web_sys::CanvasRenderingContext2d;

use crate::color::Hsb;
use crate::constants::{FRAGMENT_DOT, ROCKET_DOT};
use crate::particles::FireworkShow;

pub fn render_fireworks(ctx: &CanvasRenderingContext2d, show: &FireworkShow) {
    for fw in &show.fireworks {
        // One hue per firework; opacity varies per particle
        ctx.set_fill_style_str(&Hsb::new(fw.hue, 100.0, 100.0).to_css());
        for p in fw.visible() {
            let size = if p.is_rocket() { ROCKET_DOT } else { FRAGMENT_DOT };
            ctx.set_global_alpha(p.alpha());
            ctx.begin_path();
            let _ = ctx.arc(p.pos.x, p.pos.y, size / 2.0, 0.0, std::f64::consts::PI * 2.0);
            ctx.fill();
        }
    }
    ctx.set_global_alpha(1.0);
}
