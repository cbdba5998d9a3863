/// HSB colour in the 360/100/100/1 ranges used throughout the sketch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsb {
    pub h: f64,
    pub s: f64,
    pub b: f64,
    pub a: f64,
}

impl Hsb {
    pub const fn new(h: f64, s: f64, b: f64) -> Self {
        Self { h, s, b, a: 1.0 }
    }

    pub const fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// Canvas only understands HSL, so convert HSV -> HSL first.
    pub fn to_css(self) -> String {
        let s = (self.s / 100.0).clamp(0.0, 1.0);
        let v = (self.b / 100.0).clamp(0.0, 1.0);
        let l = v * (1.0 - s / 2.0);
        let sl = if l <= 0.0 || l >= 1.0 {
            0.0
        } else {
            (v - l) / l.min(1.0 - l)
        };
        format!(
            "hsla({:.1}, {:.1}%, {:.1}%, {:.3})",
            self.h.rem_euclid(360.0),
            sl * 100.0,
            l * 100.0,
            self.a.clamp(0.0, 1.0),
        )
    }
}

pub const GREEN: Hsb = Hsb::new(120.0, 100.0, 70.0);
pub const YELLOW: Hsb = Hsb::new(45.0, 100.0, 80.0);
pub const RED: Hsb = Hsb::new(0.0, 100.0, 80.0);
pub const GREY: Hsb = Hsb::new(0.0, 0.0, 60.0);
pub const DARK_GREY: Hsb = Hsb::new(0.0, 0.0, 20.0);
