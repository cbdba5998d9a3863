// Message channel
pub const SCORE_MESSAGE_TYPE: &str = "H5P_SCORE_RESULT";

// Canvas
pub const CANVAS_ID: &str = "scoreCanvas";
pub const WINDOW_FRACTION: f64 = 0.5; // default surface = half the window
pub const TRAIL_FADE: &str = "rgba(255, 255, 255, 0.2)";

// Text layout (offsets from canvas centre)
pub const HEADLINE_SIZE: f64 = 80.0;
pub const SCORE_LINE_SIZE: f64 = 50.0;
pub const HEADLINE_OFFSET_Y: f64 = -50.0;
pub const SCORE_LINE_OFFSET_Y: f64 = 50.0;
pub const DECORATION_OFFSET_Y: f64 = 150.0;
pub const DECORATION_SIZE: f64 = 150.0;

// Score thresholds (percent)
pub const PERFECT_PERCENT: f64 = 100.0;
pub const CIRCLE_PERCENT: f64 = 90.0;
pub const GOOD_PERCENT: f64 = 60.0;

// Fireworks
pub const SPAWN_CHANCE: f64 = 0.03; // per frame, only on a perfect score
pub const GRAVITY: f64 = 0.2;
pub const ROCKET_SPEED_MIN: f64 = 8.0;
pub const ROCKET_SPEED_MAX: f64 = 12.0;
pub const FRAGMENT_SPEED_MIN: f64 = 2.0;
pub const FRAGMENT_SPEED_MAX: f64 = 10.0;
pub const FRAGMENT_COUNT: usize = 100;
pub const FRAGMENT_DRAG: f64 = 0.9;
pub const LIFESPAN_MAX: f64 = 255.0;
pub const LIFESPAN_DECAY: f64 = 4.0;
pub const ROCKET_DOT: f64 = 4.0;
pub const FRAGMENT_DOT: f64 = 2.0;
pub const HUE_RANGE: f64 = 360.0;
