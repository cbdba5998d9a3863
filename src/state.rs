use std::cell::RefCell;
use std::rc::Rc;

use crate::config::DisplayConfig;
use crate::constants::{GRAVITY, SPAWN_CHANCE};
use crate::feedback::FramePlan;
use crate::particles::{FireworkShow, Vec2};
use crate::protocol::ScoreEvent;
use crate::rng::Rng;

/// Render a number the way a JS template literal would: `7`, not `7.0`.
pub fn format_number(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v.is_infinite() {
        let sign = if v > 0.0 { "" } else { "-" };
        format!("{sign}Infinity")
    } else if v == 0.0 {
        "0".to_string()
    } else if v.fract() == 0.0 && v.abs() < 1e21 {
        format!("{:.0}", v)
    } else {
        format!("{}", v)
    }
}

pub fn display_text(score: f64, max_score: f64) -> String {
    format!("最終成績分數: {}/{}", format_number(score), format_number(max_score))
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreState {
    pub final_score: f64,
    pub max_score: f64,
    pub display_text: String,
}

impl ScoreState {
    pub fn apply(&mut self, event: ScoreEvent) {
        match event {
            ScoreEvent::Received { score, max_score } => {
                self.final_score = score;
                self.max_score = max_score;
                self.display_text = display_text(score, max_score);
            }
        }
    }

    pub fn score_line(&self) -> String {
        format!("得分: {}/{}", format_number(self.final_score), format_number(self.max_score))
    }
}

pub struct AppState {
    pub config: DisplayConfig,

    // Score
    pub score: ScoreState,
    pub inbox: Vec<ScoreEvent>,
    pub redraw_requested: bool,

    // Screen
    pub screen_w: f64,
    pub screen_h: f64,

    // Fireworks
    pub show: FireworkShow,
    pub gravity: Vec2,
    pub rng: Rng,
}

impl AppState {
    pub fn new(config: DisplayConfig, rng: Rng) -> Self {
        Self {
            config,

            score: ScoreState::default(),
            inbox: Vec::with_capacity(4),
            redraw_requested: false,

            screen_w: 0.0,
            screen_h: 0.0,

            show: FireworkShow::new(),
            gravity: Vec2::new(0.0, GRAVITY),
            rng,
        }
    }

    /// Queue an event for the next frame. The loop is continuous, so the
    /// redraw flag only records that something changed.
    pub fn push_event(&mut self, event: ScoreEvent) {
        self.inbox.push(event);
        self.request_redraw();
    }

    pub fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    /// Advance one frame: apply queued events, roll for a new firework, and
    /// step the particle system. Returns what the renderer should draw.
    pub fn tick(&mut self) -> FramePlan {
        if std::mem::take(&mut self.redraw_requested) {
            for event in std::mem::take(&mut self.inbox) {
                self.score.apply(event);
            }
        }

        let plan = FramePlan::for_score(&self.score);
        if plan.spawns_fireworks() && self.rng.chance(SPAWN_CHANCE) {
            self.show.spawn(self.screen_w, self.screen_h, &mut self.rng);
        }
        self.show.update(self.gravity, &mut self.rng);
        plan
    }
}

pub type SharedState = Rc<RefCell<AppState>>;

pub fn new_shared_state(config: DisplayConfig, rng: Rng) -> SharedState {
    Rc::new(RefCell::new(AppState::new(config, rng)))
}
