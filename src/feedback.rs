use crate::color::{self, Hsb};
use crate::constants::*;
use crate::state::ScoreState;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Feedback {
    /// Full marks: congratulations and fireworks.
    Perfect,
    Good,
    Low,
    /// No usable score yet (no message, zero/negative maximum, or zero score).
    NoScore,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle,
    Square,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decoration {
    pub shape: Shape,
    pub color: Hsb,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Caption {
    pub text: String,
    pub color: Hsb,
    pub size: f64,
    /// Vertical offset from the canvas centre.
    pub offset_y: f64,
}

/// Everything the renderer needs for one frame, minus the fireworks.
#[derive(Debug, Clone, PartialEq)]
pub struct FramePlan {
    pub feedback: Feedback,
    pub headline: Caption,
    pub score_line: Caption,
    pub decoration: Option<Decoration>,
}

/// `None` when there is nothing meaningful to divide by.
pub fn percentage(score: &ScoreState) -> Option<f64> {
    if score.max_score <= 0.0 {
        return None;
    }
    let pct = score.final_score / score.max_score * 100.0;
    pct.is_finite().then_some(pct)
}

pub fn classify(score: &ScoreState) -> Feedback {
    match percentage(score) {
        Some(p) if p >= PERFECT_PERCENT => Feedback::Perfect,
        Some(p) if p >= GOOD_PERCENT => Feedback::Good,
        Some(p) if p > 0.0 => Feedback::Low,
        _ => Feedback::NoScore,
    }
}

// Shape choice is independent of the headline: a 95% gets the "good"
// text but the perfect-score circle.
fn decoration(score: &ScoreState) -> Option<Decoration> {
    let p = percentage(score)?;
    if p >= CIRCLE_PERCENT {
        Some(Decoration { shape: Shape::Circle, color: color::GREEN.with_alpha(0.5) })
    } else if p >= GOOD_PERCENT {
        Some(Decoration { shape: Shape::Square, color: color::YELLOW.with_alpha(0.5) })
    } else {
        None
    }
}

impl FramePlan {
    pub fn for_score(score: &ScoreState) -> Self {
        let feedback = classify(score);
        let headline = |text: &str, color: Hsb| Caption {
            text: text.to_string(),
            color,
            size: HEADLINE_SIZE,
            offset_y: HEADLINE_OFFSET_Y,
        };
        let headline = match feedback {
            Feedback::Perfect => headline("恭喜！優異成績！", color::GREEN),
            Feedback::Good => headline("成績良好，請再接再厲。", color::YELLOW),
            Feedback::Low => headline("需要加強努力！", color::RED),
            Feedback::NoScore => Caption {
                text: score.display_text.clone(),
                color: color::GREY,
                size: HEADLINE_SIZE,
                offset_y: 0.0,
            },
        };

        Self {
            feedback,
            headline,
            score_line: Caption {
                text: score.score_line(),
                color: color::DARK_GREY,
                size: SCORE_LINE_SIZE,
                offset_y: SCORE_LINE_OFFSET_Y,
            },
            decoration: decoration(score),
        }
    }

    pub fn spawns_fireworks(&self) -> bool {
        self.feedback == Feedback::Perfect
    }
}
