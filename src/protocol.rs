use serde::Deserialize;

use crate::constants::SCORE_MESSAGE_TYPE;

// Host page -> sketch: score result posted after the quiz finishes
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ScoreMessage {
    #[serde(rename = "type")]
    pub kind: String,
    pub score: f64,
    #[serde(rename = "maxScore")]
    pub max_score: f64,
}

/// State change produced by the message channel and applied by the frame loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScoreEvent {
    Received { score: f64, max_score: f64 },
}

impl ScoreMessage {
    pub fn into_event(self) -> Option<ScoreEvent> {
        if self.kind != SCORE_MESSAGE_TYPE {
            return None;
        }
        Some(ScoreEvent::Received {
            score: self.score,
            max_score: self.max_score,
        })
    }
}

/// Decode a JSON payload. Anything that is not a well-formed score result
/// yields `None`; the page sees plenty of unrelated messages.
pub fn decode(text: &str) -> Option<ScoreEvent> {
    serde_json::from_str::<ScoreMessage>(text)
        .ok()
        .and_then(ScoreMessage::into_event)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_score_result() {
        let ev = decode(r#"{"type":"H5P_SCORE_RESULT","score":7,"maxScore":10}"#);
        assert_eq!(ev, Some(ScoreEvent::Received { score: 7.0, max_score: 10.0 }));
    }

    #[test]
    fn ignores_other_types() {
        assert_eq!(decode(r#"{"type":"H5P_RESIZE","score":7,"maxScore":10}"#), None);
    }

    #[test]
    fn ignores_missing_fields() {
        assert_eq!(decode(r#"{"type":"H5P_SCORE_RESULT","score":7}"#), None);
        assert_eq!(decode(r#"{"type":"H5P_SCORE_RESULT","maxScore":7}"#), None);
        assert_eq!(decode(r#"{"score":7,"maxScore":10}"#), None);
    }

    #[test]
    fn ignores_non_numeric_and_garbage() {
        assert_eq!(decode(r#"{"type":"H5P_SCORE_RESULT","score":"7","maxScore":10}"#), None);
        assert_eq!(decode(r#"{"type":"H5P_SCORE_RESULT","score":null,"maxScore":10}"#), None);
        assert_eq!(decode("not json"), None);
        assert_eq!(decode("42"), None);
    }

    #[test]
    fn passes_through_unvalidated_values() {
        let ev = decode(r#"{"type":"H5P_SCORE_RESULT","score":-3.5,"maxScore":0,"extra":true}"#);
        assert_eq!(ev, Some(ScoreEvent::Received { score: -3.5, max_score: 0.0 }));
    }
}
