//! Game events.
//!
//! Every state change a renderer might care about is queued as a
//! `GameEvent`. The renderer drains the queue after each call into the
//! session and updates its view; it never writes back.

use serde::{Deserialize, Serialize};

use crate::cards::InstanceId;

/// Something that happened in a session.
///
/// Serializes with a `type` tag, e.g.
/// `{"type":"score_changed","score":2}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// A new deck was dealt from freshly loaded definitions.
    Started { pairs: usize },
    /// The loaded definitions were dealt again.
    Restarted { pairs: usize },
    /// A card turned face-up.
    CardFlipped { card: InstanceId },
    /// The selected pair matched and is now permanently revealed.
    PairMatched { first: InstanceId, second: InstanceId },
    /// The selected pair did not match; it stays up until concealed.
    PairMismatched { first: InstanceId, second: InstanceId },
    /// A mismatched pair turned face-down.
    PairConcealed { first: InstanceId, second: InstanceId },
    /// The score display should show a new value.
    ScoreChanged { score: u32 },
    /// Every pair has been found.
    Completed { score: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_json_shape() {
        let json = serde_json::to_string(&GameEvent::ScoreChanged { score: 2 }).unwrap();
        assert_eq!(json, r#"{"type":"score_changed","score":2}"#);

        let json = serde_json::to_string(&GameEvent::CardFlipped { card: InstanceId::new(3) }).unwrap();
        assert_eq!(json, r#"{"type":"card_flipped","card":3}"#);
    }

    #[test]
    fn test_event_serde() {
        let event = GameEvent::PairMismatched {
            first: InstanceId::new(1),
            second: InstanceId::new(4),
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}
