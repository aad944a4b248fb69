//! Card instances - runtime card state.
//!
//! `CardInstance` is one physical card on the table. Every definition is
//! dealt as two instances that share a `CardId`. The instance tracks
//! whether it is face-up and whether its pair has been found.

use serde::{Deserialize, Serialize};

use super::definition::CardId;

/// Stable identifier of one placed card.
///
/// Assigned when the deck is built and unchanged by shuffling, so the
/// renderer can key its nodes by it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstanceId(pub u32);

impl InstanceId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Instance({})", self.0)
    }
}

/// A card on the table.
///
/// A matched card stays flipped for the rest of the session and can no
/// longer be selected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardInstance {
    /// Unique id for this instance.
    pub id: InstanceId,

    /// Reference to the card definition (the pair identity).
    pub card_id: CardId,

    /// Is this card face-up?
    pub flipped: bool,

    /// Has this card's pair been found?
    pub matched: bool,
}

impl CardInstance {
    /// Create a face-down, unmatched instance.
    #[must_use]
    pub fn new(id: InstanceId, card_id: CardId) -> Self {
        Self {
            id,
            card_id,
            flipped: false,
            matched: false,
        }
    }

    /// Can this card start or complete a selection?
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        !self.flipped && !self.matched
    }

    /// Does this card pair with `other`?
    ///
    /// An instance never pairs with itself.
    #[must_use]
    pub fn pairs_with(&self, other: &CardInstance) -> bool {
        self.id != other.id && self.card_id == other.card_id
    }

    pub fn flip_up(&mut self) {
        self.flipped = true;
    }

    pub fn flip_down(&mut self) {
        self.flipped = false;
    }

    /// Mark as permanently revealed.
    pub fn mark_matched(&mut self) {
        self.flipped = true;
        self.matched = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_instance_new() {
        let instance = CardInstance::new(InstanceId::new(3), CardId::new(1));

        assert_eq!(instance.id, InstanceId(3));
        assert_eq!(instance.card_id, CardId::new(1));
        assert!(!instance.flipped);
        assert!(!instance.matched);
        assert!(instance.is_selectable());
    }

    #[test]
    fn test_flip_and_match() {
        let mut instance = CardInstance::new(InstanceId::new(0), CardId::new(0));

        instance.flip_up();
        assert!(instance.flipped);
        assert!(!instance.is_selectable());

        instance.flip_down();
        assert!(instance.is_selectable());

        instance.mark_matched();
        assert!(instance.flipped);
        assert!(instance.matched);
        assert!(!instance.is_selectable());
    }

    #[test]
    fn test_pairs_with() {
        let a = CardInstance::new(InstanceId::new(0), CardId::new(4));
        let b = CardInstance::new(InstanceId::new(1), CardId::new(4));
        let c = CardInstance::new(InstanceId::new(2), CardId::new(5));

        assert!(a.pairs_with(&b));
        assert!(!a.pairs_with(&c));
        assert!(!a.pairs_with(&a));
    }

    #[test]
    fn test_instance_id_display() {
        assert_eq!(InstanceId::new(7).to_string(), "Instance(7)");
    }
}
