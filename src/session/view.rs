//! Read-only views for renderers.

use serde::{Deserialize, Serialize};

use crate::cards::{CardInstance, CardRegistry, InstanceId};
use crate::turn::TurnPhase;

/// What a renderer needs to draw one card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub id: InstanceId,
    /// Identity key shared by both cards of a pair.
    pub name: String,
    pub image: String,
    pub flipped: bool,
    pub matched: bool,
}

impl CardView {
    pub(crate) fn new(card: &CardInstance, registry: &CardRegistry) -> Self {
        let (name, image) = registry
            .get(card.card_id)
            .map(|def| (def.name.clone(), def.image.clone()))
            .unwrap_or_default();
        Self {
            id: card.id,
            name,
            image,
            flipped: card.flipped,
            matched: card.matched,
        }
    }

    /// The face image to show, falling back to `placeholder` once the
    /// renderer has seen the real image fail to load.
    #[must_use]
    pub fn face_image<'a>(&'a self, placeholder: &'a str, load_failed: bool) -> &'a str {
        if load_failed || self.image.is_empty() {
            placeholder
        } else {
            &self.image
        }
    }
}

/// Full render state of a session, cards in table order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub cards: Vec<CardView>,
    pub score: u32,
    pub phase: TurnPhase,
    pub pairs: usize,
    pub complete: bool,
    pub placeholder_image: String,
}
