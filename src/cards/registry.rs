//! Card registry for the loaded definition set.
//!
//! The `CardRegistry` keeps the validated definitions a session was started
//! with, in their original order, so a restart can deal again without
//! fetching. It provides lookup by `CardId` and by name.

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId};
use crate::error::{GameError, Result};

/// Validated, ordered set of unique card definitions.
///
/// ## Example
///
/// ```
/// use pair_match::cards::{CardDefinition, CardId, CardRegistry};
///
/// let registry = CardRegistry::from_definitions(vec![
///     CardDefinition::new("cat", "cat.png"),
///     CardDefinition::new("dog", "dog.png"),
/// ])
/// .unwrap();
///
/// assert_eq!(registry.len(), 2);
/// assert_eq!(registry.id_of("dog"), Some(CardId::new(1)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: Vec<CardDefinition>,
    by_name: FxHashMap<String, CardId>,
}

impl CardRegistry {
    /// Validate definitions and build a registry.
    ///
    /// Fails with `InvalidInput` when the list is empty, an entry has a
    /// blank name or image, or a name appears twice.
    pub fn from_definitions(definitions: Vec<CardDefinition>) -> Result<Self> {
        if definitions.is_empty() {
            return Err(GameError::InvalidInput(
                "at least one card definition is required".to_string(),
            ));
        }

        let mut by_name = FxHashMap::default();
        for (index, def) in definitions.iter().enumerate() {
            if !def.is_well_formed() {
                return Err(GameError::InvalidInput(format!(
                    "card {index} needs a non-blank name and image"
                )));
            }
            let id = CardId::new(index as u32);
            if by_name.insert(def.name.clone(), id).is_some() {
                return Err(GameError::InvalidInput(format!(
                    "duplicate card name `{}`",
                    def.name
                )));
            }
        }

        Ok(Self {
            cards: definitions,
            by_name,
        })
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(id.index())
    }

    /// Look up the ID assigned to a name.
    #[must_use]
    pub fn id_of(&self, name: &str) -> Option<CardId> {
        self.by_name.get(name).copied()
    }

    /// Number of unique definitions (pairs per deal).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over `(CardId, definition)` in load order.
    pub fn iter(&self) -> impl Iterator<Item = (CardId, &CardDefinition)> {
        self.cards
            .iter()
            .enumerate()
            .map(|(i, def)| (CardId::new(i as u32), def))
    }
}
