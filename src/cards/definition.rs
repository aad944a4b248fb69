//! Card definitions - static card data.
//!
//! `CardDefinition` is one face of the game: a unique name and the image
//! the renderer shows when the card is face-up. Each definition is dealt
//! twice, once per card of the pair.
//!
//! Instance-specific data (flipped, matched) lives in `CardInstance`.

use serde::{Deserialize, Serialize};

/// Index of a definition inside the loaded card set.
///
/// Two instances with the same `CardId` form a pair. Names are unique
/// within a set, so `CardId` equality is name equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use pair_match::cards::CardDefinition;
///
/// let cat = CardDefinition::new("cat", "./images/cat.png");
/// assert_eq!(cat.name, "cat");
/// assert!(cat.is_well_formed());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Identity key. Unique within a card set.
    pub name: String,

    /// Face image reference, resolved by the renderer.
    pub image: String,
}

impl CardDefinition {
    /// Create a new card definition.
    #[must_use]
    pub fn new(name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
        }
    }

    /// Both fields carry something other than whitespace.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        !self.name.trim().is_empty() && !self.image.trim().is_empty()
    }
}
