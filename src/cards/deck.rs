//! The dealt deck: deck building and in-place shuffling.
//!
//! `Deck` stores its cards in a persistent `im::Vector` and its id index in
//! an `im::HashMap`, so cloning a deck is O(1) regardless of size and the
//! clone shares structure until either side changes. The index maps each
//! `InstanceId` to its current position and is rebuilt after every shuffle.

use im::{HashMap, Vector};

use super::definition::{CardDefinition, CardId};
use super::instance::{CardInstance, InstanceId};
use super::registry::CardRegistry;
use crate::core::GameRng;
use crate::error::Result;

/// Validate `definitions` and deal an unshuffled pair deck from them.
///
/// Fails with `InvalidInput` for an empty list, blank fields, or repeated
/// names.
pub fn build_deck(definitions: &[CardDefinition]) -> Result<Deck> {
    let registry = CardRegistry::from_definitions(definitions.to_vec())?;
    Ok(Deck::build(&registry))
}

/// Ordered cards on the table.
#[derive(Clone, Debug, Default)]
pub struct Deck {
    cards: Vector<CardInstance>,
    positions: HashMap<InstanceId, usize>,
}

impl Deck {
    /// Build an unshuffled deck with two instances per definition.
    ///
    /// Instances come out in definition order (`a, a, b, b, ...`) with ids
    /// `0..2N`, all face-down and unmatched. Validation already happened in
    /// `CardRegistry`, so this cannot fail.
    #[must_use]
    pub fn build(registry: &CardRegistry) -> Self {
        let mut cards = Vector::new();
        let mut next_id = 0u32;
        for (card_id, _) in registry.iter() {
            for _ in 0..2 {
                cards.push_back(CardInstance::new(InstanceId::new(next_id), card_id));
                next_id += 1;
            }
        }
        Self::from_cards(cards)
    }

    fn from_cards(cards: Vector<CardInstance>) -> Self {
        let mut deck = Self {
            cards,
            positions: HashMap::new(),
        };
        deck.reindex();
        deck
    }

    fn reindex(&mut self) {
        self.positions = self
            .cards
            .iter()
            .enumerate()
            .map(|(pos, card)| (card.id, pos))
            .collect();
    }

    /// Randomize card order in place.
    ///
    /// Only order changes; ids and flags travel with their cards.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        let len = self.cards.len();
        let cards = &mut self.cards;
        rng.shuffle_with(len, |i, j| cards.swap(i, j));
        self.reindex();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of pairs dealt.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    #[must_use]
    pub fn get(&self, id: InstanceId) -> Option<&CardInstance> {
        self.positions.get(&id).and_then(|&pos| self.cards.get(pos))
    }

    pub fn get_mut(&mut self, id: InstanceId) -> Option<&mut CardInstance> {
        let pos = *self.positions.get(&id)?;
        self.cards.get_mut(pos)
    }

    /// Position of an instance in deal order.
    #[must_use]
    pub fn position_of(&self, id: InstanceId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    /// Card at a table position.
    #[must_use]
    pub fn at(&self, position: usize) -> Option<&CardInstance> {
        self.cards.get(position)
    }

    /// Iterate in deal order.
    pub fn iter(&self) -> impl Iterator<Item = &CardInstance> {
        self.cards.iter()
    }

    /// Instances sharing a `CardId`, in deal order.
    pub fn instances_of(&self, card_id: CardId) -> impl Iterator<Item = &CardInstance> {
        self.cards.iter().filter(move |c| c.card_id == card_id)
    }

    /// Matched pairs so far.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.cards.iter().filter(|c| c.matched).count() / 2
    }

    /// Every card has been matched.
    #[must_use]
    pub fn all_matched(&self) -> bool {
        !self.cards.is_empty() && self.cards.iter().all(|c| c.matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;

    fn registry(names: &[&str]) -> CardRegistry {
        CardRegistry::from_definitions(
            names
                .iter()
                .map(|n| CardDefinition::new(*n, format!("{n}.png")))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_build_two_per_definition() {
        let deck = Deck::build(&registry(&["cat", "dog", "owl"]));

        assert_eq!(deck.len(), 6);
        assert_eq!(deck.pair_count(), 3);
        for id in 0..3 {
            assert_eq!(deck.instances_of(CardId::new(id)).count(), 2);
        }
        assert!(deck.iter().all(|c| !c.flipped && !c.matched));
    }

    #[test]
    fn test_build_deck_validates() {
        let deck = build_deck(&[
            CardDefinition::new("cat", "cat.png"),
            CardDefinition::new("dog", "dog.png"),
        ])
        .unwrap();
        assert_eq!(deck.len(), 4);

        assert!(matches!(build_deck(&[]), Err(GameError::InvalidInput(_))));
        assert!(matches!(
            build_deck(&[CardDefinition::new("cat", "")]),
            Err(GameError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_build_assigns_sequential_ids() {
        let deck = Deck::build(&registry(&["cat", "dog"]));
        let ids: Vec<_> = deck.iter().map(|c| c.id.raw()).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
        assert_eq!(deck.at(2).unwrap().card_id, CardId::new(1));
    }

    #[test]
    fn test_shuffle_keeps_index_consistent() {
        let mut deck = Deck::build(&registry(&["a", "b", "c", "d", "e"]));
        let mut rng = GameRng::new(42);
        deck.shuffle(&mut rng);

        assert_eq!(deck.len(), 10);
        for (pos, card) in deck.iter().enumerate() {
            assert_eq!(deck.position_of(card.id), Some(pos));
            assert_eq!(deck.get(card.id).unwrap().id, card.id);
        }

        let mut ids: Vec<_> = deck.iter().map(|c| c.id.raw()).collect();
        ids.sort();
        assert_eq!(ids, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_get_mut_updates_card() {
        let mut deck = Deck::build(&registry(&["cat"]));
        deck.get_mut(InstanceId::new(1)).unwrap().flip_up();

        assert!(deck.get(InstanceId::new(1)).unwrap().flipped);
        assert!(!deck.get(InstanceId::new(0)).unwrap().flipped);
        assert!(deck.get_mut(InstanceId::new(5)).is_none());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut deck = Deck::build(&registry(&["cat", "dog"]));
        let before = deck.clone();

        deck.get_mut(InstanceId::new(0)).unwrap().mark_matched();

        assert!(deck.get(InstanceId::new(0)).unwrap().matched);
        assert!(!before.get(InstanceId::new(0)).unwrap().matched);
    }

    #[test]
    fn test_clone_keeps_index_after_shuffle() {
        let mut deck = Deck::build(&registry(&["a", "b", "c"]));
        let before = deck.clone();
        deck.shuffle(&mut GameRng::new(9));

        for card in before.iter() {
            assert_eq!(before.get(card.id).unwrap(), card);
            assert_eq!(deck.get(card.id).unwrap().card_id, card.card_id);
        }
        let ids: Vec<_> = before.iter().map(|c| c.id.raw()).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_all_matched() {
        let mut deck = Deck::build(&registry(&["cat"]));
        assert!(!deck.all_matched());
        assert_eq!(deck.matched_pairs(), 0);

        deck.get_mut(InstanceId::new(0)).unwrap().mark_matched();
        deck.get_mut(InstanceId::new(1)).unwrap().mark_matched();

        assert!(deck.all_matched());
        assert_eq!(deck.matched_pairs(), 1);
        assert!(!Deck::default().all_matched());
    }
}
