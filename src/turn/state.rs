//! Turn state machine.
//!
//! A turn walks `Idle → OneSelected → Resolving → Idle`:
//!
//! - The first selectable card is flipped and remembered.
//! - A second, different selectable card is flipped and input locks.
//! - Evaluation either matches the pair (back to `Idle` at once) or
//!   leaves it locked until the mismatch is concealed.
//!
//! The machine flips cards on the deck it is handed but never waits.
//! Scheduling the evaluation and conceal callbacks is the session's job.

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, Deck, InstanceId};

/// Where the current turn stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Nothing selected.
    Idle,
    /// One card face-up, waiting for the second.
    OneSelected,
    /// Two cards face-up, input locked, outcome pending.
    Resolving,
}

/// Why a selection was not accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// No deck has been dealt yet.
    NotStarted,
    /// The id does not name a card on the table.
    UnknownCard,
    /// A pair is being resolved.
    InputLocked,
    /// The card is already the first selection.
    SameCard,
    /// The card's pair has been found.
    AlreadyMatched,
    /// The card is face-up for another reason.
    AlreadyFlipped,
}

/// Result of one selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    Ignored(IgnoreReason),
    /// First card of the turn flipped.
    First(InstanceId),
    /// Second card flipped; the pair now awaits evaluation.
    Second {
        first: InstanceId,
        second: InstanceId,
    },
}

impl Selection {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        !matches!(self, Selection::Ignored(_))
    }
}

/// Outcome of comparing the selected pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Evaluation {
    /// Same identity; both cards are now matched and the turn is over.
    Match {
        first: InstanceId,
        second: InstanceId,
        card_id: CardId,
    },
    /// Different identities; both stay face-up and input stays locked
    /// until `conceal` runs.
    Mismatch {
        first: InstanceId,
        second: InstanceId,
    },
}

/// Selection bookkeeping for one turn.
///
/// `second` is only ever set while `first` is set, and `input_locked`
/// holds exactly while both are set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    first: Option<InstanceId>,
    second: Option<InstanceId>,
    input_locked: bool,
}

impl TurnState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        match (self.first, self.second) {
            (None, _) => TurnPhase::Idle,
            (Some(_), None) => TurnPhase::OneSelected,
            (Some(_), Some(_)) => TurnPhase::Resolving,
        }
    }

    #[must_use]
    pub fn first(&self) -> Option<InstanceId> {
        self.first
    }

    #[must_use]
    pub fn second(&self) -> Option<InstanceId> {
        self.second
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.input_locked
    }

    /// Both selected cards, while resolving.
    #[must_use]
    pub fn selected_pair(&self) -> Option<(InstanceId, InstanceId)> {
        Some((self.first?, self.second?))
    }

    /// Apply a selection, flipping the card if it is accepted.
    pub fn select(&mut self, deck: &mut Deck, id: InstanceId) -> Selection {
        if self.input_locked {
            return Selection::Ignored(IgnoreReason::InputLocked);
        }

        let Some(card) = deck.get_mut(id) else {
            return Selection::Ignored(IgnoreReason::UnknownCard);
        };
        if card.matched {
            return Selection::Ignored(IgnoreReason::AlreadyMatched);
        }
        if self.first == Some(id) {
            return Selection::Ignored(IgnoreReason::SameCard);
        }
        if card.flipped {
            return Selection::Ignored(IgnoreReason::AlreadyFlipped);
        }

        card.flip_up();

        match self.first {
            None => {
                self.first = Some(id);
                Selection::First(id)
            }
            Some(first) => {
                self.second = Some(id);
                self.input_locked = true;
                Selection::Second { first, second: id }
            }
        }
    }

    /// Compare the selected pair.
    ///
    /// Returns `None` unless a pair is resolving. On a match the cards are
    /// marked matched and the turn resets; on a mismatch nothing changes.
    pub fn evaluate(&mut self, deck: &mut Deck) -> Option<Evaluation> {
        let (first, second) = self.selected_pair()?;
        let a = *deck.get(first)?;
        let b = *deck.get(second)?;

        if a.pairs_with(&b) {
            for id in [first, second] {
                if let Some(card) = deck.get_mut(id) {
                    card.mark_matched();
                }
            }
            self.reset();
            Some(Evaluation::Match {
                first,
                second,
                card_id: a.card_id,
            })
        } else {
            Some(Evaluation::Mismatch { first, second })
        }
    }

    /// Flip a mismatched pair face-down and end the turn.
    ///
    /// Returns the concealed pair, or `None` if nothing was resolving.
    pub fn conceal(&mut self, deck: &mut Deck) -> Option<(InstanceId, InstanceId)> {
        let (first, second) = self.selected_pair()?;
        for id in [first, second] {
            if let Some(card) = deck.get_mut(id) {
                if !card.matched {
                    card.flip_down();
                }
            }
        }
        self.reset();
        Some((first, second))
    }

    /// Back to `Idle` without touching any card.
    pub fn reset(&mut self) {
        self.first = None;
        self.second = None;
        self.input_locked = false;
    }
}
