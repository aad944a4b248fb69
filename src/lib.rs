//! # pair-match
//!
//! Game-state engine for a browser memory-matching card game.
//!
//! ## Design Principles
//!
//! 1. **State, not DOM**: Cards, turn, and score live in plain Rust types.
//!    Renderers read `CardView`s and `GameEvent`s and never write back.
//!
//! 2. **No globals**: Everything belongs to a `GameSession`, so sessions
//!    are independent and testable in isolation.
//!
//! 3. **Explicit time**: Delays are callbacks in a one-slot `Scheduler`
//!    with tokens, so cancellation is visible and deterministic.
//!
//! ## Modules
//!
//! - `core`: RNG and shuffle, configuration, scheduler, score
//! - `cards`: Definitions, JSON loading, registry, instances, deck
//! - `turn`: Selection state machine and pair evaluation
//! - `session`: `GameSession`, events, render views
//! - `web`: `wasm-bindgen` wrapper (feature `wasm`)

pub mod cards;
pub mod core;
pub mod error;
pub mod session;
pub mod turn;

#[cfg(feature = "wasm")]
pub mod web;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameRng, ScheduledCallback, Scheduler, ScoreTracker, TimerTask, TimerToken,
};

pub use crate::cards::{
    build_deck, parse_definitions, CardDefinition, CardId, CardInstance, CardRegistry, Deck,
    InstanceId,
};

pub use crate::error::{GameError, Result};

pub use crate::turn::{Evaluation, IgnoreReason, Selection, TurnPhase, TurnState};

pub use crate::session::{CardView, GameEvent, GameSession, SessionSnapshot};
