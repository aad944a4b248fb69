//! Turn handling: selection, locking, and pair evaluation.
//!
//! `TurnState` is the only place that decides whether a selection counts.
//! The session calls into it and schedules the delayed steps.

pub mod state;

pub use state::{Evaluation, IgnoreReason, Selection, TurnPhase, TurnState};
