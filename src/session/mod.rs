//! Game session orchestration.
//!
//! ## Key Types
//!
//! - `GameSession`: deck, turn, score and scheduler for one table
//! - `GameEvent`: queued state changes for renderers
//! - `CardView` / `SessionSnapshot`: read-only render state

pub mod events;
pub mod game;
pub mod view;

pub use events::GameEvent;
pub use game::GameSession;
pub use view::{CardView, SessionSnapshot};
