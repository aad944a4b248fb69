//! Core engine types: RNG, configuration, scheduling, scoring.
//!
//! These pieces know nothing about cards. The card and turn modules build
//! on them, and `GameSession` wires everything together.

pub mod config;
pub mod rng;
pub mod scheduler;
pub mod score;

pub use config::GameConfig;
pub use rng::GameRng;
pub use scheduler::{ScheduledCallback, Scheduler, TimerTask, TimerToken};
pub use score::ScoreTracker;
