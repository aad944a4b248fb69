//! Game configuration.
//!
//! Hosts configure the engine at startup with a `GameConfig`:
//! - How long a second card stays visible before it is evaluated
//! - How long a mismatched pair stays face-up before it is concealed
//! - Which image the renderer should fall back to when a face fails to load
//!
//! Missing JSON fields take their defaults, so `{}` is a valid config.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

/// Default pause before a two-card selection is evaluated.
pub const DEFAULT_EVALUATION_DELAY_MS: u64 = 300;

/// Default time a mismatched pair stays revealed.
pub const DEFAULT_MISMATCH_DELAY_MS: u64 = 1000;

/// Default placeholder for card faces that fail to load.
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "./path-to-placeholder-image.jpg";

/// Session configuration.
///
/// ## Example
///
/// ```
/// use pair_match::core::GameConfig;
/// use std::time::Duration;
///
/// let config = GameConfig::default()
///     .with_evaluation_delay(Duration::from_millis(200))
///     .with_mismatch_delay(Duration::from_millis(800));
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.evaluation_delay(), Duration::from_millis(200));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Visual-feedback pause between the second flip and evaluation.
    pub evaluation_delay_ms: u64,

    /// Reveal pause before a mismatched pair flips back.
    pub mismatch_delay_ms: u64,

    /// Image the renderer swaps in when a face fails to load.
    pub placeholder_image: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            evaluation_delay_ms: DEFAULT_EVALUATION_DELAY_MS,
            mismatch_delay_ms: DEFAULT_MISMATCH_DELAY_MS,
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
        }
    }
}

impl GameConfig {
    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| GameError::InvalidConfig(e.to_string()))
    }

    /// Set the pre-evaluation pause.
    #[must_use]
    pub fn with_evaluation_delay(mut self, delay: Duration) -> Self {
        self.evaluation_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the mismatch reveal pause.
    #[must_use]
    pub fn with_mismatch_delay(mut self, delay: Duration) -> Self {
        self.mismatch_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the fallback face image.
    #[must_use]
    pub fn with_placeholder_image(mut self, image: impl Into<String>) -> Self {
        self.placeholder_image = image.into();
        self
    }

    #[must_use]
    pub fn evaluation_delay(&self) -> Duration {
        Duration::from_millis(self.evaluation_delay_ms)
    }

    #[must_use]
    pub fn mismatch_delay(&self) -> Duration {
        Duration::from_millis(self.mismatch_delay_ms)
    }

    /// Check the configuration is playable.
    ///
    /// The mismatch pause must be strictly longer than the evaluation pause,
    /// and the placeholder must name something.
    pub fn validate(&self) -> Result<()> {
        if self.mismatch_delay_ms <= self.evaluation_delay_ms {
            return Err(GameError::InvalidConfig(format!(
                "mismatch delay ({}ms) must exceed evaluation delay ({}ms)",
                self.mismatch_delay_ms, self.evaluation_delay_ms
            )));
        }
        if self.placeholder_image.trim().is_empty() {
            return Err(GameError::InvalidConfig(
                "placeholder image must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
