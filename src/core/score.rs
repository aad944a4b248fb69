//! Running count of matched pairs.

use serde::{Deserialize, Serialize};

/// Score tracker. Starts at zero, goes up by one per match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTracker {
    value: u32,
}

impl ScoreTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one and return the new score.
    pub fn increment(&mut self) -> u32 {
        self.value += 1;
        self.value
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }

    #[must_use]
    pub fn value(&self) -> u32 {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_and_reset() {
        let mut score = ScoreTracker::new();
        assert_eq!(score.value(), 0);

        assert_eq!(score.increment(), 1);
        assert_eq!(score.increment(), 2);
        assert_eq!(score.value(), 2);

        score.reset();
        assert_eq!(score.value(), 0);
    }
}
