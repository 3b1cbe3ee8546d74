use std::time::Duration;

use serde::{Deserialize, Serialize};

use audio::ListenLimits;
use rostire_core::matcher::DEFAULT_SIMILARITY_THRESHOLD;

/// Tunables for a practice session.
///
/// Defaults: a 0.7 similarity threshold, 1500 ms of success feedback before
/// auto-advancing, a 5 s wait for speech to start, and a 3 s phrase limit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracticeConfig {
    pub similarity_threshold: f64,
    pub advance_delay: Duration,
    pub listen_timeout: Duration,
    pub phrase_time_limit: Duration,
}

impl Default for PracticeConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            advance_delay: Duration::from_millis(1500),
            listen_timeout: Duration::from_secs(5),
            phrase_time_limit: Duration::from_secs(3),
        }
    }
}

impl PracticeConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_similarity_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_advance_delay(mut self, delay: Duration) -> Self {
        self.advance_delay = delay;
        self
    }

    /// Capture bounds handed to the recognizer on every listen.
    #[must_use]
    pub fn listen_limits(&self) -> ListenLimits {
        ListenLimits {
            timeout: self.listen_timeout,
            phrase_time_limit: self.phrase_time_limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tuning_values() {
        let config = PracticeConfig::default();
        assert_eq!(config.similarity_threshold, 0.7);
        assert_eq!(config.advance_delay, Duration::from_millis(1500));
        assert_eq!(config.listen_timeout, Duration::from_secs(5));
        assert_eq!(config.phrase_time_limit, Duration::from_secs(3));
    }

    #[test]
    fn builders_override_fields() {
        let config = PracticeConfig::new()
            .with_similarity_threshold(0.8)
            .with_advance_delay(Duration::from_millis(500));
        assert_eq!(config.similarity_threshold, 0.8);
        assert_eq!(config.advance_delay, Duration::from_millis(500));
    }
}
