use serde::{Deserialize, Serialize};

/// Outcome of a single speech-capture operation.
///
/// The recognizer never surfaces errors to the caller: anything that is not a
/// usable transcript comes back as one of the sentinel variants, and every
/// sentinel evaluates as an incorrect attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaptureOutcome {
    /// Recognized speech, lowercased and trimmed by the recognizer.
    Text(String),
    /// No speech was detected before the listen timeout elapsed.
    Timeout,
    /// Speech was detected but could not be transcribed.
    Unrecognized,
    /// The recognition service failed mid-request.
    ServiceError,
    /// The recognizer never initialized; degraded-mode sessions still
    /// route this through evaluation as an incorrect attempt.
    Unavailable,
}

impl CaptureOutcome {
    /// Returns the transcript when this outcome carries one.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CaptureOutcome::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns true when this outcome is a usable transcript.
    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self, CaptureOutcome::Text(_))
    }
}
