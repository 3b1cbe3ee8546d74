#![forbid(unsafe_code)]

//! Adapter boundary for speech synthesis and speech capture.
//!
//! The practice core never talks to an audio device directly; it holds
//! `Arc<dyn SpeechSynthesizer>` and `Arc<dyn SpeechRecognizer>` and treats
//! every failure as either a [`CaptureOutcome`] sentinel or an availability
//! flag. Real backends live outside this workspace; the doubles in
//! [`testing`] stand in for them in tests.

use std::time::Duration;

use async_trait::async_trait;
use rostire_core::model::CaptureOutcome;

pub mod testing;

/// Bounds for one capture operation.
///
/// `timeout` caps the wait for speech to start; `phrase_time_limit` caps the
/// length of the captured phrase once speech is detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenLimits {
    pub timeout: Duration,
    pub phrase_time_limit: Duration,
}

/// Per-channel availability, surfaced to the presentation layer so a session
/// can keep running in degraded mode when one channel failed to initialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioStatus {
    pub synthesizer_available: bool,
    pub recognizer_available: bool,
}

/// Text-to-speech output channel.
///
/// Best-effort by contract: `speak` never blocks the session flow, never
/// returns an error, and may silently no-op when the backend is unavailable.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn speak(&self, text: &str);

    /// Whether the backend initialized successfully.
    fn is_available(&self) -> bool {
        true
    }
}

/// Speech-to-text input channel.
///
/// Blocks up to the given limits and resolves to a [`CaptureOutcome`];
/// transcripts come back lowercased and trimmed. Errors are folded into the
/// sentinel variants rather than surfaced to the caller.
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    async fn listen(&self, limits: ListenLimits) -> CaptureOutcome;

    /// Whether the backend initialized successfully.
    fn is_available(&self) -> bool {
        true
    }
}
