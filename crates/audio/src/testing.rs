//! In-memory doubles for the audio traits, used across the workspace's tests.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use rostire_core::model::CaptureOutcome;

use crate::{ListenLimits, SpeechRecognizer, SpeechSynthesizer};

/// Synthesizer that discards everything.
#[derive(Debug, Default)]
pub struct NullSynthesizer;

#[async_trait]
impl SpeechSynthesizer for NullSynthesizer {
    async fn speak(&self, _text: &str) {}
}

/// Synthesizer that records every spoken text for assertions.
#[derive(Debug, Default)]
pub struct RecordingSynthesizer {
    spoken: Mutex<Vec<String>>,
}

impl RecordingSynthesizer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything spoken so far, in call order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn spoken(&self) -> Vec<String> {
        self.spoken.lock().expect("recorder lock poisoned").clone()
    }
}

#[async_trait]
impl SpeechSynthesizer for RecordingSynthesizer {
    async fn speak(&self, text: &str) {
        self.spoken
            .lock()
            .expect("recorder lock poisoned")
            .push(text.to_string());
    }
}

/// Synthesizer standing in for a backend that failed to initialize.
#[derive(Debug, Default)]
pub struct UnavailableSynthesizer;

#[async_trait]
impl SpeechSynthesizer for UnavailableSynthesizer {
    async fn speak(&self, _text: &str) {}

    fn is_available(&self) -> bool {
        false
    }
}

/// Recognizer that replays a scripted queue of outcomes.
///
/// Outcomes can be seeded up front or pushed while a test runs; an exhausted
/// script behaves like a silent microphone and yields
/// [`CaptureOutcome::Timeout`]. An optional delay simulates the time a real
/// capture spends waiting for speech.
#[derive(Debug, Default)]
pub struct ScriptedRecognizer {
    outcomes: Mutex<VecDeque<CaptureOutcome>>,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl ScriptedRecognizer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the script with outcomes replayed in order.
    #[must_use]
    pub fn with_outcomes(outcomes: impl IntoIterator<Item = CaptureOutcome>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into_iter().collect()),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Delays every `listen` call, so tests can overlap operations with an
    /// in-flight capture.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Appends an outcome to the script.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn push(&self, outcome: CaptureOutcome) {
        self.outcomes
            .lock()
            .expect("script lock poisoned")
            .push_back(outcome);
    }

    /// Number of `listen` calls observed so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SpeechRecognizer for ScriptedRecognizer {
    async fn listen(&self, _limits: ListenLimits) -> CaptureOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.outcomes
            .lock()
            .expect("script lock poisoned")
            .pop_front()
            .unwrap_or(CaptureOutcome::Timeout)
    }
}

/// Recognizer standing in for a backend that failed to initialize.
///
/// Every capture resolves to [`CaptureOutcome::Unavailable`], which the
/// engine records as an incorrect attempt with a service-error status.
#[derive(Debug, Default)]
pub struct UnavailableRecognizer;

#[async_trait]
impl SpeechRecognizer for UnavailableRecognizer {
    async fn listen(&self, _limits: ListenLimits) -> CaptureOutcome {
        CaptureOutcome::Unavailable
    }

    fn is_available(&self) -> bool {
        false
    }
}
