use std::sync::Arc;

use tokio::sync::{broadcast, mpsc, oneshot};

use audio::{AudioStatus, SpeechRecognizer, SpeechSynthesizer};
use rostire_core::matcher::PronunciationMatcher;
use rostire_core::model::CaptureOutcome;
use rostire_core::Clock;

use crate::catalog::WordCatalog;
use crate::config::PracticeConfig;
use crate::engine::state::PracticeSnapshot;
use crate::engine::worker::PracticeWorker;
use crate::error::PracticeError;
use crate::events::PracticeEvent;

const COMMAND_QUEUE_CAPACITY: usize = 32;
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Messages applied sequentially by the worker task that owns the session.
///
/// Every external happening — a UI command, a finished capture, a fired
/// advance timer — arrives here, so no two transitions ever interleave.
#[derive(Debug)]
pub(crate) enum Command {
    StartCategory {
        name: String,
        reply: oneshot::Sender<Result<(), PracticeError>>,
    },
    RestartCategory {
        reply: oneshot::Sender<()>,
    },
    SkipWord {
        reply: oneshot::Sender<()>,
    },
    SpeakCurrentWord {
        reply: oneshot::Sender<()>,
    },
    BeginListening {
        reply: oneshot::Sender<()>,
    },
    CaptureDone {
        epoch: u64,
        outcome: CaptureOutcome,
    },
    Advance {
        epoch: u64,
    },
    Snapshot {
        reply: oneshot::Sender<PracticeSnapshot>,
    },
}

/// Assembles a practice engine from its collaborators.
pub struct PracticeEngine {
    catalog: WordCatalog,
    synthesizer: Arc<dyn SpeechSynthesizer>,
    recognizer: Arc<dyn SpeechRecognizer>,
    config: PracticeConfig,
    clock: Clock,
}

impl PracticeEngine {
    #[must_use]
    pub fn new(
        catalog: WordCatalog,
        synthesizer: Arc<dyn SpeechSynthesizer>,
        recognizer: Arc<dyn SpeechRecognizer>,
    ) -> Self {
        Self {
            catalog,
            synthesizer,
            recognizer,
            config: PracticeConfig::default(),
            clock: Clock::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: PracticeConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Spawns the worker task and returns the handle that drives it.
    ///
    /// Must be called from within a tokio runtime. The worker stops once
    /// every handle clone has been dropped and no capture or advance timer
    /// is still in flight.
    ///
    /// # Errors
    ///
    /// Returns `PracticeError::Matcher` if the configured similarity
    /// threshold is out of range.
    pub fn spawn(self) -> Result<PracticeHandle, PracticeError> {
        let matcher = PronunciationMatcher::with_threshold(self.config.similarity_threshold)?;
        let (command_tx, command_rx) = mpsc::channel(COMMAND_QUEUE_CAPACITY);
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        let audio_status = AudioStatus {
            synthesizer_available: self.synthesizer.is_available(),
            recognizer_available: self.recognizer.is_available(),
        };
        let category_names = self.catalog.category_names();

        let worker = PracticeWorker::new(
            self.catalog,
            matcher,
            self.config,
            self.clock,
            self.synthesizer,
            self.recognizer,
            event_tx.clone(),
            command_rx,
            command_tx.downgrade(),
        );
        tokio::spawn(worker.run());

        Ok(PracticeHandle {
            commands: command_tx,
            events: event_tx,
            audio_status,
            category_names: Arc::from(category_names),
        })
    }
}

/// Cloneable handle to a running practice engine.
///
/// Commands are queued to the single worker task; results come back either
/// as replies or on the broadcast event stream from [`PracticeHandle::subscribe`].
#[derive(Clone)]
pub struct PracticeHandle {
    commands: mpsc::Sender<Command>,
    events: broadcast::Sender<PracticeEvent>,
    audio_status: AudioStatus,
    category_names: Arc<[String]>,
}

impl PracticeHandle {
    /// Subscribes to the engine's event stream.
    ///
    /// Only events emitted after subscribing are observed.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<PracticeEvent> {
        self.events.subscribe()
    }

    /// Availability of the audio channels, probed once at spawn.
    #[must_use]
    pub fn audio_status(&self) -> AudioStatus {
        self.audio_status
    }

    /// Names of the categories the engine can start, in catalog order.
    #[must_use]
    pub fn category_names(&self) -> &[String] {
        &self.category_names
    }

    /// Starts a fresh session over a shuffled copy of the category's words.
    ///
    /// # Errors
    ///
    /// Returns `PracticeError::CategoryNotFound` for an unknown name and
    /// `PracticeError::EngineStopped` if the worker is gone.
    pub async fn start_category(&self, name: &str) -> Result<(), PracticeError> {
        self.request(|reply| Command::StartCategory {
            name: name.to_string(),
            reply,
        })
        .await?
    }

    /// Restarts the active category with a fresh shuffle; no-op when idle.
    ///
    /// # Errors
    ///
    /// Returns `PracticeError::EngineStopped` if the worker is gone.
    pub async fn restart_category(&self) -> Result<(), PracticeError> {
        self.request(|reply| Command::RestartCategory { reply }).await
    }

    /// Counts the current word as a failed attempt and advances past it.
    ///
    /// # Errors
    ///
    /// Returns `PracticeError::EngineStopped` if the worker is gone.
    pub async fn skip_word(&self) -> Result<(), PracticeError> {
        self.request(|reply| Command::SkipWord { reply }).await
    }

    /// Re-triggers synthesis of the current word. Fire-and-forget: rapid
    /// repeated calls may overlap at the synthesizer.
    ///
    /// # Errors
    ///
    /// Returns `PracticeError::EngineStopped` if the worker is gone.
    pub async fn speak_current_word(&self) -> Result<(), PracticeError> {
        self.request(|reply| Command::SpeakCurrentWord { reply })
            .await
    }

    /// Starts one capture operation; idempotent while one is outstanding.
    ///
    /// # Errors
    ///
    /// Returns `PracticeError::EngineStopped` if the worker is gone.
    pub async fn begin_listening(&self) -> Result<(), PracticeError> {
        self.request(|reply| Command::BeginListening { reply }).await
    }

    /// Point-in-time view of the session.
    ///
    /// # Errors
    ///
    /// Returns `PracticeError::EngineStopped` if the worker is gone.
    pub async fn snapshot(&self) -> Result<PracticeSnapshot, PracticeError> {
        self.request(|reply| Command::Snapshot { reply }).await
    }

    async fn request<T>(
        &self,
        command: impl FnOnce(oneshot::Sender<T>) -> Command,
    ) -> Result<T, PracticeError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.commands
            .send(command(reply_tx))
            .await
            .map_err(|_| PracticeError::EngineStopped)?;
        reply_rx.await.map_err(|_| PracticeError::EngineStopped)
    }
}
