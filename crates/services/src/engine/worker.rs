use std::sync::Arc;

use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info, warn};

use audio::{SpeechRecognizer, SpeechSynthesizer};
use rostire_core::matcher::PronunciationMatcher;
use rostire_core::model::{CaptureOutcome, CategoryName, Session};
use rostire_core::Clock;

use crate::catalog::WordCatalog;
use crate::config::PracticeConfig;
use crate::engine::report::CompletionReport;
use crate::engine::state::{PracticeSnapshot, PracticeState};
use crate::engine::Command;
use crate::error::PracticeError;
use crate::events::{FeedbackKind, PracticeEvent};
use crate::status::StatusMessage;

/// Single owner of the mutable session state.
///
/// Commands are applied one at a time, so transitions never interleave their
/// effects on the score, the current word, or the queue. Capture results and
/// advance timers re-enter through the same queue, tagged with the epoch of
/// the word presentation they belong to; anything tagged with an older epoch
/// is stale and gets dropped.
pub(crate) struct PracticeWorker {
    catalog: WordCatalog,
    matcher: PronunciationMatcher,
    config: PracticeConfig,
    clock: Clock,
    synthesizer: Arc<dyn SpeechSynthesizer>,
    recognizer: Arc<dyn SpeechRecognizer>,
    events: broadcast::Sender<PracticeEvent>,
    commands: mpsc::Receiver<Command>,
    /// Weak so the queue closes when the last handle drops; capture and
    /// timer tasks upgrade it only for the lifetime of one send.
    self_tx: mpsc::WeakSender<Command>,
    session: Option<Session>,
    state: PracticeState,
    epoch: u64,
}

impl PracticeWorker {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        catalog: WordCatalog,
        matcher: PronunciationMatcher,
        config: PracticeConfig,
        clock: Clock,
        synthesizer: Arc<dyn SpeechSynthesizer>,
        recognizer: Arc<dyn SpeechRecognizer>,
        events: broadcast::Sender<PracticeEvent>,
        commands: mpsc::Receiver<Command>,
        self_tx: mpsc::WeakSender<Command>,
    ) -> Self {
        Self {
            catalog,
            matcher,
            config,
            clock,
            synthesizer,
            recognizer,
            events,
            commands,
            self_tx,
            session: None,
            state: PracticeState::Idle,
            epoch: 0,
        }
    }

    pub(crate) async fn run(mut self) {
        while let Some(command) = self.commands.recv().await {
            self.apply(command);
        }
        debug!("practice worker stopped");
    }

    fn apply(&mut self, command: Command) {
        match command {
            Command::StartCategory { name, reply } => {
                let _ = reply.send(self.start_category(&name));
            }
            Command::RestartCategory { reply } => {
                self.restart_category();
                let _ = reply.send(());
            }
            Command::SkipWord { reply } => {
                self.skip_word();
                let _ = reply.send(());
            }
            Command::SpeakCurrentWord { reply } => {
                self.speak_current_word();
                let _ = reply.send(());
            }
            Command::BeginListening { reply } => {
                self.begin_listening();
                let _ = reply.send(());
            }
            Command::CaptureDone { epoch, outcome } => self.capture_done(epoch, outcome),
            Command::Advance { epoch } => self.advance(epoch),
            Command::Snapshot { reply } => {
                let _ = reply.send(self.snapshot());
            }
        }
    }

    fn start_category(&mut self, name: &str) -> Result<(), PracticeError> {
        let Some(words) = self.catalog.shuffled_words(name) else {
            return Err(PracticeError::CategoryNotFound(name.to_string()));
        };
        let category = CategoryName::new(name)?;
        let session = Session::new(category, words, self.clock.now())?;

        info!(category = %name, words = session.remaining(), "starting category");
        // A capture may still be in flight for the session being replaced;
        // its outcome will arrive with a stale epoch, so close out the
        // listening signal here before the fresh session masks the flag.
        let was_listening = self.session.as_ref().is_some_and(Session::is_listening);
        self.session = Some(session);
        if was_listening {
            self.emit(PracticeEvent::ListeningChanged(false));
        }
        self.emit_score();
        self.present_next_word();
        Ok(())
    }

    fn restart_category(&mut self) {
        let Some(name) = self
            .session
            .as_ref()
            .map(|s| s.category().as_str().to_string())
        else {
            debug!("restart requested with no active category");
            self.emit_status(StatusMessage::SelectCategory);
            return;
        };

        // The category was resolvable when the session started and the
        // catalog does not change under a running engine.
        if let Err(err) = self.start_category(&name) {
            warn!(category = %name, %err, "restart failed");
        }
    }

    fn skip_word(&mut self) {
        let Some(session) = self.session.as_mut() else {
            self.emit_status(StatusMessage::SelectCategory);
            return;
        };
        if session.current_word().is_none() {
            return;
        }

        session.record_attempt(false);
        debug!("word skipped");
        self.emit_score();
        self.present_next_word();
    }

    fn speak_current_word(&mut self) {
        let Some(word) = self
            .session
            .as_ref()
            .and_then(|s| s.current_word().map(ToString::to_string))
        else {
            return;
        };
        self.speak(word);
    }

    fn begin_listening(&mut self) {
        let Some(session) = self.session.as_mut() else {
            self.emit_status(StatusMessage::SelectCategory);
            return;
        };
        if session.current_word().is_none() {
            return;
        }
        if session.is_listening() {
            debug!("capture already in flight, collapsing duplicate listen request");
            return;
        }

        session.set_listening(true);
        self.state = PracticeState::Listening;
        self.emit(PracticeEvent::ListeningChanged(true));
        self.emit_status(StatusMessage::Listening);

        let Some(tx) = self.self_tx.upgrade() else {
            return;
        };
        let recognizer = Arc::clone(&self.recognizer);
        let limits = self.config.listen_limits();
        let epoch = self.epoch;
        tokio::spawn(async move {
            let outcome = recognizer.listen(limits).await;
            let _ = tx.send(Command::CaptureDone { epoch, outcome }).await;
        });
    }

    fn capture_done(&mut self, epoch: u64, outcome: CaptureOutcome) {
        if epoch != self.epoch {
            warn!(
                stale = epoch,
                current = self.epoch,
                "dropping capture outcome for a replaced word"
            );
            return;
        }
        let target = {
            let Some(session) = self.session.as_mut() else {
                return;
            };
            session.set_listening(false);
            session.current_word().map(ToString::to_string)
        };

        self.state = PracticeState::Evaluating;
        self.emit(PracticeEvent::ListeningChanged(false));

        let Some(target) = target else {
            return;
        };
        let result = self.matcher.evaluate(&target, &outcome);
        debug!(
            target = %target,
            correct = result.is_correct,
            similarity = result.similarity,
            "attempt evaluated"
        );

        if let Some(session) = self.session.as_mut() {
            session.record_attempt(result.is_correct);
        }
        self.emit_score();

        if result.is_correct {
            self.state = PracticeState::FeedbackCorrect;
            self.emit_status(StatusMessage::Correct);
            self.emit(PracticeEvent::Feedback(FeedbackKind::Correct));
            self.schedule_advance();
        } else {
            self.state = PracticeState::FeedbackIncorrect;
            self.emit_status(StatusMessage::for_incorrect(&outcome));
            self.emit(PracticeEvent::Feedback(FeedbackKind::Incorrect));
        }
    }

    fn advance(&mut self, epoch: u64) {
        if epoch != self.epoch {
            warn!(
                stale = epoch,
                current = self.epoch,
                "dropping stale advance timer"
            );
            return;
        }
        self.present_next_word();
    }

    /// Pops the next word and presents it, or completes the category.
    ///
    /// Bumps the epoch either way, which invalidates any capture or advance
    /// timer still referring to the previous word.
    fn present_next_word(&mut self) {
        self.epoch += 1;
        let now = self.clock.now();

        let (was_listening, next, report) = {
            let Some(session) = self.session.as_mut() else {
                return;
            };
            // A still-pending capture belongs to the word we just left; its
            // outcome will arrive with an old epoch and be dropped.
            let was_listening = session.is_listening();
            session.set_listening(false);
            let next = session.advance(now);
            let report = match next {
                Some(_) => None,
                None => Some(CompletionReport::from_session(session)),
            };
            (was_listening, next, report)
        };

        if was_listening {
            self.emit(PracticeEvent::ListeningChanged(false));
        }

        match next {
            Some(word) => {
                self.state = PracticeState::Presenting;
                self.emit(PracticeEvent::WordChanged(word.clone()));
                self.emit_status(StatusMessage::Prompt);
                self.speak(word);
            }
            None => {
                self.state = PracticeState::CategoryComplete;
                if let Some(report) = report {
                    info!(
                        category = %report.category,
                        score = report.score,
                        total = report.total_attempts,
                        percentage = report.percentage,
                        "category complete"
                    );
                    self.emit(PracticeEvent::CategoryCompleted(report));
                }
            }
        }
    }

    /// Fire-and-forget synthesis; rapid repeated calls may overlap, which is
    /// an accepted non-guarantee of the speak channel.
    fn speak(&self, word: String) {
        let synthesizer = Arc::clone(&self.synthesizer);
        tokio::spawn(async move {
            synthesizer.speak(&word).await;
        });
    }

    fn schedule_advance(&self) {
        let Some(tx) = self.self_tx.upgrade() else {
            return;
        };
        let delay = self.config.advance_delay;
        let epoch = self.epoch;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(Command::Advance { epoch }).await;
        });
    }

    fn snapshot(&self) -> PracticeSnapshot {
        match &self.session {
            Some(session) => PracticeSnapshot {
                state: self.state,
                category: Some(session.category().as_str().to_string()),
                current_word: session.current_word().map(ToString::to_string),
                score: session.score(),
                total_attempts: session.total_attempts(),
                remaining: session.remaining(),
                is_listening: session.is_listening(),
            },
            None => PracticeSnapshot {
                state: self.state,
                category: None,
                current_word: None,
                score: 0,
                total_attempts: 0,
                remaining: 0,
                is_listening: false,
            },
        }
    }

    fn emit(&self, event: PracticeEvent) {
        // Nobody subscribed is fine; events are advisory.
        let _ = self.events.send(event);
    }

    fn emit_status(&self, status: StatusMessage) {
        self.emit(PracticeEvent::StatusChanged(status));
    }

    fn emit_score(&self) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        self.emit(PracticeEvent::ScoreChanged {
            score: session.score(),
            total_attempts: session.total_attempts(),
        });
    }
}
