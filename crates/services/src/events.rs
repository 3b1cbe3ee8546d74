use crate::engine::CompletionReport;
use crate::status::StatusMessage;

/// Visual feedback pulse after an evaluated attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Correct,
    Incorrect,
}

/// Typed event stream emitted by the practice engine.
///
/// Any number of subscribers can consume these over a broadcast channel; the
/// engine has no dependency on how they are rendered. Slow subscribers may
/// observe lagged receives and should resubscribe or skip, as usual with
/// `tokio::sync::broadcast`.
#[derive(Debug, Clone, PartialEq)]
pub enum PracticeEvent {
    /// A new word is being presented.
    WordChanged(String),
    /// Score or attempt count changed.
    ScoreChanged { score: u32, total_attempts: u32 },
    /// The status line changed.
    StatusChanged(StatusMessage),
    /// A capture started or finished.
    ListeningChanged(bool),
    /// An attempt was evaluated.
    Feedback(FeedbackKind),
    /// The word queue is exhausted; the pass is over.
    CategoryCompleted(CompletionReport),
}
