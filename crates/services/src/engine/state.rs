/// Where the session currently stands in the presentation/listening flow.
///
/// `Evaluating` is passed through synchronously while a capture outcome is
/// matched; snapshots taken between commands observe the resulting feedback
/// state instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PracticeState {
    /// No category chosen yet.
    Idle,
    /// A word is shown and has been sent to the synthesizer.
    Presenting,
    /// A capture is in flight.
    Listening,
    /// A capture outcome is being matched.
    Evaluating,
    /// The last attempt matched; auto-advance is pending.
    FeedbackCorrect,
    /// The last attempt did not match; the player may retry.
    FeedbackIncorrect,
    /// The word queue is exhausted. Terminal for this pass; restarting
    /// re-enters `Presenting` with a fresh shuffle.
    CategoryComplete,
}

/// Point-in-time view of the session, for polling callers.
#[derive(Debug, Clone, PartialEq)]
pub struct PracticeSnapshot {
    pub state: PracticeState,
    pub category: Option<String>,
    pub current_word: Option<String>,
    pub score: u32,
    pub total_attempts: u32,
    pub remaining: usize,
    pub is_listening: bool,
}
