use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::CategoryName;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no words available for session")]
    Empty,
}

/// One practice run through a shuffled copy of a category's words.
///
/// The session is the only mutable state in the core; it is replaced
/// wholesale when a category starts or restarts and is never persisted.
/// Invariants: `score <= total_attempts`, and at most one capture is in
/// flight while `is_listening` is set.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    category: CategoryName,
    current_word: Option<String>,
    remaining: VecDeque<String>,
    score: u32,
    total_attempts: u32,
    is_listening: bool,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Creates a session over an already-shuffled word list.
    ///
    /// No word is presented yet; call [`Session::advance`] to pull the first
    /// word from the queue.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if the word list is empty.
    pub fn new(
        category: CategoryName,
        shuffled_words: Vec<String>,
        started_at: DateTime<Utc>,
    ) -> Result<Self, SessionError> {
        if shuffled_words.is_empty() {
            return Err(SessionError::Empty);
        }

        Ok(Self {
            category,
            current_word: None,
            remaining: shuffled_words.into(),
            score: 0,
            total_attempts: 0,
            is_listening: false,
            started_at,
            completed_at: None,
        })
    }

    #[must_use]
    pub fn category(&self) -> &CategoryName {
        &self.category
    }

    #[must_use]
    pub fn current_word(&self) -> Option<&str> {
        self.current_word.as_deref()
    }

    /// Number of words not yet presented in this pass.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total_attempts(&self) -> u32 {
        self.total_attempts
    }

    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.is_listening
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Marks the start or end of a capture operation.
    ///
    /// Callers must check [`Session::is_listening`] before starting a new
    /// capture; the flag is what collapses overlapping listen requests into
    /// the single in-flight operation.
    pub fn set_listening(&mut self, listening: bool) {
        self.is_listening = listening;
    }

    /// Records one attempt at the current word.
    pub fn record_attempt(&mut self, correct: bool) {
        self.total_attempts += 1;
        if correct {
            self.score += 1;
        }
    }

    /// Pops the next word from the queue and makes it current.
    ///
    /// Returns the new current word, or `None` when the queue is exhausted,
    /// in which case the session is marked complete at `now`. Completion is
    /// sticky for the pass.
    pub fn advance(&mut self, now: DateTime<Utc>) -> Option<String> {
        match self.remaining.pop_front() {
            Some(word) => {
                self.current_word = Some(word.clone());
                Some(word)
            }
            None => {
                self.current_word = None;
                if self.completed_at.is_none() {
                    self.completed_at = Some(now);
                }
                None
            }
        }
    }

    /// Success ratio as a percentage, 0 when no attempts were made.
    #[must_use]
    pub fn score_percentage(&self) -> f64 {
        if self.total_attempts == 0 {
            0.0
        } else {
            f64::from(self.score) / f64::from(self.total_attempts) * 100.0
        }
    }
}
