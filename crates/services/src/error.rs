//! Shared error types for the services crate.

use thiserror::Error;

use rostire_core::matcher::MatcherError;
use rostire_core::model::{CategoryError, SessionError};

/// Errors emitted by the practice engine.
///
/// Collaborator failures (audio timeouts, unrecognized speech, service
/// errors) never appear here: they are absorbed into `CaptureOutcome`
/// sentinels at the boundary and routed through evaluation as incorrect
/// attempts.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum PracticeError {
    #[error("category not found: {0}")]
    CategoryNotFound(String),

    #[error("practice engine is no longer running")]
    EngineStopped,

    #[error(transparent)]
    Category(#[from] CategoryError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Matcher(#[from] MatcherError),
}
