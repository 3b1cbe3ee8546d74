#![forbid(unsafe_code)]

pub mod matcher;
pub mod model;
pub mod time;

pub use matcher::{DEFAULT_SIMILARITY_THRESHOLD, MatchResult, PronunciationMatcher};
pub use time::Clock;
