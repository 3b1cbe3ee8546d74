#![forbid(unsafe_code)]

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod status;

pub use rostire_core::Clock;

pub use catalog::WordCatalog;
pub use config::PracticeConfig;
pub use engine::{
    CompletionReport, PracticeEngine, PracticeHandle, PracticeSnapshot, PracticeState,
};
pub use error::PracticeError;
pub use events::{FeedbackKind, PracticeEvent};
pub use status::StatusMessage;
