mod capture;
mod category;
mod session;

pub use capture::CaptureOutcome;
pub use category::{CategoryError, CategoryName, WordCategory};
pub use session::{Session, SessionError};
