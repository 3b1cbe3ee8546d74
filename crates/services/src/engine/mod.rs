mod handle;
mod report;
mod state;
mod worker;

pub use handle::{PracticeEngine, PracticeHandle};
pub use report::CompletionReport;
pub use state::{PracticeSnapshot, PracticeState};

pub(crate) use handle::Command;
