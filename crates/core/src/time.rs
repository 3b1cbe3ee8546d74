use chrono::{DateTime, Utc};

/// Source of the session timestamps (`started_at`, `completed_at`).
///
/// The engine reads the wall clock through this so tests can pin `now` and
/// assert exact timestamps in completion reports.
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    /// System time.
    #[default]
    Default,
    /// Pinned at one instant.
    Fixed(DateTime<Utc>),
}

impl Clock {
    /// Clock pinned at the given instant.
    #[must_use]
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self::Fixed(at)
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::Default => Utc::now(),
            Clock::Fixed(at) => *at,
        }
    }
}

/// Deterministic timestamp for tests (2023-11-14T22:13:20Z).
///
/// # Panics
///
/// Panics if the timestamp cannot be represented, which it always can.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(1_700_000_000, 0).expect("timestamp is representable")
}
