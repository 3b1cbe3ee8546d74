use chrono::{DateTime, Utc};

use rostire_core::model::Session;

/// Final tally for a completed pass through a category.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionReport {
    pub category: String,
    pub score: u32,
    pub total_attempts: u32,
    /// `score / total_attempts` as a percentage, 0 when no attempts.
    pub percentage: f64,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

impl CompletionReport {
    #[must_use]
    pub fn from_session(session: &Session) -> Self {
        Self {
            category: session.category().as_str().to_string(),
            score: session.score(),
            total_attempts: session.total_attempts(),
            percentage: session.score_percentage(),
            started_at: session.started_at(),
            completed_at: session.completed_at().unwrap_or_else(|| session.started_at()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rostire_core::model::CategoryName;
    use rostire_core::time::fixed_now;

    #[test]
    fn report_reflects_session_tally() {
        let mut session = Session::new(
            CategoryName::new("Culori").unwrap(),
            vec!["roșu".to_string(), "verde".to_string()],
            fixed_now(),
        )
        .unwrap();

        session.advance(fixed_now());
        session.record_attempt(true);
        session.advance(fixed_now());
        session.record_attempt(false);
        let done = fixed_now() + chrono::Duration::seconds(30);
        session.advance(done);

        let report = CompletionReport::from_session(&session);
        assert_eq!(report.category, "Culori");
        assert_eq!(report.score, 1);
        assert_eq!(report.total_attempts, 2);
        assert!((report.percentage - 50.0).abs() < f64::EPSILON);
        assert_eq!(report.completed_at, done);
    }
}
