use std::fmt;

use rostire_core::model::CaptureOutcome;

/// User-facing status line for the current session, rendered by whatever
/// presentation layer subscribes to the event stream.
///
/// Each capture sentinel maps to its own message so the player can tell
/// silence apart from unintelligible speech or a failing service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    /// Default prompt while a word is presented.
    Prompt,
    /// A capture is in flight.
    Listening,
    /// The attempt matched.
    Correct,
    /// The attempt did not match; carries what the recognizer heard.
    Incorrect { heard: String },
    /// No speech was detected before the timeout.
    NoSound,
    /// Speech was detected but not understood.
    NotUnderstood,
    /// The recognition service failed or is unavailable.
    RecognitionError,
    /// No category is active yet.
    SelectCategory,
}

impl StatusMessage {
    /// Message for an incorrect attempt, tailored to the capture outcome.
    #[must_use]
    pub fn for_incorrect(outcome: &CaptureOutcome) -> Self {
        match outcome {
            CaptureOutcome::Text(heard) => StatusMessage::Incorrect {
                heard: heard.clone(),
            },
            CaptureOutcome::Timeout => StatusMessage::NoSound,
            CaptureOutcome::Unrecognized => StatusMessage::NotUnderstood,
            CaptureOutcome::ServiceError | CaptureOutcome::Unavailable => {
                StatusMessage::RecognitionError
            }
        }
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusMessage::Prompt => write!(f, "Apasă pe microfon și pronunță cuvântul"),
            StatusMessage::Listening => write!(f, "Vorbește acum..."),
            StatusMessage::Correct => write!(f, "✅ Corect! Felicitări!"),
            StatusMessage::Incorrect { heard } => {
                write!(f, "❌ Ai spus: '{heard}'. Încearcă din nou!")
            }
            StatusMessage::NoSound => write!(f, "Nu am auzit nimic. Încearcă din nou."),
            StatusMessage::NotUnderstood => write!(f, "Nu am înțeles. Încearcă din nou."),
            StatusMessage::RecognitionError => {
                write!(f, "Eroare la recunoaștere. Încearcă din nou.")
            }
            StatusMessage::SelectCategory => write!(f, "Alege o categorie pentru a începe"),
        }
    }
}
