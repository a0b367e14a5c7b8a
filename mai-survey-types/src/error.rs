use crate::{InfoField, QuestionId};

/// A rejected controller operation.
///
/// Every variant leaves the controller's state untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlowError {
    /// The id does not belong to the catalog.
    #[error("Question {0} is not in the catalog")]
    InvalidQuestionId(QuestionId),

    /// The field name is not one of name, age, school or grade.
    #[error("Unknown info field '{0}' (expected name, age, school or grade)")]
    InvalidField(String),

    /// Submit was called before reaching the info form.
    #[error("Cannot submit from step {step}; the info form is step {total_pages}")]
    PrematureSubmit { step: usize, total_pages: usize },

    /// Advancing was refused because the current page is not fully answered.
    #[error("Page {} has unanswered questions: {}", .page + 1, join(.unanswered))]
    PageIncomplete {
        page: usize,
        unanswered: Vec<QuestionId>,
    },

    /// Submit was refused because required info fields are blank.
    #[error("Required info fields are empty: {}", join(.missing))]
    InfoIncomplete { missing: Vec<InfoField> },
}

fn join<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Error type for running a survey through a frontend.
#[derive(Debug, thiserror::Error)]
pub enum SurveyError {
    /// User cancelled the survey (Esc, Ctrl+C, closed window, etc.)
    #[error("Survey cancelled by user")]
    Cancelled,

    /// The session already completed; restart to begin a new attempt.
    #[error("Survey already completed")]
    Completed,

    /// The controller rejected an operation.
    #[error(transparent)]
    Flow(#[from] FlowError),

    /// Frontend-specific failure (I/O, UI framework crash, etc.)
    #[error("Backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

impl SurveyError {
    /// Create a backend error from any error type.
    pub fn backend(err: impl Into<anyhow::Error>) -> Self {
        Self::Backend(err.into())
    }

    /// Check if this error represents user cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_one_based() {
        let err = FlowError::PageIncomplete {
            page: 0,
            unanswered: vec![QuestionId::new(3), QuestionId::new(7)],
        };
        assert_eq!(err.to_string(), "Page 1 has unanswered questions: 3, 7");

        let err = FlowError::InfoIncomplete {
            missing: vec![InfoField::Age, InfoField::Grade],
        };
        assert_eq!(err.to_string(), "Required info fields are empty: age, grade");
    }

    #[test]
    fn cancellation_is_detectable() {
        assert!(SurveyError::Cancelled.is_cancelled());
        assert!(!SurveyError::from(FlowError::InvalidField("x".into())).is_cancelled());
        assert!(!SurveyError::backend(std::io::Error::other("tty gone")).is_cancelled());
    }
}
