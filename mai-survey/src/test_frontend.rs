//! Test frontend for running surveys without user interaction.
//!
//! `TestFrontend` walks a controller through every page with pre-defined
//! answers, fills in the info form and submits. This is useful for testing
//! hosts and results stages.
//!
//! # Example
//!
//! ```rust
//! use mai_survey::{Catalog, FlowController, InfoField, Question, SurveyFrontend, TestFrontend};
//!
//! let catalog = Catalog::new(vec![
//!     Question::new(1u32, "Goals", "I ask myself if I am meeting my goals."),
//!     Question::new(2u32, "Options", "I consider several alternatives."),
//! ])
//! .unwrap();
//! let mut controller = FlowController::new(catalog);
//!
//! let completion = TestFrontend::new()
//!     .with_all_answers(true)
//!     .with_answer(2u32, false)
//!     .with_info(InfoField::Name, "Alice")
//!     .with_info(InfoField::Age, "14")
//!     .with_info(InfoField::School, "Riverside")
//!     .with_info(InfoField::Grade, "8")
//!     .collect(&mut controller)
//!     .unwrap();
//!
//! assert_eq!(completion.answers.as_slice(), &[Some(true), Some(false)]);
//! assert_eq!(completion.info.name(), "Alice");
//! ```

use std::collections::HashMap;

use mai_survey_types::{Completion, FlowError, InfoField, Question, QuestionId, SurveyError};

use crate::{FlowController, SurveyFrontend};

/// A frontend that answers from a pre-configured script.
///
/// Like a careful respondent, it only advances once the current page is
/// fully answered and only submits with every info field filled.
#[derive(Debug, Clone, Default)]
pub struct TestFrontend {
    answers: HashMap<QuestionId, bool>,
    fallback: Option<bool>,
    info: HashMap<InfoField, String>,
}

/// Error type for TestFrontend.
#[derive(Debug, thiserror::Error)]
pub enum TestFrontendError {
    #[error("Missing scripted answer for question {0}")]
    MissingAnswer(QuestionId),

    #[error("Missing scripted value for info field '{0}'")]
    MissingInfo(InfoField),

    #[error(transparent)]
    Flow(#[from] FlowError),
}

impl From<TestFrontendError> for SurveyError {
    fn from(err: TestFrontendError) -> Self {
        match err {
            TestFrontendError::Flow(flow) => SurveyError::Flow(flow),
            other => SurveyError::backend(other),
        }
    }
}

impl TestFrontend {
    /// Create a new empty test frontend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the answer for one question.
    pub fn with_answer(mut self, id: impl Into<QuestionId>, value: bool) -> Self {
        self.answers.insert(id.into(), value);
        self
    }

    /// Script the answer for every question without an explicit one.
    pub fn with_all_answers(mut self, value: bool) -> Self {
        self.fallback = Some(value);
        self
    }

    /// Script an info field.
    pub fn with_info(mut self, field: InfoField, value: impl Into<String>) -> Self {
        self.info.insert(field, value.into());
        self
    }

    fn answer_for(&self, id: QuestionId) -> Option<bool> {
        self.answers.get(&id).copied().or(self.fallback)
    }
}

impl SurveyFrontend for TestFrontend {
    type Error = TestFrontendError;

    fn collect(&self, controller: &mut FlowController) -> Result<Completion, Self::Error> {
        while !controller.is_info_stage() {
            let ids: Vec<QuestionId> = controller
                .current_page_questions()
                .iter()
                .map(Question::id)
                .collect();

            for id in ids {
                match self.answer_for(id) {
                    Some(value) => controller.set_answer(id, value)?,
                    None if controller.answer(id)?.is_none() => {
                        return Err(TestFrontendError::MissingAnswer(id));
                    }
                    None => {}
                }
            }

            if !controller.is_page_answered() {
                return Err(FlowError::PageIncomplete {
                    page: controller.current_step(),
                    unanswered: controller.unanswered_on_page(),
                }
                .into());
            }
            controller.go_next()?;
        }

        for field in InfoField::ALL {
            match self.info.get(&field) {
                Some(value) => controller.set_info_field(field, value.clone()),
                None if controller.info().get(field).trim().is_empty() => {
                    return Err(TestFrontendError::MissingInfo(field));
                }
                None => {}
            }
        }

        Ok(controller.submit()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mai_survey_types::Catalog;

    fn controller(len: u32) -> FlowController {
        FlowController::new(
            Catalog::new(
                (1..=len)
                    .map(|id| Question::new(id, format!("Q{id}"), format!("Question {id}")))
                    .collect(),
            )
            .unwrap(),
        )
    }

    fn full_info(frontend: TestFrontend) -> TestFrontend {
        frontend
            .with_info(InfoField::Name, "Alice")
            .with_info(InfoField::Age, "14")
            .with_info(InfoField::School, "Riverside")
            .with_info(InfoField::Grade, "8")
    }

    #[test]
    fn walks_every_page() {
        let mut controller = controller(25);
        let completion = full_info(TestFrontend::new().with_all_answers(false))
            .collect(&mut controller)
            .unwrap();

        assert!(completion.answers.is_complete());
        assert!(controller.is_info_stage());
    }

    #[test]
    fn missing_answer_stops_on_its_page() {
        let mut controller = controller(25);
        let frontend = full_info((1..=12u32).fold(TestFrontend::new(), |frontend, id| {
            frontend.with_answer(id, true)
        }));

        let err = frontend.collect(&mut controller).unwrap_err();
        assert!(matches!(err, TestFrontendError::MissingAnswer(id) if id == QuestionId::new(13)));
        assert_eq!(controller.current_step(), 1);
    }

    #[test]
    fn missing_info_is_reported() {
        let mut controller = controller(3);
        let err = TestFrontend::new()
            .with_all_answers(true)
            .with_info(InfoField::Name, "Alice")
            .collect(&mut controller)
            .unwrap_err();

        assert!(matches!(err, TestFrontendError::MissingInfo(InfoField::Age)));
    }

    #[test]
    fn keeps_existing_answers() {
        let mut controller = controller(2);
        controller.set_answer(QuestionId::new(1), false).unwrap();

        let completion = full_info(TestFrontend::new().with_answer(2u32, true))
            .collect(&mut controller)
            .unwrap();
        assert_eq!(completion.answers.as_slice(), &[Some(false), Some(true)]);
    }

    #[test]
    fn errors_convert_to_survey_error() {
        let err: SurveyError = TestFrontendError::MissingInfo(InfoField::Grade).into();
        assert!(matches!(err, SurveyError::Backend(_)));

        let err: SurveyError = TestFrontendError::Flow(FlowError::InvalidField("x".into())).into();
        assert!(matches!(err, SurveyError::Flow(_)));
    }
}
