//! Dialoguer frontend implementation for the SurveyFrontend trait.

use dialoguer::{
    Input, Select,
    theme::{ColorfulTheme, SimpleTheme, Theme},
};
use mai_survey::{
    Completion, FlowController, FlowError, InfoField, Question, SurveyError, SurveyFrontend,
};
use thiserror::Error;
use tracing::debug;

/// Error type for the Dialoguer frontend.
#[derive(Debug, Error)]
pub enum DialoguerError {
    /// User cancelled the survey (e.g., pressed Ctrl+C or Escape).
    #[error("Survey cancelled by user")]
    Cancelled,

    /// An I/O error occurred during prompting.
    #[error("Dialoguer error: {0}")]
    Dialoguer(#[from] dialoguer::Error),

    /// The controller refused a transition.
    #[error(transparent)]
    Flow(#[from] FlowError),
}

impl From<DialoguerError> for SurveyError {
    fn from(err: DialoguerError) -> Self {
        match err {
            DialoguerError::Cancelled => SurveyError::Cancelled,
            DialoguerError::Flow(err) => SurveyError::Flow(err),
            other => SurveyError::backend(other),
        }
    }
}

/// Helper to check if a dialoguer error is a cancellation (Ctrl+C / Escape)
fn is_cancelled(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(io_err) if io_err.kind() == std::io::ErrorKind::Interrupted)
}

fn prompt_error(err: dialoguer::Error) -> DialoguerError {
    if is_cancelled(&err) {
        DialoguerError::Cancelled
    } else {
        DialoguerError::Dialoguer(err)
    }
}

const ANSWERS: [&str; 2] = ["True", "False"];

/// Preselected row of the True/False prompt for a previous answer.
fn answer_default(previous: Option<bool>) -> usize {
    match previous {
        Some(false) => 1,
        Some(true) | None => 0,
    }
}

/// Choices offered between pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Navigation {
    Next,
    Previous,
    Submit,
}

impl Navigation {
    fn label(self, last_page: bool) -> &'static str {
        match self {
            Self::Next if last_page => "Continue to your details",
            Self::Next => "Next page",
            Self::Previous => "Previous page",
            Self::Submit => "Submit",
        }
    }
}

/// Navigation choices available at the controller's current position.
fn navigation_choices(controller: &FlowController) -> Vec<Navigation> {
    let forward = if controller.is_info_stage() {
        Navigation::Submit
    } else {
        Navigation::Next
    };
    if controller.current_step() > 0 {
        vec![forward, Navigation::Previous]
    } else {
        vec![forward]
    }
}

/// Dialoguer frontend for interactive CLI prompts.
///
/// Uses the `dialoguer` library to ask each statement as a True/False
/// selection, with colorful themes by default.
#[derive(Debug, Default, Clone)]
pub struct DialoguerFrontend {
    /// Use colorful theme for prompts.
    colorful: bool,
}

impl DialoguerFrontend {
    /// Create a new Dialoguer frontend with default (colorful) theme.
    pub fn new() -> Self {
        Self { colorful: true }
    }

    /// Create a frontend with plain (no color) theme.
    pub fn plain() -> Self {
        Self { colorful: false }
    }

    fn theme(&self) -> Box<dyn Theme> {
        if self.colorful {
            Box::new(ColorfulTheme::default())
        } else {
            Box::new(SimpleTheme)
        }
    }

    fn ask_question(
        &self,
        question: &Question,
        controller: &mut FlowController,
    ) -> Result<(), DialoguerError> {
        let theme = self.theme();
        let previous = controller.answer(question.id())?;

        let selection = Select::with_theme(theme.as_ref())
            .with_prompt(format!("{}. {}", question.id(), question.prompt_long()))
            .items(&ANSWERS)
            .default(answer_default(previous))
            .interact()
            .map_err(prompt_error)?;

        controller.set_answer(question.id(), selection == 0)?;
        Ok(())
    }

    fn ask_page(&self, controller: &mut FlowController) -> Result<(), DialoguerError> {
        println!();
        println!(
            "Page {} of {}",
            controller.current_step() + 1,
            controller.total_pages()
        );

        let questions = controller.current_page_questions().to_vec();
        for question in &questions {
            self.ask_question(question, controller)?;
        }
        Ok(())
    }

    fn ask_info(&self, controller: &mut FlowController) -> Result<(), DialoguerError> {
        println!();
        println!("About you");

        for field in InfoField::ALL {
            let theme = self.theme();
            let mut builder = Input::<String>::with_theme(theme.as_ref())
                .with_prompt(field.label())
                .allow_empty(false)
                .validate_with(|input: &String| -> Result<(), &str> {
                    if input.trim().is_empty() {
                        Err("This field is required")
                    } else {
                        Ok(())
                    }
                });

            let current = controller.info().get(field);
            if !current.trim().is_empty() {
                builder = builder.default(current.to_string());
            }

            let value = builder.interact_text().map_err(prompt_error)?;
            controller.set_info_field(field, value);
        }
        Ok(())
    }

    fn ask_navigation(&self, controller: &FlowController) -> Result<Navigation, DialoguerError> {
        let choices = navigation_choices(controller);
        if choices.len() == 1 && choices[0] == Navigation::Next {
            return Ok(Navigation::Next);
        }

        let last_page = controller.current_step() + 1 == controller.total_pages();
        let labels: Vec<&str> = choices.iter().map(|choice| choice.label(last_page)).collect();
        let theme = self.theme();
        let selection = Select::with_theme(theme.as_ref())
            .with_prompt("Continue")
            .items(&labels)
            .default(0)
            .interact()
            .map_err(prompt_error)?;

        Ok(choices[selection])
    }
}

impl SurveyFrontend for DialoguerFrontend {
    type Error = DialoguerError;

    fn collect(&self, controller: &mut FlowController) -> Result<Completion, Self::Error> {
        loop {
            if controller.is_info_stage() {
                self.ask_info(controller)?;
            } else {
                self.ask_page(controller)?;
            }

            match self.ask_navigation(controller)? {
                Navigation::Next => {
                    controller.go_next()?;
                }
                Navigation::Previous => {
                    controller.go_prev();
                }
                Navigation::Submit => {
                    debug!("submitting from the dialoguer wizard");
                    return Ok(controller.submit()?);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mai_survey::{Catalog, QuestionId};

    fn controller(len: u32) -> FlowController {
        FlowController::new(
            Catalog::new(
                (1..=len)
                    .map(|id| Question::new(id, format!("Q{id}"), format!("Statement {id}")))
                    .collect(),
            )
            .unwrap(),
        )
    }

    fn answer_page(controller: &mut FlowController) {
        let ids: Vec<QuestionId> = controller
            .current_page_questions()
            .iter()
            .map(Question::id)
            .collect();
        for id in ids {
            controller.set_answer(id, true).unwrap();
        }
    }

    #[test]
    fn frontend_creation() {
        let _frontend = DialoguerFrontend::new();
        let _plain = DialoguerFrontend::plain();
    }

    #[test]
    fn error_types() {
        let err = DialoguerError::Cancelled;
        assert_eq!(err.to_string(), "Survey cancelled by user");

        assert!(SurveyError::from(DialoguerError::Cancelled).is_cancelled());

        let flow = FlowError::InvalidQuestionId(QuestionId::new(99));
        assert!(matches!(
            SurveyError::from(DialoguerError::Flow(flow.clone())),
            SurveyError::Flow(err) if err == flow
        ));
    }

    #[test]
    fn interrupted_prompt_is_cancellation() {
        let interrupted = dialoguer::Error::IO(std::io::Error::new(
            std::io::ErrorKind::Interrupted,
            "ctrl-c",
        ));
        assert!(matches!(prompt_error(interrupted), DialoguerError::Cancelled));

        let broken = dialoguer::Error::IO(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "closed",
        ));
        assert!(matches!(prompt_error(broken), DialoguerError::Dialoguer(_)));
    }

    #[test]
    fn previous_answer_is_preselected() {
        assert_eq!(answer_default(None), 0);
        assert_eq!(answer_default(Some(true)), 0);
        assert_eq!(answer_default(Some(false)), 1);
    }

    #[test]
    fn navigation_follows_position() {
        let mut controller = controller(15);
        assert_eq!(navigation_choices(&controller), vec![Navigation::Next]);

        answer_page(&mut controller);
        controller.go_next().unwrap();
        assert_eq!(
            navigation_choices(&controller),
            vec![Navigation::Next, Navigation::Previous]
        );

        answer_page(&mut controller);
        controller.go_next().unwrap();
        assert_eq!(
            navigation_choices(&controller),
            vec![Navigation::Submit, Navigation::Previous]
        );
    }

    #[test]
    fn last_page_label_points_at_details() {
        assert_eq!(Navigation::Next.label(true), "Continue to your details");
        assert_eq!(Navigation::Next.label(false), "Next page");
        assert_eq!(Navigation::Submit.label(true), "Submit");
    }
}
