//! # mai-survey
//!
//! Paged true/false survey flow, followed by an identifying-information
//! form. Frontend-agnostic.
//!
//! The [`FlowController`] owns one attempt: the current step, one answer slot
//! per catalog item and the info record. Pages are fixed-size contiguous
//! chunks of the catalog; the step after the last page is the info form.
//! Navigation clamps, answers are keyed by question id, and submission
//! produces a [`Completion`] for the results stage.
//!
//! ## Usage
//!
//! ```rust
//! use mai_survey::{Catalog, FlowController, InfoField, Question, QuestionId};
//!
//! let catalog = Catalog::new(
//!     (1..=12u32)
//!         .map(|id| Question::new(id, format!("Item {id}"), format!("Statement {id}")))
//!         .collect(),
//! )
//! .unwrap();
//! let mut controller = FlowController::new(catalog);
//! assert_eq!(controller.total_pages(), 2);
//!
//! for id in 1..=12u32 {
//!     controller.set_answer(QuestionId::new(id), id % 3 == 0).unwrap();
//!     if controller.is_page_answered() && !controller.is_info_stage() {
//!         controller.go_next().unwrap();
//!     }
//! }
//! assert!(controller.is_info_stage());
//!
//! for field in InfoField::ALL {
//!     controller.set_info_field(field, "n/a");
//! }
//! let completion = controller.submit().unwrap();
//! assert_eq!(completion.answers.answered_count(), 12);
//! ```
//!
//! ## Gating
//!
//! With the default [`GatePolicy::Strict`] the controller itself refuses to
//! leave an unanswered page and refuses to submit blank info fields. With
//! [`GatePolicy::Permissive`] it clamps and submits unconditionally, and the
//! frontend is the gate.
//!
//! ## Frontends
//!
//! Frontends are separate crates that implement [`SurveyFrontend`]:
//! - `mai-ratatui-wizard` - TUI, one page per screen
//! - `mai-dialoguer-wizard` - CLI prompts via dialoguer
//!
//! [`TestFrontend`] runs a scripted respondent for tests.

// Re-export all types from mai-survey-types
pub use mai_survey_types::*;

mod config;
pub use config::{FlowConfig, GatePolicy, PAGE_SIZE};

mod page;
pub use page::{Page, total_pages};

mod controller;
pub use controller::{FlowController, Stage};

mod traits;
pub use traits::{ResultsStage, SurveyFrontend};

mod shell;
pub use shell::Shell;

// Test frontend for running surveys without user interaction
mod test_frontend;
pub use test_frontend::{TestFrontend, TestFrontendError};
