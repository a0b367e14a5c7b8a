use mai_survey_types::{Completion, SurveyError};

use crate::FlowController;

/// Trait for presentation layers that drive a controller to completion.
///
/// A frontend renders the controller's derived view, translates user
/// actions into controller operations and returns the payload of the first
/// successful [`FlowController::submit`]. It is the frontend's job to gate
/// advancement on [`FlowController::is_page_answered`] and submission on
/// filled info fields, whatever the controller's gate policy.
pub trait SurveyFrontend {
    /// The error type for this frontend.
    type Error: Into<SurveyError>;

    /// Run the survey until submission, cancellation or failure.
    ///
    /// # Returns
    /// * `Ok(completion)` once the respondent submits the info form
    /// * `Err` on cancellation or frontend failure
    fn collect(&self, controller: &mut FlowController) -> Result<Completion, Self::Error>;
}

/// Trait for the stage that consumes a finished survey.
///
/// The host shell calls [`evaluate`](ResultsStage::evaluate) exactly once
/// per completed attempt and keeps the report until restart.
pub trait ResultsStage {
    /// What the stage produces from a completion (scores, a summary, ...).
    type Report;

    fn evaluate(&self, completion: &Completion) -> Self::Report;
}

/// A results stage that only keeps the completion.
impl ResultsStage for () {
    type Report = ();

    fn evaluate(&self, _completion: &Completion) -> Self::Report {}
}
