//! Host shell: owns the controller for one attempt and the results afterwards.

use std::sync::Arc;

use mai_survey_types::{Catalog, Completion, SurveyError};
use tracing::{info, warn};

use crate::{FlowConfig, FlowController, ResultsStage, SurveyFrontend};

enum ShellState<T> {
    Collecting(FlowController),
    Completed { completion: Completion, report: T },
}

/// Instantiates controllers, forwards completions to the results stage and
/// handles restart.
///
/// While collecting, the shell holds a live [`FlowController`]. When a
/// completion arrives the controller is dropped, which makes a second
/// submission for the same attempt impossible. [`Shell::restart`] discards
/// everything and starts over with a fresh controller.
pub struct Shell<R: ResultsStage = ()> {
    catalog: Arc<Catalog>,
    config: FlowConfig,
    results: R,
    state: ShellState<R::Report>,
}

impl<R: ResultsStage> Shell<R> {
    /// Start a session with the default flow configuration.
    pub fn start(catalog: impl Into<Arc<Catalog>>, results: R) -> Self {
        Self::start_with_config(catalog, FlowConfig::default(), results)
    }

    /// Start a session with a custom flow configuration.
    pub fn start_with_config(
        catalog: impl Into<Arc<Catalog>>,
        config: FlowConfig,
        results: R,
    ) -> Self {
        let catalog = catalog.into();
        let controller = FlowController::with_config(Arc::clone(&catalog), config.clone());
        info!(questions = catalog.len(), "survey session started");
        Self {
            catalog,
            config,
            results,
            state: ShellState::Collecting(controller),
        }
    }

    /// The live controller, `None` once completed.
    pub fn controller(&self) -> Option<&FlowController> {
        match &self.state {
            ShellState::Collecting(controller) => Some(controller),
            ShellState::Completed { .. } => None,
        }
    }

    /// Mutable access to the live controller, `None` once completed.
    pub fn controller_mut(&mut self) -> Option<&mut FlowController> {
        match &mut self.state {
            ShellState::Collecting(controller) => Some(controller),
            ShellState::Completed { .. } => None,
        }
    }

    /// Submit the live controller and hand the payload to the results stage.
    pub fn submit(&mut self) -> Result<&R::Report, SurveyError> {
        let completion = match &self.state {
            ShellState::Collecting(controller) => controller.submit()?,
            ShellState::Completed { .. } => return Err(SurveyError::Completed),
        };
        self.on_completion(completion)
    }

    /// Run a frontend against the live controller until it submits.
    pub fn run<F: SurveyFrontend>(&mut self, frontend: &F) -> Result<&R::Report, SurveyError> {
        let completion = match &mut self.state {
            ShellState::Collecting(controller) => {
                frontend
                    .collect(controller)
                    .map_err(Into::<SurveyError>::into)?
            }
            ShellState::Completed { .. } => return Err(SurveyError::Completed),
        };
        self.on_completion(completion)
    }

    /// Store a completion, evaluate it and switch to the results view.
    ///
    /// Retires the live controller if there is one. A session takes one
    /// completion; once completed, further payloads are refused with
    /// [`SurveyError::Completed`] and the results stage is not called.
    pub fn on_completion(&mut self, completion: Completion) -> Result<&R::Report, SurveyError> {
        if self.is_completed() {
            warn!("rejected completion for a finished session");
            return Err(SurveyError::Completed);
        }

        let report = self.results.evaluate(&completion);
        info!(
            answered = completion.answers.answered_count(),
            "survey completed"
        );
        self.state = ShellState::Completed { completion, report };

        let ShellState::Completed { report, .. } = &self.state else {
            return Err(SurveyError::Completed);
        };
        Ok(report)
    }

    /// Discard all state and begin a new attempt.
    pub fn restart(&mut self) {
        self.state = ShellState::Collecting(FlowController::with_config(
            Arc::clone(&self.catalog),
            self.config.clone(),
        ));
        info!("survey session restarted");
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.state, ShellState::Completed { .. })
    }

    /// The stored completion, once completed.
    pub fn completion(&self) -> Option<&Completion> {
        match &self.state {
            ShellState::Completed { completion, .. } => Some(completion),
            ShellState::Collecting(_) => None,
        }
    }

    /// The results stage's report, once completed.
    pub fn report(&self) -> Option<&R::Report> {
        match &self.state {
            ShellState::Completed { report, .. } => Some(report),
            ShellState::Collecting(_) => None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn results(&self) -> &R {
        &self.results
    }
}
