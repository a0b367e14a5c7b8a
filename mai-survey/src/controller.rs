//! The response-collection state machine.

use std::sync::Arc;

use mai_survey_types::{
    AnswerVector, Catalog, Completion, FlowError, InfoField, InfoRecord, Question, QuestionId,
};
use tracing::{debug, info, warn};

use crate::{FlowConfig, Page, page::total_pages};

/// Where the respondent currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// A question page, 0-based.
    Questions { page: usize },

    /// The identifying-information form after the last page.
    Info,
}

/// Owns one survey attempt: position, answers and info record.
///
/// The position `current_step` always lies in `0..=total_pages()`. Steps
/// below `total_pages()` are question pages; `total_pages()` itself is the
/// info form. Navigation clamps at both ends and never fails for being out
/// of range.
///
/// There is no reset. A new attempt is a new controller.
#[derive(Debug, Clone)]
pub struct FlowController {
    catalog: Arc<Catalog>,
    config: FlowConfig,
    current_step: usize,
    answers: AnswerVector,
    info: InfoRecord,
}

impl FlowController {
    /// Create a controller with the default configuration.
    pub fn new(catalog: impl Into<Arc<Catalog>>) -> Self {
        Self::with_config(catalog, FlowConfig::default())
    }

    /// Create a controller positioned on the first page with nothing answered.
    pub fn with_config(catalog: impl Into<Arc<Catalog>>, config: FlowConfig) -> Self {
        let catalog = catalog.into();
        let answers = AnswerVector::new(catalog.len());
        debug!(
            questions = catalog.len(),
            page_size = config.page_size.get(),
            gate = ?config.gate,
            "flow controller created"
        );
        Self {
            catalog,
            config,
            current_step: 0,
            answers,
            info: InfoRecord::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    pub fn page_size(&self) -> usize {
        self.config.page_size.get()
    }

    /// Current position: a page index, or `total_pages()` for the info form.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Number of question pages.
    pub fn total_pages(&self) -> usize {
        total_pages(self.catalog.len(), self.page_size())
    }

    /// Catalog position of the first question on the current page.
    ///
    /// Equals the catalog length on the info stage.
    pub fn start_index(&self) -> usize {
        (self.current_step * self.page_size()).min(self.catalog.len())
    }

    /// Catalog position one past the last question on the current page.
    pub fn end_index(&self) -> usize {
        (self.start_index() + self.page_size()).min(self.catalog.len())
    }

    /// Questions on the current page. Empty on the info stage.
    pub fn current_page_questions(&self) -> &[Question] {
        &self.catalog.questions()[self.start_index()..self.end_index()]
    }

    /// The current page, or `None` on the info stage.
    pub fn current_page(&self) -> Option<Page<'_>> {
        self.page(self.current_step)
    }

    /// Any page by index, or `None` past the last page.
    pub fn page(&self, index: usize) -> Option<Page<'_>> {
        if index >= self.total_pages() {
            return None;
        }
        let start = index * self.page_size();
        let end = (start + self.page_size()).min(self.catalog.len());
        Some(Page {
            index,
            questions: &self.catalog.questions()[start..end],
        })
    }

    /// Index of the page holding `id`.
    pub fn page_of(&self, id: QuestionId) -> Option<usize> {
        if !self.catalog.contains(id) {
            return None;
        }
        id.index().map(|index| index / self.page_size())
    }

    /// Check if every question on the current page has an answer.
    ///
    /// Trivially true on the info stage.
    pub fn is_page_answered(&self) -> bool {
        self.current_page_questions()
            .iter()
            .all(|question| self.answers.is_answered(question.id()))
    }

    /// Ids on the current page that still need an answer.
    pub fn unanswered_on_page(&self) -> Vec<QuestionId> {
        self.current_page_questions()
            .iter()
            .map(Question::id)
            .filter(|id| !self.answers.is_answered(*id))
            .collect()
    }

    pub fn is_info_stage(&self) -> bool {
        self.current_step == self.total_pages()
    }

    pub fn stage(&self) -> Stage {
        if self.is_info_stage() {
            Stage::Info
        } else {
            Stage::Questions {
                page: self.current_step,
            }
        }
    }

    /// `(answered, total)` over the whole catalog.
    pub fn progress(&self) -> (usize, usize) {
        (self.answers.answered_count(), self.answers.len())
    }

    pub fn answers(&self) -> &AnswerVector {
        &self.answers
    }

    /// The answer for `id`, `Ok(None)` while unanswered.
    pub fn answer(&self, id: QuestionId) -> Result<Option<bool>, FlowError> {
        if !self.catalog.contains(id) {
            return Err(FlowError::InvalidQuestionId(id));
        }
        Ok(self.answers.get(id))
    }

    pub fn info(&self) -> &InfoRecord {
        &self.info
    }

    /// Record an answer for `id`, overwriting any earlier one.
    ///
    /// Allowed for any catalog item regardless of the current page. Never
    /// moves the position.
    pub fn set_answer(&mut self, id: QuestionId, value: bool) -> Result<(), FlowError> {
        if !self.catalog.contains(id) {
            warn!(%id, "rejected answer for unknown question");
            return Err(FlowError::InvalidQuestionId(id));
        }
        let previous = self.answers.set(id, value)?;
        debug!(%id, value, ?previous, "answer recorded");
        Ok(())
    }

    /// Advance one step, clamped at the info stage. Returns the new step.
    ///
    /// Under [`GatePolicy::Strict`](crate::GatePolicy::Strict) an incomplete
    /// page is refused with [`FlowError::PageIncomplete`]. Under
    /// `Permissive` the caller is responsible for gating.
    pub fn go_next(&mut self) -> Result<usize, FlowError> {
        if self.config.gate.is_strict() && !self.is_page_answered() {
            let unanswered = self.unanswered_on_page();
            warn!(step = self.current_step, ?unanswered, "refused to leave incomplete page");
            return Err(FlowError::PageIncomplete {
                page: self.current_step,
                unanswered,
            });
        }
        self.current_step = (self.current_step + 1).min(self.total_pages());
        debug!(step = self.current_step, "moved forward");
        Ok(self.current_step)
    }

    /// Go back one step, clamped at the first page. Returns the new step.
    pub fn go_prev(&mut self) -> usize {
        self.current_step = self.current_step.saturating_sub(1);
        debug!(step = self.current_step, "moved back");
        self.current_step
    }

    /// Replace one info field.
    pub fn set_info_field(&mut self, field: InfoField, value: impl Into<String>) {
        self.info.set(field, value);
        debug!(%field, "info field updated");
    }

    /// Replace one info field named by string (`"name"`, `"age"`, ...).
    pub fn set_info_field_named(
        &mut self,
        field: &str,
        value: impl Into<String>,
    ) -> Result<(), FlowError> {
        let field = field.parse::<InfoField>().inspect_err(|_| {
            warn!(field, "rejected unknown info field");
        })?;
        self.set_info_field(field, value);
        Ok(())
    }

    /// Produce the completion payload from the info stage.
    ///
    /// The controller is left unchanged; whoever receives the payload is
    /// expected to retire the controller.
    pub fn submit(&self) -> Result<Completion, FlowError> {
        if !self.is_info_stage() {
            warn!(step = self.current_step, "rejected premature submit");
            return Err(FlowError::PrematureSubmit {
                step: self.current_step,
                total_pages: self.total_pages(),
            });
        }
        if self.config.gate.is_strict() {
            let missing = self.info.missing();
            if !missing.is_empty() {
                warn!(?missing, "rejected submit with blank info fields");
                return Err(FlowError::InfoIncomplete { missing });
            }
        }
        info!(
            answered = self.answers.answered_count(),
            total = self.answers.len(),
            "survey submitted"
        );
        Ok(Completion {
            answers: self.answers.clone(),
            info: self.info.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use super::*;
    use crate::GatePolicy;

    fn catalog(len: u32) -> Catalog {
        Catalog::new(
            (1..=len)
                .map(|id| Question::new(id, format!("Q{id}"), format!("Question {id}")))
                .collect(),
        )
        .unwrap()
    }

    fn permissive(len: u32) -> FlowController {
        FlowController::with_config(
            catalog(len),
            FlowConfig::new().with_gate(GatePolicy::Permissive),
        )
    }

    fn answer_page(controller: &mut FlowController, value: bool) {
        let ids: Vec<QuestionId> = controller
            .current_page_questions()
            .iter()
            .map(Question::id)
            .collect();
        for id in ids {
            controller.set_answer(id, value).unwrap();
        }
    }

    #[test]
    fn starts_on_first_page_unanswered() {
        let controller = FlowController::new(catalog(52));

        assert_eq!(controller.current_step(), 0);
        assert_eq!(controller.total_pages(), 6);
        assert_eq!(controller.stage(), Stage::Questions { page: 0 });
        assert_eq!(controller.progress(), (0, 52));
        assert_eq!(controller.info(), &InfoRecord::new());
    }

    #[test]
    fn fifty_two_items_make_six_pages() {
        let controller = FlowController::new(catalog(52));
        let sizes: Vec<usize> = (0..controller.total_pages())
            .filter_map(|index| controller.page(index))
            .map(|page| page.len())
            .collect();

        assert_eq!(sizes, vec![10, 10, 10, 10, 10, 2]);
        assert!(controller.page(6).is_none());
    }

    #[test]
    fn page_slices_are_contiguous() {
        let mut controller = permissive(52);
        controller.go_next().unwrap();
        controller.go_next().unwrap();

        assert_eq!(controller.start_index(), 20);
        assert_eq!(controller.end_index(), 30);
        let page = controller.current_page().unwrap();
        assert_eq!(page.first_id(), QuestionId::new(21));
        assert_eq!(page.last_id(), QuestionId::new(30));
    }

    #[test]
    fn info_stage_has_no_questions() {
        let mut controller = permissive(12);
        controller.go_next().unwrap();
        controller.go_next().unwrap();

        assert!(controller.is_info_stage());
        assert_eq!(controller.stage(), Stage::Info);
        assert!(controller.current_page_questions().is_empty());
        assert!(controller.current_page().is_none());
        assert!(controller.is_page_answered());
    }

    #[test]
    fn alternating_answers_then_next() {
        let mut controller = FlowController::new(catalog(52));
        for id in 1..=10u32 {
            controller.set_answer(QuestionId::new(id), id % 2 == 1).unwrap();
        }

        assert!(controller.is_page_answered());
        assert_eq!(controller.go_next(), Ok(1));

        let slots = controller.answers().as_slice();
        for (index, slot) in slots.iter().enumerate().take(10) {
            assert_eq!(*slot, Some(index % 2 == 0));
        }
        assert!(slots[10..].iter().all(Option::is_none));
    }

    #[test]
    fn strict_gate_refuses_incomplete_page() {
        let mut controller = FlowController::new(catalog(52));
        for id in 1..=9u32 {
            controller.set_answer(QuestionId::new(id), true).unwrap();
        }

        assert_eq!(
            controller.go_next(),
            Err(FlowError::PageIncomplete {
                page: 0,
                unanswered: vec![QuestionId::new(10)],
            })
        );
        assert_eq!(controller.current_step(), 0);
    }

    #[test]
    fn permissive_gate_advances_incomplete_page() {
        let mut controller = permissive(52);

        assert_eq!(controller.go_next(), Ok(1));
        assert_eq!(controller.answers().answered_count(), 0);
    }

    #[test]
    fn go_prev_at_start_stays_put() {
        let mut controller = FlowController::new(catalog(52));
        assert_eq!(controller.go_prev(), 0);
        assert_eq!(controller.go_prev(), 0);
    }

    #[test]
    fn go_next_clamps_at_info_stage() {
        let mut controller = permissive(5);
        assert_eq!(controller.go_next(), Ok(1));
        assert_eq!(controller.go_next(), Ok(1));
        assert!(controller.is_info_stage());
    }

    #[test]
    fn strict_next_on_info_stage_is_noop() {
        let mut controller = FlowController::new(catalog(3));
        answer_page(&mut controller, false);
        controller.go_next().unwrap();

        assert_eq!(controller.go_next(), Ok(1));
        assert!(controller.is_info_stage());
    }

    #[test]
    fn go_prev_from_info_stage() {
        let mut controller = permissive(25);
        for _ in 0..3 {
            controller.go_next().unwrap();
        }
        assert!(controller.is_info_stage());

        assert_eq!(controller.go_prev(), 2);
        assert_eq!(controller.current_page_questions().len(), 5);
    }

    #[test]
    fn answers_on_other_pages_are_allowed() {
        let mut controller = FlowController::new(catalog(30));
        controller.set_answer(QuestionId::new(25), true).unwrap();

        assert_eq!(controller.current_step(), 0);
        assert_eq!(controller.answer(QuestionId::new(25)), Ok(Some(true)));
        assert_eq!(controller.page_of(QuestionId::new(25)), Some(2));
    }

    #[test]
    fn re_answer_overwrites() {
        let mut controller = FlowController::new(catalog(10));
        let id = QuestionId::new(4);
        controller.set_answer(id, true).unwrap();
        controller.set_answer(id, false).unwrap();

        assert_eq!(controller.answer(id), Ok(Some(false)));
        assert_eq!(controller.progress(), (1, 10));
    }

    #[test]
    fn unknown_question_is_rejected() {
        let mut controller = FlowController::new(catalog(10));
        let before = controller.answers().clone();

        assert_eq!(
            controller.set_answer(QuestionId::new(11), true),
            Err(FlowError::InvalidQuestionId(QuestionId::new(11)))
        );
        assert_eq!(
            controller.set_answer(QuestionId::new(0), true),
            Err(FlowError::InvalidQuestionId(QuestionId::new(0)))
        );
        assert_eq!(controller.answers(), &before);
        assert!(controller.answer(QuestionId::new(11)).is_err());
        assert_eq!(controller.page_of(QuestionId::new(11)), None);
    }

    #[test]
    fn unanswered_on_page_lists_missing_ids() {
        let mut controller = FlowController::new(catalog(10));
        controller.set_answer(QuestionId::new(1), true).unwrap();
        controller.set_answer(QuestionId::new(3), false).unwrap();

        let missing = controller.unanswered_on_page();
        assert_eq!(missing.len(), 8);
        assert_eq!(missing[0], QuestionId::new(2));
        assert!(!missing.contains(&QuestionId::new(3)));
    }

    #[test]
    fn info_fields_by_name() {
        let mut controller = FlowController::new(catalog(1));
        controller.set_info_field_named("School", "Hillcrest").unwrap();

        assert_eq!(controller.info().school(), "Hillcrest");
        assert_eq!(
            controller.set_info_field_named("email", "a@b.c"),
            Err(FlowError::InvalidField("email".to_string()))
        );
        assert_eq!(controller.info().name(), "");
    }

    #[test]
    fn premature_submit_is_rejected() {
        let controller = FlowController::new(catalog(12));
        assert_eq!(
            controller.submit(),
            Err(FlowError::PrematureSubmit {
                step: 0,
                total_pages: 2,
            })
        );
    }

    #[test]
    fn strict_submit_requires_info() {
        let mut controller = FlowController::new(catalog(2));
        answer_page(&mut controller, true);
        controller.go_next().unwrap();
        controller.set_info_field(InfoField::Name, "Alice");

        assert_eq!(
            controller.submit(),
            Err(FlowError::InfoIncomplete {
                missing: vec![InfoField::Age, InfoField::School, InfoField::Grade],
            })
        );
    }

    #[test]
    fn permissive_submit_ignores_blank_info() {
        let mut controller = permissive(2);
        controller.go_next().unwrap();

        let completion = controller.submit().unwrap();
        assert_eq!(completion.info, InfoRecord::new());
        assert_eq!(completion.answers.answered_count(), 0);
    }

    #[test]
    fn submit_carries_state_without_mutating() {
        let mut controller = FlowController::new(catalog(3));
        answer_page(&mut controller, true);
        controller.set_answer(QuestionId::new(2), false).unwrap();
        controller.go_next().unwrap();
        for (field, value) in [
            (InfoField::Name, "Alice"),
            (InfoField::Age, "14"),
            (InfoField::School, "Riverside"),
            (InfoField::Grade, "8"),
        ] {
            controller.set_info_field(field, value);
        }

        let completion = controller.submit().unwrap();
        assert_eq!(
            completion.answers.as_slice(),
            &[Some(true), Some(false), Some(true)]
        );
        assert_eq!(completion.info.name(), "Alice");
        assert_eq!(completion.info.age(), "14");
        assert_eq!(completion.info.school(), "Riverside");
        assert_eq!(completion.info.grade(), "8");

        assert!(controller.is_info_stage());
        assert_eq!(controller.answers(), &completion.answers);
        assert_eq!(controller.info(), &completion.info);
    }

    #[test]
    fn custom_page_size() {
        let controller = FlowController::with_config(
            catalog(7),
            FlowConfig::new().with_page_size(NonZeroUsize::new(3).unwrap()),
        );

        assert_eq!(controller.total_pages(), 3);
        assert_eq!(controller.page(2).map(|page| page.len()), Some(1));
    }

    #[test]
    fn shared_catalog() {
        let shared = Arc::new(catalog(4));
        let first = FlowController::new(Arc::clone(&shared));
        let second = FlowController::new(shared);

        assert_eq!(first.catalog(), second.catalog());
    }
}
