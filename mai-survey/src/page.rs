use mai_survey_types::{Question, QuestionId};

/// Number of pages needed for `len` questions, `ceil(len / page_size)`.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size)
}

/// One contiguous chunk of the catalog, shown together.
///
/// Page `k` covers ids `k * page_size + 1 ..= min((k + 1) * page_size, N)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a> {
    /// 0-based page number.
    pub index: usize,

    /// The page's questions, in catalog order. Never empty.
    pub questions: &'a [Question],
}

impl Page<'_> {
    /// Id of the first question on the page.
    pub fn first_id(&self) -> QuestionId {
        self.questions
            .first()
            .map_or(QuestionId::new(0), Question::id)
    }

    /// Id of the last question on the page.
    pub fn last_id(&self) -> QuestionId {
        self.questions
            .last()
            .map_or(QuestionId::new(0), Question::id)
    }

    /// Check if the page holds the given id.
    pub fn contains(&self, id: QuestionId) -> bool {
        self.first_id() <= id && id <= self.last_id()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
