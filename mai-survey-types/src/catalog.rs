use serde::Serialize;

use crate::{Question, QuestionId};

/// Error type for catalog construction.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog has no questions")]
    Empty,

    #[error("Question at position {position} has id {found}, expected {expected}")]
    NonDenseId {
        position: usize,
        expected: QuestionId,
        found: QuestionId,
    },

    #[error("Could not parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The fixed, ordered list of survey items.
///
/// A catalog is never empty and its ids run densely from `1` to `len()` in
/// order, so position and id are interchangeable (`position == id - 1`).
/// Both properties are checked once in [`Catalog::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    questions: Vec<Question>,
}

impl Catalog {
    /// Create a catalog, checking that it is non-empty and densely numbered.
    pub fn new(questions: Vec<Question>) -> Result<Self, CatalogError> {
        if questions.is_empty() {
            return Err(CatalogError::Empty);
        }

        for (position, question) in questions.iter().enumerate() {
            let expected = QuestionId::from_index(position);
            if question.id() != expected {
                return Err(CatalogError::NonDenseId {
                    position,
                    expected,
                    found: question.id(),
                });
            }
        }

        Ok(Self { questions })
    }

    /// Parse a catalog from a JSON array of questions.
    ///
    /// # Example
    /// ```
    /// use mai_survey_types::{Catalog, QuestionId};
    ///
    /// let catalog = Catalog::from_json(
    ///     r#"[{"id": 1, "prompt_short": "Goals", "prompt_long": "I check my goals."}]"#,
    /// )
    /// .unwrap();
    /// assert_eq!(catalog.len(), 1);
    /// assert!(catalog.get(QuestionId::new(1)).is_some());
    /// ```
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let questions: Vec<Question> = serde_json::from_str(json)?;
        Self::new(questions)
    }

    /// Look up a question by id.
    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.questions
            .get(id.index()?)
            .filter(|question| question.id() == id)
    }

    /// Check whether the id belongs to this catalog.
    pub fn contains(&self, id: QuestionId) -> bool {
        self.get(id).is_some()
    }

    /// Get all questions in order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Get an iterator over the questions in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    /// Get the number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always `false`; kept for parity with `len`.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}
