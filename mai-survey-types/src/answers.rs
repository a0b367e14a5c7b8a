use serde::Serialize;

use crate::{FlowError, QuestionId};

/// Per-item answer storage, one slot per catalog item.
///
/// Slot `id - 1` holds the answer to question `id`: `None` while unanswered,
/// `Some(bool)` once answered. The length is fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnswerVector {
    slots: Vec<Option<bool>>,
}

impl AnswerVector {
    /// Create a vector of `len` unanswered slots.
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    /// Record an answer, returning the value it replaced.
    ///
    /// Only the slot for `id` changes. Re-answering overwrites.
    pub fn set(&mut self, id: QuestionId, value: bool) -> Result<Option<bool>, FlowError> {
        let slot = id
            .index()
            .and_then(|index| self.slots.get_mut(index))
            .ok_or(FlowError::InvalidQuestionId(id))?;
        Ok(slot.replace(value))
    }

    /// Get the answer for `id`, `None` if unanswered or out of range.
    pub fn get(&self, id: QuestionId) -> Option<bool> {
        self.slots.get(id.index()?).copied().flatten()
    }

    /// Check if the question has been answered.
    pub fn is_answered(&self, id: QuestionId) -> bool {
        self.get(id).is_some()
    }

    /// Get the raw slots in id order.
    pub fn as_slice(&self) -> &[Option<bool>] {
        &self.slots
    }

    /// Get an iterator over `(id, slot)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, Option<bool>)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .map(|(index, slot)| (QuestionId::from_index(index), *slot))
    }

    /// Ids of all unanswered questions, in order.
    pub fn unanswered(&self) -> impl Iterator<Item = QuestionId> + '_ {
        self.iter()
            .filter(|(_, slot)| slot.is_none())
            .map(|(id, _)| id)
    }

    /// Number of answered slots.
    pub fn answered_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Check if every slot is answered.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Get the number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if there are no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unanswered() {
        let answers = AnswerVector::new(4);
        assert_eq!(answers.len(), 4);
        assert_eq!(answers.answered_count(), 0);
        assert!(!answers.is_complete());
        assert_eq!(answers.unanswered().count(), 4);
    }

    #[test]
    fn set_overwrites_single_slot() {
        let mut answers = AnswerVector::new(3);

        assert_eq!(answers.set(QuestionId::new(2), true).unwrap(), None);
        assert_eq!(answers.set(QuestionId::new(2), false).unwrap(), Some(true));

        assert_eq!(answers.as_slice(), &[None, Some(false), None]);
        assert_eq!(answers.len(), 3);
    }

    #[test]
    fn set_out_of_range_is_rejected() {
        let mut answers = AnswerVector::new(3);

        assert_eq!(
            answers.set(QuestionId::new(0), true),
            Err(FlowError::InvalidQuestionId(QuestionId::new(0)))
        );
        assert_eq!(
            answers.set(QuestionId::new(4), true),
            Err(FlowError::InvalidQuestionId(QuestionId::new(4)))
        );
        assert_eq!(answers, AnswerVector::new(3));
    }

    #[test]
    fn serializes_as_array_with_nulls() {
        let mut answers = AnswerVector::new(3);
        answers.set(QuestionId::new(1), true).unwrap();
        answers.set(QuestionId::new(3), false).unwrap();

        let json = serde_json::to_string(&answers).unwrap();
        assert_eq!(json, "[true,null,false]");
    }
}
