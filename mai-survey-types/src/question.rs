use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable, 1-based identifier of a catalog item.
///
/// Ids are dense: a catalog of `N` items uses exactly `1..=N`, so the
/// answer slot for an id lives at `id - 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(u32);

impl QuestionId {
    /// Create an id from its 1-based number.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// The id for the item stored at a 0-based catalog position.
    pub fn from_index(index: usize) -> Self {
        Self(index as u32 + 1)
    }

    /// Get the 1-based number.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// The 0-based slot this id maps to, or `None` for the invalid id `0`.
    pub fn index(self) -> Option<usize> {
        (self.0 as usize).checked_sub(1)
    }
}

impl From<u32> for QuestionId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single true/false statement in the inventory.
///
/// Questions are read-only for the lifetime of a survey session. The short
/// prompt fits a list row, the long prompt is the full statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Stable identifier, also the key into the answer vector.
    id: QuestionId,

    /// Compact text for narrow layouts.
    prompt_short: String,

    /// Full statement shown to the respondent.
    prompt_long: String,
}

impl Question {
    /// Create a new question.
    pub fn new(
        id: impl Into<QuestionId>,
        prompt_short: impl Into<String>,
        prompt_long: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            prompt_short: prompt_short.into(),
            prompt_long: prompt_long.into(),
        }
    }

    /// Get the question id.
    pub fn id(&self) -> QuestionId {
        self.id
    }

    /// Get the short prompt.
    pub fn prompt_short(&self) -> &str {
        &self.prompt_short
    }

    /// Get the full prompt.
    pub fn prompt_long(&self) -> &str {
        &self.prompt_long
    }
}
