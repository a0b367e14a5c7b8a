use serde::Serialize;

use crate::{AnswerVector, InfoRecord};

/// The one-shot handoff from a finished survey to the results stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Completion {
    /// Final answer vector, one slot per catalog item.
    pub answers: AnswerVector,

    /// Identifying information as last edited.
    pub info: InfoRecord,
}

impl Completion {
    /// Render the payload as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
