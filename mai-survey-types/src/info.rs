use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::FlowError;

/// One of the four identifying-information fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InfoField {
    Name,
    Age,
    School,
    Grade,
}

impl InfoField {
    /// All fields in form order.
    pub const ALL: [InfoField; 4] = [Self::Name, Self::Age, Self::School, Self::Grade];

    /// The field's key, as used by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Age => "age",
            Self::School => "school",
            Self::Grade => "grade",
        }
    }

    /// Label for form rendering.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Age => "Age",
            Self::School => "School",
            Self::Grade => "Grade",
        }
    }
}

impl fmt::Display for InfoField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InfoField {
    type Err = FlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "age" => Ok(Self::Age),
            "school" => Ok(Self::School),
            "grade" => Ok(Self::Grade),
            _ => Err(FlowError::InvalidField(s.to_string())),
        }
    }
}

/// The identifying-information form filled in after the question pages.
///
/// All fields start empty. Values are free text; the form does not
/// interpret `age` or `grade`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InfoRecord {
    name: String,
    age: String,
    school: String,
    grade: String,
}

impl InfoRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a field's value.
    pub fn get(&self, field: InfoField) -> &str {
        match field {
            InfoField::Name => &self.name,
            InfoField::Age => &self.age,
            InfoField::School => &self.school,
            InfoField::Grade => &self.grade,
        }
    }

    /// Replace a field's value, returning the previous one.
    pub fn set(&mut self, field: InfoField, value: impl Into<String>) -> String {
        let slot = match field {
            InfoField::Name => &mut self.name,
            InfoField::Age => &mut self.age,
            InfoField::School => &mut self.school,
            InfoField::Grade => &mut self.grade,
        };
        std::mem::replace(slot, value.into())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> &str {
        &self.age
    }

    pub fn school(&self) -> &str {
        &self.school
    }

    pub fn grade(&self) -> &str {
        &self.grade
    }

    /// Get an iterator over `(field, value)` pairs in form order.
    pub fn iter(&self) -> impl Iterator<Item = (InfoField, &str)> {
        InfoField::ALL.into_iter().map(|field| (field, self.get(field)))
    }

    /// Fields that are empty or whitespace-only.
    pub fn missing(&self) -> Vec<InfoField> {
        self.iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| field)
            .collect()
    }

    /// Check if every field has a non-blank value.
    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }
}
