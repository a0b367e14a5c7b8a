//! Core types for the mai-survey crate.
//!
//! This crate provides the data a survey session works on:
//! - `Question` and `Catalog` - The fixed, ordered item list with dense ids
//! - `AnswerVector` - One true/false slot per catalog item
//! - `InfoRecord` and `InfoField` - The identifying-information form
//! - `Completion` - The payload handed to the results stage
//! - `FlowError`, `CatalogError` and `SurveyError` - Rejections and outcomes

mod question;
pub use question::{Question, QuestionId};

mod catalog;
pub use catalog::{Catalog, CatalogError};

mod answers;
pub use answers::AnswerVector;

mod info;
pub use info::{InfoField, InfoRecord};

mod completion;
pub use completion::Completion;

mod error;
pub use error::{FlowError, SurveyError};
