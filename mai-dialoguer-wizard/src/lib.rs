//! # mai-dialoguer-wizard
//!
//! Dialoguer wizard frontend for mai-survey.
//!
//! Statements are asked one after another as True/False selections, a page
//! at a time. After each page a navigation prompt moves forward or back;
//! after the last page the info form is filled in and submitted.
//!
//! ## Example
//!
//! ```rust,ignore
//! use mai_dialoguer_wizard::DialoguerFrontend;
//! use mai_inventory::{MaiScoring, catalog};
//! use mai_survey::Shell;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut shell = Shell::start(catalog()?, MaiScoring);
//!     let report = shell.run(&DialoguerFrontend::new())?;
//!     println!("{report}");
//!     Ok(())
//! }
//! ```

mod frontend;

pub use frontend::{DialoguerError, DialoguerFrontend};
