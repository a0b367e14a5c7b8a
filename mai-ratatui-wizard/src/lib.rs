//! # mai-ratatui-wizard
//!
//! Ratatui wizard frontend for mai-survey.
//!
//! Shows one page of true/false statements per screen with a progress bar,
//! then the identifying-information form. Advancing is only possible once
//! every statement on the page is answered, and submitting only once every
//! info field is filled in, whatever gate policy the controller runs with.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use mai_inventory::{MaiScoring, catalog};
//! use mai_ratatui_wizard::RatatuiFrontend;
//! use mai_survey::Shell;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut shell = Shell::start(catalog()?, MaiScoring);
//!     let report = shell.run(&RatatuiFrontend::new().with_title("MAI"))?;
//!     println!("{report}");
//!     Ok(())
//! }
//! ```
//!
//! ## Keys
//!
//! - `↑`/`↓` or `k`/`j`: move between statements (or info fields)
//! - `t`/`←`: true, `f`/`→`: false, `Space`: toggle
//! - `Enter`/`PageDown`: next page, or submit on the info form
//! - `PageUp`: previous page (also `Backspace` on question pages)
//! - `Esc`: cancel

mod frontend;

pub use frontend::{RatatuiError, RatatuiFrontend, Theme};
