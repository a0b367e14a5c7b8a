//! The Metacognitive Awareness Inventory.
//!
//! Fifty-two true/false statements about how a student plans, monitors and
//! evaluates their own learning, and the scoring that turns a completed
//! set of answers into subscale and factor totals.
//!
//! ```rust
//! use mai_inventory::{MaiScoring, catalog};
//! use mai_survey::{InfoField, Shell, TestFrontend};
//!
//! let mut shell = Shell::start(catalog().unwrap(), MaiScoring);
//! let report = shell
//!     .run(
//!         &TestFrontend::new()
//!             .with_all_answers(true)
//!             .with_info(InfoField::Name, "Mina")
//!             .with_info(InfoField::Age, "15")
//!             .with_info(InfoField::School, "Northfield")
//!             .with_info(InfoField::Grade, "9"),
//!     )
//!     .unwrap();
//! assert_eq!(report.total, 52);
//! ```

pub mod items;
pub mod scoring;

pub use items::{ITEM_COUNT, catalog};
pub use scoring::{Factor, FactorScore, MaiScoring, ScoreReport, Subscale, SubscaleScore};
