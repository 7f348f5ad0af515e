pub mod error;
pub mod field;
pub mod labels;
pub mod matching;
pub mod pattern;
pub mod multiplicity;
pub mod connectivity;
pub mod report;
pub mod config;
pub mod contraction;

pub use config::{Ignore, Mode, Options};
pub use contraction::{evaluate, evaluate_str, evaluate_with};
pub use error::{Result, WickError};
pub use field::{Field, Named};
pub use report::ContractionReport;
