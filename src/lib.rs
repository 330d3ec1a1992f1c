//! Rule-based quality linter for French requirement statements.
//!
//! Each requirement is scanned for common specification defects (vague terms,
//! missing units, compound requirements, unspecified trigger conditions,
//! unspecific security claims) and given at most one corrective suggestion.

pub mod domain;
pub use domain::{Analysis, IssueLabel, Requirement};

/// Issue detection and suggestion generation.
pub mod analysis;
pub use analysis::{Analyzer, Lexicon};

/// Spreadsheet reading and report writing.
pub mod storage;
pub use storage::{Dataset, LoadError, WriteError};
