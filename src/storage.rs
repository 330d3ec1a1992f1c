//! Tabular input and output for the linter.
//!
//! The batch either fully succeeds (report written) or aborts before any
//! output is produced; there is no partial-failure mode.

/// Excel report output.
pub mod report;
/// Excel workbook input.
pub mod workbook;

pub use report::WriteError;
pub use workbook::{Dataset, LoadError};
