//! Domain models for requirement quality analysis.
//!
//! This module contains the core domain types: requirement statements, issue
//! labels, and per-requirement analysis results.

/// Requirement statements and analysis results.
pub mod requirement;
pub use requirement::{Analysis, Requirement};

/// Issue label types and parsing.
pub mod issue;
pub use issue::{IssueLabel, ParseLabelError};
