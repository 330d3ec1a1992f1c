//! The analysis core: issue detection and suggestion generation.
//!
//! Both passes are pure functions of the requirement text; rows are
//! independent, so the batch entry point fans out with rayon while preserving
//! row order.

use std::collections::BTreeSet;

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

mod detector;
mod lexicon;
mod suggestion;

pub use lexicon::Lexicon;

use crate::domain::{Analysis, IssueLabel, Requirement};

/// Analyses requirement statements against the fixed French rule set.
///
/// Construction compiles the lexicon patterns once; the analyzer is then
/// shared (it is `Sync`) across the worker threads of a batch.
#[derive(Debug, Default)]
pub struct Analyzer {
    lexicon: Lexicon,
}

impl Analyzer {
    /// Create an analyzer with the built-in French lexicon.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lexicon: Lexicon::french(),
        }
    }

    /// The lexicon this analyzer matches against.
    #[must_use]
    pub const fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Detect quality defects in one requirement text.
    ///
    /// Total and case-insensitive; returns a duplicate-free set iterating in
    /// alphabetical label order.
    #[must_use]
    pub fn detect(&self, text: &str) -> BTreeSet<IssueLabel> {
        detector::detect(&self.lexicon, text)
    }

    /// Produce at most one corrective suggestion for a text and its labels.
    ///
    /// Deterministic given `(text, issues)`; returns `None` when no rule
    /// matches.
    #[must_use]
    pub fn suggest(&self, text: &str, issues: &BTreeSet<IssueLabel>) -> Option<String> {
        suggestion::suggest(text, issues)
    }

    /// Run detection and suggestion over a single requirement.
    #[must_use]
    pub fn analyze(&self, requirement: &Requirement) -> Analysis {
        let issues = self.detect(&requirement.text);
        let suggestion = self.suggest(&requirement.text, &issues);
        Analysis {
            id: requirement.id.clone(),
            text: requirement.text.clone(),
            issues,
            suggestion,
        }
    }

    /// Analyze a batch of requirements in parallel.
    ///
    /// Rows are independent; the output preserves input order.
    #[must_use]
    pub fn analyze_all(&self, requirements: &[Requirement]) -> Vec<Analysis> {
        requirements
            .par_iter()
            .map(|requirement| self.analyze(requirement))
            .collect()
    }
}
