use std::collections::BTreeSet;

use serde::Serialize;

use super::IssueLabel;

/// A single natural-language requirement statement to be quality-checked.
///
/// The identifier is an opaque passthrough value; it plays no part in the
/// analysis and defaults to the empty string when the source dataset has no
/// `id` column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Requirement {
    /// Opaque identifier, passed through to the report unchanged.
    pub id: String,
    /// The requirement statement itself.
    pub text: String,
}

impl Requirement {
    /// Construct a requirement from its identifier and text.
    #[must_use]
    pub const fn new(id: String, text: String) -> Self {
        Self { id, text }
    }
}

/// The outcome of analysing one requirement.
///
/// The label set is exactly what the detector computed from the text; nothing
/// is carried over between rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// Identifier of the analysed requirement.
    pub id: String,
    /// Original requirement text, case preserved.
    pub text: String,
    /// Defect categories found in the text, in alphabetical order.
    pub issues: BTreeSet<IssueLabel>,
    /// At most one corrective suggestion, chosen by rule priority.
    pub suggestion: Option<String>,
}

impl Analysis {
    /// The issue labels joined for tabular display, e.g. `"AND_OR, VAGUE_TERM"`.
    ///
    /// Returns an empty string when no issue was detected.
    #[must_use]
    pub fn issues_display(&self) -> String {
        self.issues
            .iter()
            .map(|label| label.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
