use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A specification-quality defect category assigned by the detector.
///
/// Variants are declared in alphabetical order of their label names so that
/// the derived [`Ord`] matches the presentation order of the report: a
/// `BTreeSet<IssueLabel>` iterates labels exactly as they are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueLabel {
    /// The text couples alternatives with "et/ou".
    AndOr,
    /// More than one imperative is packed into a single statement.
    MultipleRequirements,
    /// The text relies on a subjective or perceptual adjective.
    Subjective,
    /// A bare number appears with no recognised unit anywhere in the text.
    UnitMissing,
    /// The text uses an adverb of speed that cannot be measured.
    Unmeasurable,
    /// A security claim is made without naming a measure or standard.
    UnspecificSecurity,
    /// A triggering condition is left vague ("si nécessaire", ...).
    UnspecifiedCondition,
    /// The text contains a vague or imprecise adjective.
    VagueTerm,
}

impl IssueLabel {
    /// All labels, in alphabetical (= derived ordering) order.
    pub const ALL: [Self; 8] = [
        Self::AndOr,
        Self::MultipleRequirements,
        Self::Subjective,
        Self::UnitMissing,
        Self::Unmeasurable,
        Self::UnspecificSecurity,
        Self::UnspecifiedCondition,
        Self::VagueTerm,
    ];

    /// The label name as it appears in reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AndOr => "AND_OR",
            Self::MultipleRequirements => "MULTIPLE_REQUIREMENTS",
            Self::Subjective => "SUBJECTIVE",
            Self::UnitMissing => "UNIT_MISSING",
            Self::Unmeasurable => "UNMEASURABLE",
            Self::UnspecificSecurity => "UNSPECIFIC_SECURITY",
            Self::UnspecifiedCondition => "UNSPECIFIED_CONDITION",
            Self::VagueTerm => "VAGUE_TERM",
        }
    }
}

impl fmt::Display for IssueLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown label name.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Unknown issue label '{0}'")]
pub struct ParseLabelError(String);

impl FromStr for IssueLabel {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| ParseLabelError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::IssueLabel;

    #[test]
    fn derived_order_matches_alphabetical_label_names() {
        for pair in IssueLabel::ALL.windows(2) {
            assert!(
                pair[0].as_str() < pair[1].as_str(),
                "{} should sort before {}",
                pair[0],
                pair[1]
            );
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn labels_round_trip_through_their_names() {
        for label in IssueLabel::ALL {
            assert_eq!(label.as_str().parse(), Ok(label));
        }
    }

    #[test]
    fn unknown_label_fails_to_parse() {
        assert!("NOT_A_LABEL".parse::<IssueLabel>().is_err());
    }

    #[test]
    fn serde_names_match_report_names() {
        for label in IssueLabel::ALL {
            let json = serde_json::to_string(&label).unwrap();
            assert_eq!(json, format!("\"{}\"", label.as_str()));
        }
    }
}
