//! Issue detection rules.
//!
//! Each rule is evaluated independently against the lowercased text; a
//! requirement may trigger any subset of the labels. Detection is a total
//! function: any input produces a (possibly empty) label set.

use std::collections::BTreeSet;

use crate::domain::IssueLabel;

use super::Lexicon;

/// Detect quality defects in one requirement statement.
///
/// Matching is case-insensitive (the text is lowercased first); the returned
/// set is duplicate-free and iterates in alphabetical label order.
pub(crate) fn detect(lexicon: &Lexicon, text: &str) -> BTreeSet<IssueLabel> {
    let lowered = text.to_lowercase();
    let mut issues = BTreeSet::new();

    if lexicon.and_or().is_match(&lowered) {
        issues.insert(IssueLabel::AndOr);
    }

    if contains_any(&lowered, lexicon.vague_terms()) {
        issues.insert(IssueLabel::VagueTerm);
    }

    if contains_any(&lowered, lexicon.subjective_terms()) {
        issues.insert(IssueLabel::Subjective);
    }

    // A unit-qualified number anywhere in the text suppresses the flag, even
    // for an unrelated bare number. The two patterns are not anchored to the
    // same position; see the text-global suppression test below.
    if lexicon.bare_number().is_match(&lowered) && !lexicon.unit_number().is_match(&lowered) {
        issues.insert(IssueLabel::UnitMissing);
    }

    if contains_any(&lowered, lexicon.condition_phrases()) {
        issues.insert(IssueLabel::UnspecifiedCondition);
    }

    if lexicon.multi_action().is_match(&lowered) {
        issues.insert(IssueLabel::MultipleRequirements);
    }

    if contains_any(&lowered, lexicon.unmeasurable_terms()) {
        issues.insert(IssueLabel::Unmeasurable);
    }

    if lowered.contains(lexicon.security_root())
        && !contains_any(&lowered, lexicon.security_qualifiers())
    {
        issues.insert(IssueLabel::UnspecificSecurity);
    }

    issues
}

fn contains_any(text: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| text.contains(term))
}
