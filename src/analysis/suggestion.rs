//! Corrective suggestion rules.
//!
//! The reference behaviour is a sequential overwrite: rules are evaluated in
//! a fixed order and the last matching rule's suggestion survives, except the
//! subjective-terms rule which only fills a gap left by earlier rules. That
//! asymmetry is observable and is kept here as an explicit rule table rather
//! than incidental control flow.

use std::collections::BTreeSet;

use crate::domain::IssueLabel;

/// How a rule's suggestion combines with what earlier rules produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Replace any suggestion accumulated so far.
    Overwrite,
    /// Only apply while no earlier rule has produced a suggestion.
    FillGap,
}

struct Rule {
    mode: Mode,
    applies: fn(&BTreeSet<IssueLabel>) -> bool,
    build: fn(&str) -> String,
}

/// The rule table, in evaluation order.
const RULES: [Rule; 7] = [
    Rule {
        mode: Mode::Overwrite,
        applies: |issues| issues.contains(&IssueLabel::AndOr),
        build: rewrite_and_or,
    },
    Rule {
        mode: Mode::Overwrite,
        applies: |issues| {
            issues.contains(&IssueLabel::VagueTerm) || issues.contains(&IssueLabel::Unmeasurable)
        },
        build: measurable_criteria,
    },
    Rule {
        mode: Mode::FillGap,
        applies: |issues| issues.contains(&IssueLabel::Subjective),
        build: objective_criteria,
    },
    Rule {
        mode: Mode::Overwrite,
        applies: |issues| issues.contains(&IssueLabel::UnitMissing),
        build: add_units,
    },
    Rule {
        mode: Mode::Overwrite,
        applies: |issues| issues.contains(&IssueLabel::UnspecifiedCondition),
        build: specify_condition,
    },
    Rule {
        mode: Mode::Overwrite,
        applies: |issues| issues.contains(&IssueLabel::MultipleRequirements),
        build: split_atomic,
    },
    Rule {
        mode: Mode::Overwrite,
        applies: |issues| issues.contains(&IssueLabel::UnspecificSecurity),
        build: specify_security,
    },
];

/// Produce at most one corrective suggestion for the given text and labels.
///
/// Deterministic in `(text, issues)`; the survivor is the suggestion of the
/// last matching [`Mode::Overwrite`] rule, or a [`Mode::FillGap`] rule's if
/// nothing matched before it.
pub(crate) fn suggest(text: &str, issues: &BTreeSet<IssueLabel>) -> Option<String> {
    let mut suggestion = None;

    for rule in &RULES {
        if (rule.applies)(issues) && (rule.mode == Mode::Overwrite || suggestion.is_none()) {
            suggestion = Some((rule.build)(text));
        }
    }

    suggestion
}

/// Rewrite "et/ou" to the inclusive "et" and note the configuration caveat.
fn rewrite_and_or(text: &str) -> String {
    let mut rewritten = text.replace("et/ou", "et").replace("ET/OU", "et");
    rewritten.push_str(
        " (si l’affichage d’un seul paramètre est requis, le préciser dans la configuration).",
    );
    rewritten
}

/// Generic vague-term message, specialised by the kind of vagueness found.
fn measurable_criteria(text: &str) -> String {
    let lowered = text.to_lowercase();

    let example = if ["rapide", "rapidement", "vite"]
        .iter()
        .any(|term| lowered.contains(term))
    {
        "« Le système doit s’éteindre en moins de 5 s »."
    } else if lowered.contains("léger") {
        "« Le dispositif doit peser moins de 3 kg »."
    } else if lowered.contains("robuste") {
        "« Le dispositif doit résister à une chute de 1 m sans dommage fonctionnel »."
    } else if ["convivial", "lisible", "clair"]
        .iter()
        .any(|term| lowered.contains(term))
    {
        "« Le texte doit être lisible à 50 cm avec un contraste ≥ 4.5:1 »."
    } else {
        "« Remplacer par une valeur numérique et une unité vérifiable »."
    };

    format!("Remplacer les termes vagues par des critères mesurables. Exemple : {example}")
}

fn objective_criteria(_text: &str) -> String {
    "Remplacer les termes subjectifs par des critères objectifs et testables (valeurs \
     numériques, normes, conditions de test)."
        .to_string()
}

fn add_units(_text: &str) -> String {
    "Ajouter les unités manquantes (ex.: V, A, W, °C, ms, kg, etc.).".to_string()
}

fn specify_condition(_text: &str) -> String {
    "Spécifier la condition/événement déclencheur mesurable (ex.: « si la température \
     dépasse 80 °C pendant 5 s, la LED clignote à 2 Hz »)."
        .to_string()
}

fn split_atomic(_text: &str) -> String {
    "Scinder en exigences atomiques (une action/objectif par exigence).".to_string()
}

fn specify_security(_text: &str) -> String {
    "Préciser la mesure de sécurité et/ou la norme (ex.: « chiffrer en AES-256, rotation \
     des clés toutes les 24 h »)."
        .to_string()
}
