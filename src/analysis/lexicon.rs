use regex::Regex;

/// The fixed French rule data the detector matches against.
///
/// This bundles the term lists and the compiled patterns so they are built
/// once at process start and shared by every row of the batch. The lists are
/// deliberately not configurable at runtime.
#[derive(Debug)]
pub struct Lexicon {
    vague_terms: &'static [&'static str],
    subjective_terms: &'static [&'static str],
    condition_phrases: &'static [&'static str],
    unmeasurable_terms: &'static [&'static str],
    security_root: &'static str,
    security_qualifiers: &'static [&'static str],
    and_or: Regex,
    unit_number: Regex,
    bare_number: Regex,
    multi_action: Regex,
}

/// Vague or imprecise adjectives and adverbs, matched as substrings.
const VAGUE_TERMS: &[&str] = &[
    "rapide",
    "rapidement",
    "convivial",
    "conviviale",
    "lisible",
    "suffisant",
    "assez grand",
    "agréable",
    "optimal",
    "performant",
    "robuste",
    "léger",
    "sûr",
    "sécurisé",
];

/// Subjective or perceptual adjectives, matched as substrings.
const SUBJECTIVE_TERMS: &[&str] = &[
    "convivial",
    "conviviale",
    "lisible",
    "clair",
    "claire",
    "agréable",
    "intuitif",
    "intuitive",
];

/// Vague conditional phrases that leave the trigger unspecified.
///
/// "quand c’est nécessaire" uses the typographic apostrophe (U+2019), as it
/// appears in real requirement documents.
const CONDITION_PHRASES: &[&str] = &[
    "si un problème survient",
    "quand c’est nécessaire",
    "si nécessaire",
    "au besoin",
];

/// Adverbs of speed that cannot be verified by measurement.
const UNMEASURABLE_TERMS: &[&str] = &["rapidement", "vite"];

/// Root shared by "protéger", "protégé", "protection des ..." claims.
const SECURITY_ROOT: &str = "protég";

/// Terms whose presence qualifies a security claim as specific enough.
const SECURITY_QUALIFIERS: &[&str] = &["comment", "norme", "iso", "aes"];

/// The "et/ou" conjunction, as a whole word, slash optional.
const AND_OR_PATTERN: &str = r"\bet/?ou\b";

/// A number directly followed by a recognised unit token.
const UNIT_NUMBER_PATTERN: &str =
    r"\b\d+(?:[,.]\d+)?\s*(?:v|a|w|°c|ms|s|kg|m|cm|mm|db|kbit/s|hz|khz|mhz|g)\b";

/// Any integer or decimal number (comma or dot separator).
const BARE_NUMBER_PATTERN: &str = r"\b\d+(?:[,.]\d+)?\b";

/// A conjunction token followed, anywhere later, by an action verb.
const MULTI_ACTION_PATTERN: &str =
    r"\b(?:et|,|;)\b.*\b(?:démarrer|initialiser|envoyer|activer|désactiver)\b";

impl Lexicon {
    /// Build the French lexicon, compiling its patterns.
    ///
    /// # Panics
    ///
    /// Panics if one of the hard-coded patterns fails to compile, which would
    /// be a programming error rather than a runtime condition.
    #[must_use]
    pub fn french() -> Self {
        let compile =
            |pattern| Regex::new(pattern).expect("hard-coded pattern must be valid");

        Self {
            vague_terms: VAGUE_TERMS,
            subjective_terms: SUBJECTIVE_TERMS,
            condition_phrases: CONDITION_PHRASES,
            unmeasurable_terms: UNMEASURABLE_TERMS,
            security_root: SECURITY_ROOT,
            security_qualifiers: SECURITY_QUALIFIERS,
            and_or: compile(AND_OR_PATTERN),
            unit_number: compile(UNIT_NUMBER_PATTERN),
            bare_number: compile(BARE_NUMBER_PATTERN),
            multi_action: compile(MULTI_ACTION_PATTERN),
        }
    }

    /// Vague or imprecise terms.
    #[must_use]
    pub const fn vague_terms(&self) -> &'static [&'static str] {
        self.vague_terms
    }

    /// Subjective or perceptual terms.
    #[must_use]
    pub const fn subjective_terms(&self) -> &'static [&'static str] {
        self.subjective_terms
    }

    /// Vague conditional phrases.
    #[must_use]
    pub const fn condition_phrases(&self) -> &'static [&'static str] {
        self.condition_phrases
    }

    /// Unmeasurable adverbs of speed.
    #[must_use]
    pub const fn unmeasurable_terms(&self) -> &'static [&'static str] {
        self.unmeasurable_terms
    }

    /// Root of security-related words.
    #[must_use]
    pub const fn security_root(&self) -> &'static str {
        self.security_root
    }

    /// Terms that make a security claim specific.
    #[must_use]
    pub const fn security_qualifiers(&self) -> &'static [&'static str] {
        self.security_qualifiers
    }

    /// Pattern for the "et/ou" conjunction.
    #[must_use]
    pub const fn and_or(&self) -> &Regex {
        &self.and_or
    }

    /// Pattern for a number with a trailing recognised unit.
    #[must_use]
    pub const fn unit_number(&self) -> &Regex {
        &self.unit_number
    }

    /// Pattern for any bare number.
    #[must_use]
    pub const fn bare_number(&self) -> &Regex {
        &self.bare_number
    }

    /// Pattern for multiple imperatives in one statement.
    #[must_use]
    pub const fn multi_action(&self) -> &Regex {
        &self.multi_action
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::french()
    }
}

#[cfg(test)]
mod tests {
    use super::Lexicon;

    #[test]
    fn patterns_compile() {
        Lexicon::french();
    }

    #[test]
    fn unit_pattern_matches_spaced_and_attached_units() {
        let lexicon = Lexicon::french();
        assert!(lexicon.unit_number().is_match("moins de 3 kg"));
        assert!(lexicon.unit_number().is_match("80 °c"));
        assert!(lexicon.unit_number().is_match("5s"));
        assert!(lexicon.unit_number().is_match("4,5 v"));
        assert!(!lexicon.unit_number().is_match("moins de 10."));
    }

    #[test]
    fn bare_number_pattern_accepts_decimal_separators() {
        let lexicon = Lexicon::french();
        assert!(lexicon.bare_number().is_match("valeur de 10"));
        assert!(lexicon.bare_number().is_match("valeur de 10,5"));
        assert!(lexicon.bare_number().is_match("valeur de 10.5"));
        assert!(!lexicon.bare_number().is_match("aucune valeur"));
    }

    #[test]
    fn and_or_requires_word_boundaries() {
        let lexicon = Lexicon::french();
        assert!(lexicon.and_or().is_match("la température et/ou la pression"));
        assert!(lexicon.and_or().is_match("le débit etou la pression"));
        assert!(!lexicon.and_or().is_match("bretou"));
    }
}
