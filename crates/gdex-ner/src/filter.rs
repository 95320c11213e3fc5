//! Generic-term filter for disease-NER output.
//!
//! Upstream NER happily labels descriptive phrases ("autosomal recessive",
//! "short stature") and bare category words ("syndrome") as diseases. This
//! optional filter drops terms that carry no disease identity of their own;
//! disabling it restores raw pass-through of the capability's output.

use tracing::debug;

use gdex_common::DiseaseMention;

/// Qualifiers that never identify a disease by themselves.
const GENERIC_QUALIFIERS: &[&str] = &[
    "single", "system", "single-system", "multi", "multisystem", "multi-system",
    "systemic", "common", "rare", "genetic", "hereditary", "familial", "unknown",
    "autosomal", "dominant", "recessive", "tall", "stature", "short",
];

const CATEGORY_WORDS: &[&str] = &["disease", "syndrome", "disorder"];

#[derive(Debug, Clone, Copy, Default)]
pub struct GenericTermFilter;

impl GenericTermFilter {
    pub fn new() -> Self {
        Self
    }

    /// True when the term is too generic to stand as a disease name.
    pub fn is_generic(&self, term: &str) -> bool {
        let orig = term.trim();
        let lower = orig.to_lowercase();

        // "SHORT syndrome" and friends: an all-uppercase acronym before
        // "syndrome" is a named entity, not a description
        if let Some(prefix) = orig.strip_suffix(" syndrome") {
            let prefix = prefix.trim_matches(|c: char| c.is_whitespace() || matches!(c, ',' | ';' | ':' | '-'));
            if !prefix.is_empty() && prefix.chars().all(|c| c.is_ascii_uppercase()) {
                return false;
            }
        }

        if CATEGORY_WORDS.contains(&lower.as_str()) {
            return true;
        }

        // "hereditary disease", "autosomal dominant disorder": category word
        // preceded only by generic qualifiers
        for category in CATEGORY_WORDS {
            if let Some(prefix) = lower.strip_suffix(category) {
                let prefix = prefix.trim_matches(|c: char| c.is_whitespace() || matches!(c, ',' | ';' | '-'));
                if prefix.is_empty() || split_parts(prefix).all(|p| GENERIC_QUALIFIERS.contains(&p)) {
                    return true;
                }
            }
        }

        // one or two words that are all generic qualifiers
        let parts: Vec<&str> = split_parts(&lower).collect();
        parts.len() <= 2 && parts.iter().all(|p| GENERIC_QUALIFIERS.contains(p))
    }

    /// Drop generic mentions, keeping the rest in order.
    pub fn retain(&self, mentions: Vec<DiseaseMention>) -> Vec<DiseaseMention> {
        mentions
            .into_iter()
            .filter(|m| {
                let generic = self.is_generic(&m.text);
                if generic {
                    debug!(term = %m.text, "dropped generic disease term");
                }
                !generic
            })
            .collect()
    }
}

fn split_parts(term: &str) -> impl Iterator<Item = &str> {
    term.split(|c: char| c.is_whitespace() || c == '-').filter(|p| !p.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_category_words_are_generic() {
        let filter = GenericTermFilter::new();
        assert!(filter.is_generic("disease"));
        assert!(filter.is_generic("Syndrome"));
        assert!(filter.is_generic("disorder"));
    }

    #[test]
    fn test_qualifier_phrases_are_generic() {
        let filter = GenericTermFilter::new();
        assert!(filter.is_generic("autosomal recessive"));
        assert!(filter.is_generic("short stature"));
        assert!(filter.is_generic("single-system"));
        assert!(filter.is_generic("hereditary disease"));
        assert!(filter.is_generic("autosomal dominant disorder"));
    }

    #[test]
    fn test_named_diseases_survive() {
        let filter = GenericTermFilter::new();
        assert!(!filter.is_generic("Alport syndrome"));
        assert!(!filter.is_generic("tubulopathy"));
        assert!(!filter.is_generic("chronic kidney disease"));
    }

    #[test]
    fn test_uppercase_acronym_syndromes_survive() {
        let filter = GenericTermFilter::new();
        assert!(!filter.is_generic("SHORT syndrome"));
        assert!(!filter.is_generic("HDR syndrome"));
    }
}
