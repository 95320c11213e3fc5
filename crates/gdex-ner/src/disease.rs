//! Disease-NER capability.
//!
//! Disease recognition is a black box behind the `DiseaseNer` trait so
//! models can be swapped without touching the scanner or associator. Two
//! implementations ship here: an offline dictionary matcher and an adapter
//! for precomputed output from an external model. Whatever the capability
//! emits passes through to association untouched; see `filter` for the
//! optional generic-term cut.

use std::fs;
use std::path::Path;

use aho_corasick::{AhoCorasick, MatchKind};
use serde::Deserialize;
use tracing::{info, warn};

use gdex_common::{DiseaseMention, GdexError, Result, Span};

/// Recognises disease entities in article text, ordered by start offset.
pub trait DiseaseNer: Send + Sync {
    fn recognize(&self, text: &str) -> Vec<DiseaseMention>;
}

/// Disease terms matched by the embedded dictionary. Kidney-weighted to
/// match the default gene panel, plus common Mendelian phenotypes.
const EMBEDDED_TERMS: &[&str] = &[
    "Alport syndrome", "Bartter syndrome", "Dent disease", "Fabry disease",
    "Gitelman syndrome", "Liddle syndrome", "Lowe syndrome",
    "branchio-oto-renal syndrome", "cardiomyopathy", "chronic kidney disease",
    "cystinosis", "cystinuria", "diabetes insipidus", "end-stage renal disease",
    "focal segmental glomerulosclerosis", "glomerulonephritis", "hematuria",
    "hyperaldosteronism", "hypercalciuria", "hyperkalemia", "hypertension",
    "hypokalemia", "hypomagnesemia", "hypoparathyroidism", "hypophosphatemia",
    "kidney failure", "medullary cystic kidney disease", "metabolic acidosis",
    "metabolic alkalosis", "nail-patella syndrome", "nephrocalcinosis",
    "nephrolithiasis", "nephronophthisis", "nephrotic syndrome",
    "polycystic kidney disease", "proteinuria", "renal cysts and diabetes",
    "renal hypoplasia", "renal tubular acidosis", "thin basement membrane nephropathy",
    "tuberous sclerosis", "tubulointerstitial nephritis", "tubulopathy",
];

/// Aho-Corasick dictionary matcher, longest match wins, case-insensitive.
pub struct DictionaryNer {
    automaton: AhoCorasick,
}

impl DictionaryNer {
    /// The embedded term list (no file I/O).
    pub fn embedded() -> Self {
        Self::build(EMBEDDED_TERMS.iter().map(|t| t.to_string()))
            .expect("embedded disease dictionary must build")
    }

    /// Embedded terms plus extra terms from a one-per-line file.
    pub fn with_extra_terms(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let extra: Vec<String> = content
            .lines()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect();
        info!(count = extra.len(), path = %path.display(), "loaded extra disease terms");
        Self::build(EMBEDDED_TERMS.iter().map(|t| t.to_string()).chain(extra))
    }

    fn build(terms: impl IntoIterator<Item = String>) -> Result<Self> {
        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .ascii_case_insensitive(true)
            .build(terms.into_iter().collect::<Vec<_>>())
            .map_err(|e| GdexError::Config(format!("disease automaton: {e}")))?;
        Ok(Self { automaton })
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

impl DiseaseNer for DictionaryNer {
    fn recognize(&self, text: &str) -> Vec<DiseaseMention> {
        self.automaton
            .find_iter(text)
            .filter(|mat| {
                let before_ok =
                    mat.start() == 0 || !text[..mat.start()].chars().next_back().is_some_and(is_word_char);
                let after_ok =
                    mat.end() == text.len() || !text[mat.end()..].chars().next().is_some_and(is_word_char);
                before_ok && after_ok
            })
            .map(|mat| DiseaseMention {
                text: text[mat.start()..mat.end()].to_string(),
                span: Span::new(mat.start(), mat.end()),
            })
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct RawEntity {
    text: String,
    start: usize,
    end: usize,
}

/// Adapter for NER output computed by an external model over the same body
/// text: a JSON array of `{"text": ..., "start": ..., "end": ...}` objects.
pub struct PrecomputedNer {
    mentions: Vec<DiseaseMention>,
}

impl PrecomputedNer {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let raw: Vec<RawEntity> = serde_json::from_str(&content)?;
        let mut mentions: Vec<DiseaseMention> = raw
            .into_iter()
            .map(|e| DiseaseMention { text: e.text, span: Span::new(e.start, e.end) })
            .collect();
        mentions.sort_by_key(|m| (m.span.start, m.span.end));
        info!(count = mentions.len(), path = %path.display(), "loaded precomputed disease mentions");
        Ok(Self { mentions })
    }
}

impl DiseaseNer for PrecomputedNer {
    fn recognize(&self, text: &str) -> Vec<DiseaseMention> {
        // spans were produced against the same text; drop any that no longer fit
        let (ok, stale): (Vec<_>, Vec<_>) = self
            .mentions
            .iter()
            .cloned()
            .partition(|m| m.span.end <= text.len() && !m.span.is_empty());
        if !stale.is_empty() {
            warn!(count = stale.len(), "dropped precomputed mentions outside the text bounds");
        }
        ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_dictionary_matches_case_insensitively() {
        let ner = DictionaryNer::embedded();
        let found = ner.recognize("Severe Tubulopathy and HYPOMAGNESEMIA were noted.");
        let texts: Vec<&str> = found.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["Tubulopathy", "HYPOMAGNESEMIA"]);
    }

    #[test]
    fn test_longest_match_wins() {
        let ner = DictionaryNer::embedded();
        let found = ner.recognize("focal segmental glomerulosclerosis was confirmed");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text, "focal segmental glomerulosclerosis");
    }

    #[test]
    fn test_word_boundaries_are_respected() {
        let ner = DictionaryNer::embedded();
        assert!(ner.recognize("pseudohematuria is a different token").is_empty());
    }

    #[test]
    fn test_precomputed_mentions_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"text": "tubulopathy", "start": 20, "end": 31}}, {{"text": "late", "start": 90, "end": 94}}]"#
        )
        .unwrap();
        let ner = PrecomputedNer::from_file(file.path()).unwrap();
        let text = "RRAGD variants gave tubulopathy in carriers.";
        let found = ner.recognize(text);
        assert_eq!(found.len(), 1);
        assert_eq!(&text[found[0].span.start..found[0].span.end], "tubulopathy");
    }
}
