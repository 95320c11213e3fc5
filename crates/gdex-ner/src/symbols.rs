//! Known gene-symbol allowlist.
//!
//! Bare (non-explicit) mentions are only accepted for symbols in this set,
//! so the set is an explicit input to the scanner rather than process-wide
//! state: callers control the recall/precision trade-off by choosing it.
//! Symbols that double as English words ("REN", "SHE") are matched like any
//! other entry; filtering belongs to whoever curates the list.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use aho_corasick::{AhoCorasick, MatchKind};
use tracing::info;

use gdex_common::{GdexError, Result};

/// Curated default allowlist: HGNC symbols for genes commonly reported in
/// hereditary kidney disease and adjacent Mendelian phenotypes.
const EMBEDDED_SYMBOLS: &[&str] = &[
    "ACE", "AGT", "AGTR1", "APOL1", "AQP2", "ATP6V0A4", "ATP6V1B1", "AVPR2",
    "BSND", "CASR", "CLCN5", "CLCNKA", "CLCNKB", "CLDN16", "CLDN19", "COL4A1",
    "COL4A3", "COL4A4", "COL4A5", "CTNS", "CUBN", "EGF", "EYA1", "FXYD2",
    "GATA3", "GLA", "HERC2", "HNF1B", "INF2", "INVS", "KCNJ1", "KCNJ10",
    "LMX1B", "MUC1", "MYH9", "NPHP1", "NPHP3", "NPHP4", "NPHS1", "NPHS2",
    "OCRL", "PAX2", "PKD1", "PKD2", "PKHD1", "PLCE1", "PODXL", "REN",
    "RRAGD", "SALL1", "SCNN1A", "SCNN1B", "SCNN1G", "SLC12A1", "SLC12A3",
    "SLC34A1", "SLC3A1", "SLC4A1", "SLC7A9", "SMARCAL1", "TRPC6", "TRPM6",
    "TSC1", "TSC2", "TTC21B", "UMOD", "WNK1", "WNK4", "WT1",
];

/// An allowlist of gene symbols with a prebuilt matcher for contextual scans.
pub struct SymbolSet {
    symbols: BTreeSet<String>,
    automaton: AhoCorasick,
}

impl SymbolSet {
    pub fn new(symbols: impl IntoIterator<Item = String>) -> Result<Self> {
        let symbols: BTreeSet<String> = symbols
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        // LeftmostLongest so "COL4A3" beats a hypothetical "COL4" entry
        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(&symbols)
            .map_err(|e| GdexError::Config(format!("symbol automaton: {e}")))?;

        Ok(Self { symbols, automaton })
    }

    /// The embedded curated subset (no file I/O).
    pub fn embedded() -> Self {
        Self::new(EMBEDDED_SYMBOLS.iter().map(|s| s.to_string()))
            .expect("embedded symbol set must build")
    }

    /// Load one symbol per line; blank lines and `#` comments are skipped.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let set = Self::new(
            content
                .lines()
                .map(|line| line.trim().to_string())
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )?;
        info!(count = set.len(), path = %path.display(), "loaded gene symbol allowlist");
        Ok(set)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.symbols.contains(symbol)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub(crate) fn automaton(&self) -> &AhoCorasick {
        &self.automaton
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_embedded_contains_known_kidney_genes() {
        let set = SymbolSet::embedded();
        assert!(set.contains("COL4A3"));
        assert!(set.contains("RRAGD"));
        assert!(!set.contains("col4a3"));
    }

    #[test]
    fn test_from_file_skips_comments_and_blanks() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# panel v2").unwrap();
        writeln!(file, "TP53").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  BRCA1  ").unwrap();
        let set = SymbolSet::from_file(file.path()).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains("BRCA1"));
    }
}
