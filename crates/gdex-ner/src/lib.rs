//! gdex-ner — Mention scanning and disease association.
//!
//! Dictionary-driven gene-symbol scanning (explicit "SYMBOL (HGNC:nnn)" and
//! bare allowlisted forms), a pluggable disease-NER capability, and the
//! positional co-occurrence heuristic linking the two. Everything here is
//! offline and deterministic; network lookups live in gdex-enrich.

pub mod associate;
pub mod disease;
pub mod filter;
pub mod scanner;
pub mod symbols;

pub use associate::{collect_diseases, window_around, DEFAULT_WINDOW};
pub use disease::{DictionaryNer, DiseaseNer, PrecomputedNer};
pub use filter::GenericTermFilter;
pub use scanner::scan;
pub use symbols::SymbolSet;
