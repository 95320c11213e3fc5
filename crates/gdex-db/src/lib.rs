//! gdex-db — Relational load of extraction CSVs.
//!
//! Reads the pipeline's CSV output and populates a normalized SQLite
//! database (Gene / Alias / Disease / GeneDisease). The CSV is the sole
//! source of truth: re-loading a gene replaces its row, aliases, and
//! disease links.

pub mod error;
pub mod loader;
pub mod schema;

pub use error::{DbError, Result};
pub use loader::{load_csv, LoadStats};
