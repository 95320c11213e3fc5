//! gdex-common — Shared types and errors used across all gdex crates.

pub mod error;
pub mod mention;
pub mod record;

// Re-export commonly used types
pub use error::{GdexError, Result};
pub use mention::{DiseaseMention, GeneMention, Span};
pub use record::{parse_hgnc_id, GeneRecord, GeneRecordRow};
