//! gdex-enrich — Gene metadata enrichment.
//!
//! Resolves symbols through HGNC, unions aliases from HGNC and NCBI, and
//! pulls genomic coordinates for GRCh38/GRCh37 from Ensembl. Merging is a
//! deterministic reducer (union for sets, first-non-empty-wins for scalars
//! in a fixed source order) so results do not depend on call order.

pub mod ensembl;
pub mod hgnc;
pub mod merge;
pub mod ncbi;

pub use ensembl::{Assembly, EnsemblClient};
pub use hgnc::{HgncClient, HgncRecord};
pub use merge::{GeneEnricher, LiveEnricher};
pub use ncbi::NcbiClient;
