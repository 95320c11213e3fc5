//! gdex-ingestion — Article retrieval.
//!
//! - PMID/PMCID identifier parsing
//! - PMID → PMCID resolution and full-text XML download (Europe PMC)
//! - JATS `<body>` plain-text extraction

pub mod article_id;
pub mod body_text;
pub mod sources;

pub use article_id::ArticleId;
pub use body_text::extract_body_text;
pub use sources::europepmc::EuropePmcClient;
pub use sources::ArticleSource;
