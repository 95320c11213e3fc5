use thiserror::Error;

#[derive(Debug, Error)]
pub enum GdexError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("XML parse error: {0}")]
    Xml(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Article fetch failed: {0}")]
    Fetch(String),

    #[error("Gene symbol not resolvable: {0}")]
    Lookup(String),

    #[error("Malformed record: {0}")]
    Malformed(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GdexError {
    /// Recoverable failures are skipped per gene; everything else aborts the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GdexError::Lookup(_))
    }
}

pub type Result<T> = std::result::Result<T, GdexError>;
