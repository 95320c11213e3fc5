//! Article source clients.

pub mod europepmc;

use async_trait::async_trait;

use crate::ArticleId;
use gdex_common::Result;

/// Common interface for full-text article providers.
///
/// Implementations return the plain body text of an article, front- and
/// back-matter excluded, so the scanner can run on prose only.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    async fn fetch_body_text(&self, id: &ArticleId) -> Result<String>;
}
