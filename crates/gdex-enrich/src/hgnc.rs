//! HGNC REST API client (genenames.org).
//!
//! Endpoints used:
//!   fetch/symbol/{symbol}
//!   fetch/hgnc_id/HGNC:{id}

use serde_json::Value;
use tracing::{debug, instrument};

use gdex_common::{parse_hgnc_id, Result};

const HGNC_BASE_URL: &str = "https://rest.genenames.org";

/// The slice of an HGNC record the enricher consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HgncRecord {
    pub hgnc_id: u32,
    pub symbol: String,
    pub name: String,
    /// alias_symbol + prev_symbol + alias_name, in response order.
    pub aliases: Vec<String>,
    pub entrez_id: Option<String>,
    pub ensembl_gene_id: Option<String>,
}

pub struct HgncClient {
    client: reqwest::Client,
    base_url: String,
}

impl HgncClient {
    pub fn new() -> Self {
        Self::with_base_url(HGNC_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch by gene symbol; `None` when HGNC has no record for it.
    #[instrument(skip(self))]
    pub async fn fetch_by_symbol(&self, symbol: &str) -> Result<Option<HgncRecord>> {
        self.fetch(&format!("{}/fetch/symbol/{symbol}", self.base_url)).await
    }

    /// Fetch by numeric HGNC id.
    #[instrument(skip(self))]
    pub async fn fetch_by_id(&self, hgnc_id: u32) -> Result<Option<HgncRecord>> {
        self.fetch(&format!("{}/fetch/hgnc_id/HGNC:{hgnc_id}", self.base_url)).await
    }

    async fn fetch(&self, url: &str) -> Result<Option<HgncRecord>> {
        let resp = self.client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        if !resp.status().is_success() {
            debug!(url, status = %resp.status(), "HGNC fetch returned non-success");
            return Ok(None);
        }
        let body: Value = resp.json().await?;
        Ok(parse_hgnc_doc(&body))
    }
}

impl Default for HgncClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse the first doc of an HGNC fetch response.
fn parse_hgnc_doc(body: &Value) -> Option<HgncRecord> {
    let doc = body["response"]["docs"].as_array()?.first()?;

    let hgnc_id = doc["hgnc_id"].as_str().and_then(parse_hgnc_id)?;
    let symbol = doc["symbol"].as_str()?.to_string();
    if symbol.is_empty() {
        return None;
    }

    let mut aliases = Vec::new();
    for field in ["alias_symbol", "prev_symbol", "alias_name"] {
        match &doc[field] {
            Value::Array(values) => {
                aliases.extend(values.iter().filter_map(|v| v.as_str()).map(String::from));
            }
            Value::String(s) if !s.is_empty() => aliases.push(s.clone()),
            _ => {}
        }
    }

    Some(HgncRecord {
        hgnc_id,
        symbol,
        name: doc["name"].as_str().unwrap_or("").to_string(),
        aliases,
        entrez_id: doc["entrez_id"].as_str().map(String::from),
        ensembl_gene_id: doc["ensembl_gene_id"].as_str().map(String::from),
    })
}
