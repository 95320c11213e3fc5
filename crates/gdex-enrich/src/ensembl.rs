//! Ensembl REST client for genomic coordinates.
//!
//! Two servers, one per assembly:
//!   GRCh38: https://rest.ensembl.org
//!   GRCh37: https://grch37.rest.ensembl.org
//!
//! Lookups by stable gene id or by symbol; a build with no data yields
//! `None`, never an error.

use serde_json::Value;
use tracing::{debug, instrument};

use gdex_common::Result;

pub const ENSEMBL_GRCH38_URL: &str = "https://rest.ensembl.org";
pub const ENSEMBL_GRCH37_URL: &str = "https://grch37.rest.ensembl.org";

/// Reference assembly build for coordinate lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assembly {
    Hg38,
    Hg19,
}

impl Assembly {
    pub fn as_str(&self) -> &'static str {
        match self {
            Assembly::Hg38 => "hg38",
            Assembly::Hg19 => "hg19",
        }
    }
}

pub struct EnsemblClient {
    client: reqwest::Client,
    base_hg38: String,
    base_hg19: String,
}

impl EnsemblClient {
    pub fn new() -> Self {
        Self::with_base_urls(ENSEMBL_GRCH38_URL, ENSEMBL_GRCH37_URL)
    }

    pub fn with_base_urls(base_hg38: impl Into<String>, base_hg19: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_hg38: base_hg38.into(),
            base_hg19: base_hg19.into(),
        }
    }

    fn base(&self, assembly: Assembly) -> &str {
        match assembly {
            Assembly::Hg38 => &self.base_hg38,
            Assembly::Hg19 => &self.base_hg19,
        }
    }

    /// Coordinates by Ensembl stable gene id, "chr{seq}:{start}-{end}".
    #[instrument(skip(self))]
    pub async fn coordinates_by_id(&self, gene_id: &str, assembly: Assembly) -> Result<Option<String>> {
        let url = format!("{}/lookup/id/{gene_id}", self.base(assembly));
        self.lookup(&url, assembly).await
    }

    /// Coordinates by gene symbol (human), fallback when no stable id is known.
    #[instrument(skip(self))]
    pub async fn coordinates_by_symbol(&self, symbol: &str, assembly: Assembly) -> Result<Option<String>> {
        let url = format!("{}/lookup/symbol/homo_sapiens/{symbol}", self.base(assembly));
        self.lookup(&url, assembly).await
    }

    async fn lookup(&self, url: &str, assembly: Assembly) -> Result<Option<String>> {
        let resp = self.client
            .get(url)
            .query(&[("content-type", "application/json")])
            .send()
            .await?;
        if !resp.status().is_success() {
            debug!(url, assembly = assembly.as_str(), status = %resp.status(), "Ensembl lookup returned non-success");
            return Ok(None);
        }
        let body: Value = resp.json().await?;
        Ok(parse_region(&body))
    }
}

impl Default for EnsemblClient {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_region(body: &Value) -> Option<String> {
    let seq_region = body["seq_region_name"].as_str()?;
    let start = body["start"].as_u64()?;
    let end = body["end"].as_u64()?;
    Some(format!("chr{seq_region}:{start}-{end}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_region() {
        let body = json!({
            "id": "ENSG00000100342",
            "seq_region_name": "22",
            "start": 36253071,
            "end": 36267531,
            "assembly_name": "GRCh38"
        });
        assert_eq!(parse_region(&body).as_deref(), Some("chr22:36253071-36267531"));
    }

    #[test]
    fn test_parse_region_missing_fields() {
        assert!(parse_region(&json!({ "error": "ID not found" })).is_none());
        assert!(parse_region(&json!({ "seq_region_name": "22", "start": 1 })).is_none());
    }
}
