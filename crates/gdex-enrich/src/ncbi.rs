//! NCBI E-utilities client (gene esummary).
//!
//! Endpoint: https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esummary.fcgi
//! Used as the second, independent alias source.

use serde_json::Value;
use tracing::{debug, instrument};

use gdex_common::Result;

const EUTILS_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

pub struct NcbiClient {
    client: reqwest::Client,
    base_url: String,
}

impl NcbiClient {
    pub fn new() -> Self {
        Self::with_base_url(EUTILS_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Aliases for an Entrez gene id from the esummary `otheraliases` field.
    /// An empty list is a valid answer (gene has no extra aliases).
    #[instrument(skip(self))]
    pub async fn fetch_aliases(&self, entrez_id: &str) -> Result<Vec<String>> {
        let params = [
            ("db", "gene"),
            ("id", entrez_id),
            ("retmode", "json"),
        ];

        let resp = self.client
            .get(format!("{}/esummary.fcgi", self.base_url))
            .query(&params)
            .send()
            .await?;
        if !resp.status().is_success() {
            debug!(entrez_id, status = %resp.status(), "esummary returned non-success");
            return Ok(Vec::new());
        }
        let body: Value = resp.json().await?;
        Ok(parse_other_aliases(&body, entrez_id))
    }
}

impl Default for NcbiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Split the comma-separated `otheraliases` field of an esummary response.
fn parse_other_aliases(body: &Value, entrez_id: &str) -> Vec<String> {
    body["result"][entrez_id]["otheraliases"]
        .as_str()
        .unwrap_or("")
        .split(',')
        .map(str::trim)
        .filter(|alias| !alias.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_other_aliases() {
        let body = json!({
            "result": {
                "uids": ["8542"],
                "8542": { "name": "APOL1", "otheraliases": "APO-L, APOL, FSGS4" }
            }
        });
        assert_eq!(parse_other_aliases(&body, "8542"), vec!["APO-L", "APOL", "FSGS4"]);
    }

    #[test]
    fn test_missing_field_is_empty() {
        let body = json!({ "result": { "8542": { "name": "APOL1" } } });
        assert!(parse_other_aliases(&body, "8542").is_empty());
    }
}
