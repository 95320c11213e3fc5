//! Europe PMC REST API client.
//!
//! Endpoints used:
//!   search:      https://www.ebi.ac.uk/europepmc/webservices/rest/search
//!   fullTextXML: https://www.ebi.ac.uk/europepmc/webservices/rest/{pmcid}/fullTextXML

use async_trait::async_trait;
use tracing::{debug, instrument};

use super::ArticleSource;
use crate::article_id::ArticleId;
use crate::body_text::extract_body_text;
use gdex_common::{GdexError, Result};

const EPMC_BASE_URL: &str = "https://www.ebi.ac.uk/europepmc/webservices/rest";

pub struct EuropePmcClient {
    client: reqwest::Client,
    base_url: String,
}

impl EuropePmcClient {
    pub fn new() -> Self {
        Self::with_base_url(EPMC_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Map a PMID to its PMCID via the search endpoint. Articles without a
    /// PMC deposit have no full text to fetch, which is fatal for the run.
    #[instrument(skip(self))]
    async fn resolve_pmcid(&self, pmid: &str) -> Result<String> {
        let params = [
            ("query", format!("EXT_ID:{pmid} AND SRC:MED")),
            ("format", "json".to_string()),
        ];

        let resp: serde_json::Value = self.client
            .get(format!("{}/search", self.base_url))
            .query(&params)
            .send()
            .await?
            .json()
            .await?;

        let first = resp["resultList"]["result"]
            .as_array()
            .and_then(|results| results.first())
            .ok_or_else(|| GdexError::Fetch(format!("no Europe PMC match for PMID {pmid}")))?;

        let pmcid = first["pmcid"]
            .as_str()
            .ok_or_else(|| GdexError::Fetch(format!("no PMCID found for PMID {pmid}")))?;

        debug!(pmcid, "resolved PMID to PMCID");
        Ok(pmcid.to_string())
    }

    #[instrument(skip(self))]
    async fn fetch_full_text_xml(&self, pmcid: &str) -> Result<String> {
        let url = format!("{}/{}/fullTextXML", self.base_url, pmcid);
        let resp = self.client.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(GdexError::Fetch(format!(
                "full text for {pmcid} returned HTTP {}",
                resp.status()
            )));
        }
        let xml = resp.text().await?;
        if xml.trim().is_empty() {
            return Err(GdexError::Fetch(format!("empty full-text response for {pmcid}")));
        }
        Ok(xml)
    }
}

impl Default for EuropePmcClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArticleSource for EuropePmcClient {
    async fn fetch_body_text(&self, id: &ArticleId) -> Result<String> {
        let pmcid = match id {
            ArticleId::Pmcid(pmcid) => pmcid.clone(),
            ArticleId::Pmid(pmid) => self.resolve_pmcid(pmid).await?,
        };
        let xml = self.fetch_full_text_xml(&pmcid).await?;
        extract_body_text(&xml)
    }
}
