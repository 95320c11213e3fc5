//! The enrichment reducer.
//!
//! Builds one `GeneRecord` per resolved symbol by reconciling HGNC, NCBI,
//! and Ensembl answers under fixed rules: aliases are a case-insensitive
//! union (canonical symbol removed), scalar fields take the first non-empty
//! answer in a fixed source order. A fresh record is built on every call,
//! so enriching the same symbol twice in a run yields identical sets.

use async_trait::async_trait;
use tracing::{debug, instrument, warn};

use crate::ensembl::{Assembly, EnsemblClient};
use crate::hgnc::{HgncClient, HgncRecord};
use crate::ncbi::NcbiClient;
use gdex_common::{GdexError, GeneRecord, Result};

/// Resolves a gene symbol into an enriched record.
///
/// `hgnc_hint` is an id given inline in the article text
/// ("SYMBOL (HGNC:nnn)") and wins over symbol-based lookup.
#[async_trait]
pub trait GeneEnricher: Send + Sync {
    async fn enrich(&self, symbol: &str, hgnc_hint: Option<u32>) -> Result<GeneRecord>;
}

/// Enricher backed by the live HGNC, NCBI, and Ensembl services.
pub struct LiveEnricher {
    hgnc: HgncClient,
    ncbi: NcbiClient,
    ensembl: EnsemblClient,
}

impl LiveEnricher {
    pub fn new() -> Self {
        Self {
            hgnc: HgncClient::new(),
            ncbi: NcbiClient::new(),
            ensembl: EnsemblClient::new(),
        }
    }

    pub fn from_clients(hgnc: HgncClient, ncbi: NcbiClient, ensembl: EnsemblClient) -> Self {
        Self { hgnc, ncbi, ensembl }
    }

    async fn resolve(&self, symbol: &str, hint: Option<u32>) -> Result<Option<HgncRecord>> {
        if let Some(id) = hint {
            if let Some(record) = self.hgnc.fetch_by_id(id).await? {
                return Ok(Some(record));
            }
            warn!(symbol, hgnc_id = id, "inline HGNC id did not resolve, falling back to symbol");
        }
        self.hgnc.fetch_by_symbol(symbol).await
    }

    /// First-non-empty-wins per assembly: stable-id lookup, then symbol.
    async fn coordinates(&self, hgnc: &HgncRecord, assembly: Assembly) -> Option<String> {
        if let Some(gene_id) = &hgnc.ensembl_gene_id {
            match self.ensembl.coordinates_by_id(gene_id, assembly).await {
                Ok(Some(region)) => return Some(region),
                Ok(None) => {}
                Err(err) => {
                    warn!(%err, gene_id, assembly = assembly.as_str(), "Ensembl id lookup failed");
                }
            }
        }
        match self.ensembl.coordinates_by_symbol(&hgnc.symbol, assembly).await {
            Ok(region) => region,
            Err(err) => {
                warn!(%err, symbol = %hgnc.symbol, assembly = assembly.as_str(), "Ensembl symbol lookup failed");
                None
            }
        }
    }
}

impl Default for LiveEnricher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GeneEnricher for LiveEnricher {
    #[instrument(skip(self))]
    async fn enrich(&self, symbol: &str, hgnc_hint: Option<u32>) -> Result<GeneRecord> {
        let Some(hgnc) = self.resolve(symbol, hgnc_hint).await? else {
            return Err(GdexError::Lookup(symbol.to_string()));
        };
        debug!(symbol = %hgnc.symbol, hgnc_id = hgnc.hgnc_id, "resolved gene");

        let mut record = GeneRecord::new(hgnc.hgnc_id, hgnc.symbol.clone(), hgnc.name.clone());
        for alias in &hgnc.aliases {
            record.add_alias(alias);
        }

        // second alias source; an empty or failing answer is partial data,
        // not a reason to drop the gene
        if let Some(entrez_id) = &hgnc.entrez_id {
            match self.ncbi.fetch_aliases(entrez_id).await {
                Ok(aliases) => {
                    for alias in &aliases {
                        record.add_alias(alias);
                    }
                }
                Err(err) => warn!(%err, symbol = %record.symbol, "NCBI alias lookup failed"),
            }
        }

        record.coord_hg38 = self.coordinates(&hgnc, Assembly::Hg38).await;
        record.coord_hg19 = self.coordinates(&hgnc, Assembly::Hg19).await;
        if record.coord_hg38.is_none() && record.coord_hg19.is_none() {
            warn!(symbol = %record.symbol, "no genomic coordinates for either assembly");
        }

        Ok(record)
    }
}
