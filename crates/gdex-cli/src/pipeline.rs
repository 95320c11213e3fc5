//! The extraction pipeline: fetch, scan, recognize, associate, enrich.
//!
//! Runs sequentially; the only suspension points are the network clients.
//! Output order follows first-mention order in the text. A `Fetch` failure
//! aborts the run; a `Lookup` failure skips that gene and is reported in
//! the run summary.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use gdex_common::{GeneMention, GeneRecord, Result};
use gdex_enrich::GeneEnricher;
use gdex_ingestion::{ArticleId, ArticleSource};
use gdex_ner::{collect_diseases, scan, DiseaseNer, GenericTermFilter, SymbolSet};

pub struct ExtractOptions {
    pub symbols: SymbolSet,
    /// Characters of context on each side of a mention.
    pub window: usize,
    /// Emit genes with an empty disease set instead of dropping them.
    pub keep_all: bool,
    pub generic_filter: Option<GenericTermFilter>,
}

/// A gene that was mentioned but could not be enriched.
#[derive(Debug, Clone)]
pub struct SkippedGene {
    pub symbol: String,
    pub reason: String,
}

#[derive(Default)]
pub struct ExtractOutcome {
    /// One record per unique HGNC id, first-mention order.
    pub records: Vec<GeneRecord>,
    pub skipped: Vec<SkippedGene>,
}

pub async fn run_extract(
    source: &dyn ArticleSource,
    ner: &dyn DiseaseNer,
    enricher: &dyn GeneEnricher,
    id: &ArticleId,
    opts: &ExtractOptions,
) -> Result<ExtractOutcome> {
    info!(article = %id, "fetching article text");
    let text = source.fetch_body_text(id).await?;
    debug!(chars = text.len(), "article body retrieved");

    let mentions = scan(&text, &opts.symbols);
    if mentions.is_empty() {
        info!("no gene symbols found in the article");
        return Ok(ExtractOutcome::default());
    }
    info!(mentions = mentions.len(), "gene mentions found");

    let mut entities = ner.recognize(&text);
    if let Some(filter) = &opts.generic_filter {
        entities = filter.retain(entities);
    }
    info!(entities = entities.len(), "disease entities recognised");

    // group mentions per symbol, keeping first-mention order
    let mut order: Vec<String> = Vec::new();
    let mut by_symbol: HashMap<String, Vec<GeneMention>> = HashMap::new();
    for mention in mentions {
        if !by_symbol.contains_key(&mention.symbol) {
            order.push(mention.symbol.clone());
        }
        by_symbol.entry(mention.symbol.clone()).or_default().push(mention);
    }

    let mut outcome = ExtractOutcome::default();
    for symbol in &order {
        let gene_mentions = &by_symbol[symbol];
        let diseases = collect_diseases(gene_mentions, opts.window, text.len(), &entities);
        if diseases.is_empty() && !opts.keep_all {
            debug!(symbol = %symbol, "no nearby disease terms, dropping");
            continue;
        }

        let hint = gene_mentions.iter().find_map(|m| m.hgnc_id);
        match enricher.enrich(symbol, hint).await {
            Ok(record) => {
                // two symbols can resolve to the same HGNC id (alias and
                // canonical form in one article); merge into the first record
                if let Some(existing) = outcome
                    .records
                    .iter_mut()
                    .find(|r| r.hgnc_id == record.hgnc_id)
                {
                    for disease in &diseases {
                        existing.add_disease(disease);
                    }
                    continue;
                }
                let mut record = record;
                for disease in &diseases {
                    record.add_disease(disease);
                }
                outcome.records.push(record);
            }
            Err(err) if err.is_recoverable() => {
                warn!(symbol = %symbol, %err, "skipping gene");
                outcome.skipped.push(SkippedGene {
                    symbol: symbol.clone(),
                    reason: err.to_string(),
                });
            }
            Err(err) => return Err(err),
        }
    }

    Ok(outcome)
}
