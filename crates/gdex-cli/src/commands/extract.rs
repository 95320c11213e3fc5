//! `gdex extract`: article to gene/disease CSV.

use std::path::Path;

use gdex_enrich::{EnsemblClient, HgncClient, LiveEnricher, NcbiClient};
use gdex_ingestion::{ArticleId, EuropePmcClient};
use gdex_ner::{DictionaryNer, DiseaseNer, GenericTermFilter, PrecomputedNer, SymbolSet};

use crate::config::Config;
use crate::pipeline::{run_extract, ExtractOptions};
use crate::report;

pub async fn run(
    input: &str,
    output: &Path,
    config_path: Option<&Path>,
    keep_all: bool,
) -> anyhow::Result<()> {
    let config = Config::load(config_path)?;
    let id: ArticleId = input.parse()?;

    let symbols = match &config.scanner.symbols_file {
        Some(path) => SymbolSet::from_file(path)?,
        None => SymbolSet::embedded(),
    };

    let ner: Box<dyn DiseaseNer> = match &config.ner.precomputed_file {
        Some(path) => Box::new(PrecomputedNer::from_file(path)?),
        None => match &config.ner.terms_file {
            Some(path) => Box::new(DictionaryNer::with_extra_terms(path)?),
            None => Box::new(DictionaryNer::embedded()),
        },
    };

    let source = EuropePmcClient::with_base_url(&config.sources.europepmc_url);
    let enricher = LiveEnricher::from_clients(
        HgncClient::with_base_url(&config.sources.hgnc_url),
        NcbiClient::with_base_url(&config.sources.eutils_url),
        EnsemblClient::with_base_urls(
            &config.sources.ensembl_grch38_url,
            &config.sources.ensembl_grch37_url,
        ),
    );

    let opts = ExtractOptions {
        symbols,
        window: config.scanner.window,
        keep_all,
        generic_filter: config.ner.generic_filter.then(GenericTermFilter::new),
    };

    let outcome = run_extract(&source, ner.as_ref(), &enricher, &id, &opts).await?;
    report::write_csv(&outcome, output)?;
    report::print_summary(&outcome, output);
    Ok(())
}
