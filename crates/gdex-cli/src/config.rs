//! Configuration loading.
//!
//! Reads gdex.toml from the path given on the command line or the
//! GDEX_CONFIG env var; every field has a default so the file is optional.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use gdex_common::{GdexError, Result};
use gdex_enrich::ensembl::{ENSEMBL_GRCH37_URL, ENSEMBL_GRCH38_URL};
use gdex_ner::DEFAULT_WINDOW;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub scanner: ScannerConfig,
    #[serde(default)]
    pub ner: NerConfig,
    #[serde(default)]
    pub sources: SourcesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScannerConfig {
    /// One-symbol-per-line allowlist; the embedded panel when absent.
    pub symbols_file: Option<PathBuf>,
    /// Characters of context searched on each side of a gene mention.
    #[serde(default = "default_window")]
    pub window: usize,
}

fn default_window() -> usize { DEFAULT_WINDOW }

impl Default for ScannerConfig {
    fn default() -> Self {
        Self { symbols_file: None, window: default_window() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NerConfig {
    /// Extra disease terms for the dictionary matcher, one per line.
    pub terms_file: Option<PathBuf>,
    /// Precomputed NER output (JSON [{text,start,end}]) from an external model.
    pub precomputed_file: Option<PathBuf>,
    /// Drop generic terms ("autosomal recessive", bare "syndrome") before
    /// association; false restores raw pass-through.
    #[serde(default = "default_generic_filter")]
    pub generic_filter: bool,
}

fn default_generic_filter() -> bool { true }

impl Default for NerConfig {
    fn default() -> Self {
        Self {
            terms_file: None,
            precomputed_file: None,
            generic_filter: default_generic_filter(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcesConfig {
    #[serde(default = "default_europepmc_url")]
    pub europepmc_url: String,
    #[serde(default = "default_hgnc_url")]
    pub hgnc_url: String,
    #[serde(default = "default_eutils_url")]
    pub eutils_url: String,
    #[serde(default = "default_ensembl_grch38_url")]
    pub ensembl_grch38_url: String,
    #[serde(default = "default_ensembl_grch37_url")]
    pub ensembl_grch37_url: String,
}

fn default_europepmc_url() -> String { "https://www.ebi.ac.uk/europepmc/webservices/rest".to_string() }
fn default_hgnc_url()      -> String { "https://rest.genenames.org".to_string() }
fn default_eutils_url()    -> String { "https://eutils.ncbi.nlm.nih.gov/entrez/eutils".to_string() }
fn default_ensembl_grch38_url() -> String { ENSEMBL_GRCH38_URL.to_string() }
fn default_ensembl_grch37_url() -> String { ENSEMBL_GRCH37_URL.to_string() }

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            europepmc_url: default_europepmc_url(),
            hgnc_url: default_hgnc_url(),
            eutils_url: default_eutils_url(),
            ensembl_grch38_url: default_ensembl_grch38_url(),
            ensembl_grch37_url: default_ensembl_grch37_url(),
        }
    }
}

impl Config {
    /// Load from `path`, the GDEX_CONFIG env var, or defaults, in that order.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => Some(p.to_path_buf()),
            None => std::env::var_os("GDEX_CONFIG").map(PathBuf::from),
        };
        match path {
            Some(path) => {
                let content = fs::read_to_string(&path)?;
                toml::from_str(&content)
                    .map_err(|e| GdexError::Config(format!("{}: {e}", path.display())))
            }
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.scanner.window, DEFAULT_WINDOW);
        assert!(config.ner.generic_filter);
        assert!(config.scanner.symbols_file.is_none());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [scanner]
            window = 150

            [ner]
            generic_filter = false
            "#,
        )
        .unwrap();
        assert_eq!(config.scanner.window, 150);
        assert!(!config.ner.generic_filter);
        assert_eq!(config.sources.hgnc_url, "https://rest.genenames.org");
    }

    #[test]
    fn test_bad_toml_is_a_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        use std::io::Write;
        write!(file, "[scanner\nwindow = ").unwrap();
        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, GdexError::Config(_)));
    }
}
