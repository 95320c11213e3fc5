//! gdex — gene–disease extraction pipeline CLI.
//!
//! Two subcommands cover the whole flow:
//!
//! - `gdex extract`: fetch an article, scan it for gene mentions, associate
//!   nearby disease terms, enrich each gene from HGNC/NCBI/Ensembl, and
//!   write one CSV row per gene.
//! - `gdex load`: load an extraction CSV into a normalized SQLite database.

pub mod commands;
pub mod config;
pub mod pipeline;
pub mod report;

pub use config::Config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Extract gene–disease metadata from open-access articles.
#[derive(Parser, Debug)]
#[command(name = "gdex")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch an article and extract gene–disease records to CSV
    Extract {
        /// PMID or PMCID of the article (e.g. 38790019 or PMC11127317)
        #[arg(short, long)]
        input: String,

        /// Path to the output CSV file
        #[arg(short, long)]
        output: PathBuf,

        /// Path to a gdex.toml config file
        #[arg(long, env = "GDEX_CONFIG")]
        config: Option<PathBuf>,

        /// Emit resolved genes even when no disease was associated
        #[arg(long)]
        keep_all: bool,
    },

    /// Load an extraction CSV into a normalized SQLite database
    Load {
        /// Path to the input CSV file
        #[arg(short, long)]
        input: PathBuf,

        /// Path to the output SQLite database file
        #[arg(short, long)]
        output: PathBuf,
    },
}
