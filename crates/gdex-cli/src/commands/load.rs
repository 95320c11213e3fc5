//! `gdex load`: extraction CSV to normalized SQLite database.

use std::path::Path;

use anyhow::Context;

pub fn run(input: &Path, output: &Path) -> anyhow::Result<()> {
    let stats = gdex_db::load_csv(input, output)
        .with_context(|| format!("loading {} into {}", input.display(), output.display()))?;
    println!(
        "{} gene(s), {} alias(es), {} disease link(s) loaded into {}",
        stats.genes,
        stats.aliases,
        stats.disease_links,
        output.display()
    );
    Ok(())
}
