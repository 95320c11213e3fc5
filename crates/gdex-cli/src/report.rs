//! CSV assembly and the end-of-run summary.

use std::path::Path;

use tracing::warn;

use crate::pipeline::ExtractOutcome;
use gdex_common::GeneRecordRow;

/// Write one row per record in the fixed column order.
pub fn write_csv(outcome: &ExtractOutcome, path: &Path) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in &outcome.records {
        writer.serialize(GeneRecordRow::from_record(record))?;
    }
    writer.flush()?;
    Ok(())
}

/// Print the run summary the way the operator sees it.
pub fn print_summary(outcome: &ExtractOutcome, path: &Path) {
    for skipped in &outcome.skipped {
        warn!(symbol = %skipped.symbol, reason = %skipped.reason, "gene skipped");
    }
    if outcome.records.is_empty() {
        println!("No gene-disease associations found in the article.");
        return;
    }
    println!(
        "{} gene(s) written to {}{}",
        outcome.records.len(),
        path.display(),
        if outcome.skipped.is_empty() {
            String::new()
        } else {
            format!(" ({} skipped)", outcome.skipped.len())
        }
    );
}
