//! The durable output unit: one record per resolved HGNC gene.
//!
//! A `GeneRecord` is created when a symbol first resolves to an HGNC id,
//! grows aliases and diseases while the article is processed, and is frozen
//! into a CSV row at the end of the run. `GeneRecordRow` is the CSV form;
//! the two convert both ways so the relational loader can treat the CSV as
//! the sole source of truth.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::GdexError;

/// Parse the numeric part of an HGNC identifier ("HGNC:2204" or "2204").
pub fn parse_hgnc_id(value: &str) -> Option<u32> {
    value.trim().strip_prefix("HGNC:").unwrap_or(value.trim()).parse().ok()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneRecord {
    pub hgnc_id: u32,
    pub symbol: String,
    pub name: String,
    /// Alternate symbols/names, never containing the canonical symbol.
    pub aliases: BTreeSet<String>,
    pub coord_hg38: Option<String>,
    pub coord_hg19: Option<String>,
    /// Associated disease names, case-insensitively deduplicated.
    pub diseases: BTreeSet<String>,
}

impl GeneRecord {
    pub fn new(hgnc_id: u32, symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            hgnc_id,
            symbol: symbol.into(),
            name: name.into(),
            aliases: BTreeSet::new(),
            coord_hg38: None,
            coord_hg19: None,
            diseases: BTreeSet::new(),
        }
    }

    /// Insert an alias unless it is empty, equals the canonical symbol, or is
    /// already present under a different casing. First-seen casing wins.
    pub fn add_alias(&mut self, alias: &str) {
        let alias = alias.trim();
        if alias.is_empty() || alias.eq_ignore_ascii_case(&self.symbol) {
            return;
        }
        if self.aliases.iter().any(|a| a.eq_ignore_ascii_case(alias)) {
            return;
        }
        self.aliases.insert(alias.to_string());
    }

    /// Insert a disease name, case-insensitively deduplicated.
    pub fn add_disease(&mut self, disease: &str) {
        let disease = disease.trim().trim_matches(|c| matches!(c, '.' | ',' | ';' | ':'));
        if disease.is_empty() {
            return;
        }
        if self.diseases.iter().any(|d| d.eq_ignore_ascii_case(disease)) {
            return;
        }
        self.diseases.insert(disease.to_string());
    }
}

/// One CSV row in the fixed output column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneRecordRow {
    #[serde(rename = "HGNC ID")]
    pub hgnc_id: String,
    #[serde(rename = "Gene Symbol")]
    pub symbol: String,
    #[serde(rename = "HGNC Gene Name")]
    pub name: String,
    #[serde(rename = "Gene Aliases")]
    pub aliases: String,
    #[serde(rename = "hg38 Coordinates")]
    pub coord_hg38: String,
    #[serde(rename = "hg19 Coordinates")]
    pub coord_hg19: String,
    #[serde(rename = "Disease")]
    pub disease: String,
}

const LIST_SEPARATOR: &str = "; ";

/// Replace the list delimiter inside a single value so the joined column
/// still splits back into the same number of entries.
fn sanitize(value: &str) -> String {
    if value.contains(';') {
        warn!(value, "value contains the ';' list delimiter, replacing with ','");
        value.replace(';', ",")
    } else {
        value.to_string()
    }
}

fn join_values<'a>(values: impl Iterator<Item = &'a String>) -> String {
    values.map(|v| sanitize(v)).collect::<Vec<_>>().join(LIST_SEPARATOR)
}

fn split_values(joined: &str) -> impl Iterator<Item = &str> {
    joined.split(';').map(str::trim).filter(|v| !v.is_empty())
}

impl GeneRecordRow {
    pub fn from_record(record: &GeneRecord) -> Self {
        Self {
            hgnc_id: format!("HGNC:{}", record.hgnc_id),
            symbol: record.symbol.clone(),
            name: record.name.clone(),
            aliases: join_values(record.aliases.iter()),
            coord_hg38: record.coord_hg38.clone().unwrap_or_default(),
            coord_hg19: record.coord_hg19.clone().unwrap_or_default(),
            disease: join_values(record.diseases.iter()),
        }
    }

    pub fn into_record(self) -> Result<GeneRecord, GdexError> {
        let hgnc_id = parse_hgnc_id(&self.hgnc_id)
            .ok_or_else(|| GdexError::Malformed(format!("bad HGNC ID {:?}", self.hgnc_id)))?;
        if self.symbol.trim().is_empty() {
            return Err(GdexError::Malformed(format!("empty gene symbol for HGNC:{hgnc_id}")));
        }
        let mut record = GeneRecord::new(hgnc_id, self.symbol.trim(), self.name.trim());
        for alias in split_values(&self.aliases) {
            record.add_alias(alias);
        }
        for disease in split_values(&self.disease) {
            record.add_disease(disease);
        }
        record.coord_hg38 = Some(self.coord_hg38).filter(|c| !c.trim().is_empty());
        record.coord_hg19 = Some(self.coord_hg19).filter(|c| !c.trim().is_empty());
        Ok(record)
    }
}
