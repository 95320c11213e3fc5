//! CSV → SQLite loader.

use std::io::Read;
use std::path::Path;

use rusqlite::{params, Connection};
use tracing::{debug, info};

use crate::error::{DbError, Result};
use crate::schema;
use gdex_common::{GeneRecord, GeneRecordRow};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    pub genes: usize,
    pub aliases: usize,
    pub disease_links: usize,
}

/// Load an extraction CSV into the SQLite database at `db_path`, creating
/// the schema when missing.
pub fn load_csv(csv_path: &Path, db_path: &Path) -> Result<LoadStats> {
    let reader = csv::Reader::from_path(csv_path)?;
    let mut conn = Connection::open(db_path)?;
    let stats = load_from_reader(&mut conn, reader)?;
    info!(
        genes = stats.genes,
        aliases = stats.aliases,
        disease_links = stats.disease_links,
        db = %db_path.display(),
        "relational load complete"
    );
    Ok(stats)
}

fn load_from_reader<R: Read>(conn: &mut Connection, mut reader: csv::Reader<R>) -> Result<LoadStats> {
    schema::init_schema(conn)?;

    let mut stats = LoadStats::default();
    let tx = conn.transaction()?;
    for row in reader.deserialize::<GeneRecordRow>() {
        let record = row?
            .into_record()
            .map_err(|e| DbError::MalformedRow(e.to_string()))?;
        load_record(&tx, &record, &mut stats)?;
    }
    tx.commit()?;
    Ok(stats)
}

fn load_record(conn: &Connection, record: &GeneRecord, stats: &mut LoadStats) -> Result<()> {
    debug!(symbol = %record.symbol, hgnc_id = record.hgnc_id, "loading gene");

    conn.execute(
        r#"
        INSERT OR REPLACE INTO Gene (hgnc_id, symbol, name, coord_hg38, coord_hg19)
        VALUES (?1, ?2, ?3, ?4, ?5)
        "#,
        params![
            record.hgnc_id,
            record.symbol,
            record.name,
            record.coord_hg38,
            record.coord_hg19,
        ],
    )?;

    // fresh import semantics: this gene's dependent rows are re-derived
    conn.execute("DELETE FROM Alias WHERE hgnc_id = ?1", params![record.hgnc_id])?;
    conn.execute("DELETE FROM GeneDisease WHERE hgnc_id = ?1", params![record.hgnc_id])?;

    for alias in &record.aliases {
        conn.execute(
            "INSERT INTO Alias (hgnc_id, alias) VALUES (?1, ?2)",
            params![record.hgnc_id, alias],
        )?;
        stats.aliases += 1;
    }

    for disease in &record.diseases {
        conn.execute(
            "INSERT OR IGNORE INTO Disease (disease_name) VALUES (?1)",
            params![disease],
        )?;
        let disease_id: i64 = conn.query_row(
            "SELECT disease_id FROM Disease WHERE disease_name = ?1",
            params![disease],
            |r| r.get(0),
        )?;
        conn.execute(
            "INSERT OR IGNORE INTO GeneDisease (hgnc_id, disease_id) VALUES (?1, ?2)",
            params![record.hgnc_id, disease_id],
        )?;
        stats.disease_links += 1;
    }

    stats.genes += 1;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_GENE_CSV: &str = "\
HGNC ID,Gene Symbol,HGNC Gene Name,Gene Aliases,hg38 Coordinates,hg19 Coordinates,Disease
HGNC:2204,COL4A3,collagen type IV alpha 3 chain,Tumstatin,chr2:227164624-227314792,chr2:228029281-228179508,Alport syndrome; hematuria
HGNC:618,APOL1,apolipoprotein L1,APO-L; FSGS4,chr22:36253071-36267531,chr22:36649117-36663577,focal segmental glomerulosclerosis; hematuria
";

    fn load(conn: &mut Connection, csv_text: &str) -> LoadStats {
        let reader = csv::Reader::from_reader(csv_text.as_bytes());
        load_from_reader(conn, reader).unwrap()
    }

    fn count(conn: &Connection, sql: &str) -> i64 {
        conn.query_row(sql, [], |row| row.get(0)).unwrap()
    }

    #[test]
    fn test_load_populates_all_tables() {
        let mut conn = Connection::open_in_memory().unwrap();
        let stats = load(&mut conn, TWO_GENE_CSV);

        assert_eq!(stats, LoadStats { genes: 2, aliases: 3, disease_links: 4 });
        assert_eq!(count(&conn, "SELECT COUNT(*) FROM Gene"), 2);
        assert_eq!(count(&conn, "SELECT COUNT(*) FROM Alias"), 3);
        // "hematuria" is shared between both genes
        assert_eq!(count(&conn, "SELECT COUNT(*) FROM Disease"), 3);
        assert_eq!(count(&conn, "SELECT COUNT(*) FROM GeneDisease"), 4);

        let symbol: String = conn
            .query_row("SELECT symbol FROM Gene WHERE hgnc_id = 2204", [], |r| r.get(0))
            .unwrap();
        assert_eq!(symbol, "COL4A3");
    }

    #[test]
    fn test_reload_is_a_fresh_import() {
        let mut conn = Connection::open_in_memory().unwrap();
        load(&mut conn, TWO_GENE_CSV);
        load(&mut conn, TWO_GENE_CSV);

        assert_eq!(count(&conn, "SELECT COUNT(*) FROM Gene"), 2);
        assert_eq!(count(&conn, "SELECT COUNT(*) FROM Alias"), 3);
        assert_eq!(count(&conn, "SELECT COUNT(*) FROM Disease"), 3);
        assert_eq!(count(&conn, "SELECT COUNT(*) FROM GeneDisease"), 4);
    }

    #[test]
    fn test_empty_coordinates_load_as_null() {
        let csv_text = "\
HGNC ID,Gene Symbol,HGNC Gene Name,Gene Aliases,hg38 Coordinates,hg19 Coordinates,Disease
HGNC:7508,MUC1,mucin 1,,,,medullary cystic kidney disease
";
        let mut conn = Connection::open_in_memory().unwrap();
        load(&mut conn, csv_text);
        let coord: Option<String> = conn
            .query_row("SELECT coord_hg38 FROM Gene WHERE hgnc_id = 7508", [], |r| r.get(0))
            .unwrap();
        assert!(coord.is_none());
    }

    #[test]
    fn test_malformed_hgnc_id_is_rejected() {
        let csv_text = "\
HGNC ID,Gene Symbol,HGNC Gene Name,Gene Aliases,hg38 Coordinates,hg19 Coordinates,Disease
bogus,MUC1,mucin 1,,,,tubulopathy
";
        let mut conn = Connection::open_in_memory().unwrap();
        let reader = csv::Reader::from_reader(csv_text.as_bytes());
        let err = load_from_reader(&mut conn, reader).unwrap_err();
        assert!(matches!(err, DbError::MalformedRow(_)));
    }
}
