//! SQLite schema for the normalized gene–disease store.
//!
//! Disease names are shared rows; GeneDisease is the many-to-many junction.

use rusqlite::Connection;

use crate::error::Result;

pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute(
        r#"
        CREATE TABLE IF NOT EXISTS Gene (
            hgnc_id INTEGER PRIMARY KEY,
            symbol TEXT NOT NULL,
            name TEXT,
            coord_hg38 TEXT,
            coord_hg19 TEXT
        )
        "#,
        [],
    )?;

    conn.execute(
        r#"
        CREATE TABLE IF NOT EXISTS Alias (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            hgnc_id INTEGER NOT NULL,
            alias TEXT NOT NULL,

            FOREIGN KEY(hgnc_id) REFERENCES Gene(hgnc_id) ON DELETE CASCADE
        )
        "#,
        [],
    )?;

    conn.execute(
        r#"
        CREATE TABLE IF NOT EXISTS Disease (
            disease_id INTEGER PRIMARY KEY AUTOINCREMENT,
            disease_name TEXT NOT NULL UNIQUE
        )
        "#,
        [],
    )?;

    conn.execute(
        r#"
        CREATE TABLE IF NOT EXISTS GeneDisease (
            hgnc_id INTEGER NOT NULL,
            disease_id INTEGER NOT NULL,

            PRIMARY KEY (hgnc_id, disease_id),
            FOREIGN KEY(hgnc_id) REFERENCES Gene(hgnc_id) ON DELETE CASCADE,
            FOREIGN KEY(disease_id) REFERENCES Disease(disease_id) ON DELETE CASCADE
        )
        "#,
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_alias_hgnc ON Alias(hgnc_id)",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_gene_disease_disease ON GeneDisease(disease_id)",
        [],
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        init_schema(&conn).unwrap();
        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN
                 ('Gene', 'Alias', 'Disease', 'GeneDisease')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 4);
    }
}
