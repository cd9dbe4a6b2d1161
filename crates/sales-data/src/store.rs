// File: crates/sales-data/src/store.rs
// Summary: SQLite persistence for the comparison and top-five tables.

use std::path::{Path, PathBuf};

use log::debug;
use rusqlite::{params, Connection, ErrorCode, Params, Row};

use crate::error::{IngestError, StoreError};
use crate::ingest::{ComparisonRow, SalesAggregate, TopFiveRow, Winner};

/// Well-known database file used when no explicit path is configured.
pub const DEFAULT_DB_PATH: &str = "salesdata.db";

pub const COMPARE_TABLE: &str = "item_description_compare";
pub const TOP_FIVE_TABLE: &str = "top_5_alcohols";

/// Handle to the sales database. Holds only the path; a connection is
/// opened and closed per operation, so the handle is freely cloneable
/// across threads.
#[derive(Clone, Debug)]
pub struct SalesStore {
    path: PathBuf,
}

impl SalesStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(&self) -> rusqlite::Result<Connection> {
        Connection::open(&self.path)
    }

    /// Replace both summary tables with the aggregate in one transaction:
    /// either both tables move to the new generation or neither does.
    pub fn replace(&self, aggregate: &SalesAggregate) -> Result<(), IngestError> {
        let mut conn = self.open().map_err(|e| classify_write(e, &self.path))?;
        let tx = conn.transaction().map_err(|e| classify_write(e, &self.path))?;

        let result: rusqlite::Result<()> = (|| {
            tx.execute_batch(&format!(
                "DROP TABLE IF EXISTS \"{COMPARE_TABLE}\";\n\
                 DROP TABLE IF EXISTS \"{TOP_FIVE_TABLE}\";\n\
                 CREATE TABLE \"{COMPARE_TABLE}\" (\n\
                     \"ITEM DESCRIPTION\" TEXT NOT NULL,\n\
                     \"RETAIL SALES\" REAL NOT NULL,\n\
                     \"WAREHOUSE SALES\" REAL NOT NULL,\n\
                     \"THEMOST\" TEXT NOT NULL\n\
                 );\n\
                 CREATE TABLE \"{TOP_FIVE_TABLE}\" (\n\
                     \"ITEM DESCRIPTION\" TEXT NOT NULL,\n\
                     \"RETAIL SALES\" REAL NOT NULL\n\
                 );"
            ))?;
            {
                let mut insert = tx.prepare(&format!(
                    "INSERT INTO \"{COMPARE_TABLE}\" VALUES (?1, ?2, ?3, ?4)"
                ))?;
                for row in &aggregate.comparison {
                    insert.execute(params![row.item, row.retail, row.warehouse, row.winner.label()])?;
                }
            }
            {
                let mut insert = tx.prepare(&format!(
                    "INSERT INTO \"{TOP_FIVE_TABLE}\" VALUES (?1, ?2)"
                ))?;
                for row in &aggregate.top_five {
                    insert.execute(params![row.item, row.retail])?;
                }
            }
            Ok(())
        })();

        match result {
            // An uncommitted transaction rolls back on drop, so a failure
            // leaves the previous generation in place.
            Ok(()) => tx.commit().map_err(|e| classify_write(e, &self.path)),
            Err(e) => Err(classify_write(e, &self.path)),
        }
    }

    /// All comparison rows in insertion order.
    pub fn comparison_rows(&self) -> Result<Vec<ComparisonRow>, StoreError> {
        self.query_rows(
            &format!(
                "SELECT \"ITEM DESCRIPTION\", \"RETAIL SALES\", \"WAREHOUSE SALES\", \"THEMOST\" \
                 FROM \"{COMPARE_TABLE}\" ORDER BY rowid"
            ),
            [],
            |row| {
                let label: String = row.get(3)?;
                let winner = Winner::from_label(&label).ok_or_else(|| {
                    rusqlite::Error::FromSqlConversionFailure(
                        3,
                        rusqlite::types::Type::Text,
                        format!("unknown winner label '{label}'").into(),
                    )
                })?;
                Ok(ComparisonRow { item: row.get(0)?, retail: row.get(1)?, warehouse: row.get(2)?, winner })
            },
        )
    }

    /// Top-five rows in their published (descending retail) order.
    pub fn top_five_rows(&self) -> Result<Vec<TopFiveRow>, StoreError> {
        self.query_rows(
            &format!(
                "SELECT \"ITEM DESCRIPTION\", \"RETAIL SALES\" FROM \"{TOP_FIVE_TABLE}\" ORDER BY rowid"
            ),
            [],
            |row| Ok(TopFiveRow { item: row.get(0)?, retail: row.get(1)? }),
        )
    }

    /// Count comparison rows carrying the given winner label.
    pub fn count_winner(&self, winner: Winner) -> Result<i64, StoreError> {
        let counts = self.query_rows(
            &format!("SELECT COUNT(*) FROM \"{COMPARE_TABLE}\" WHERE \"THEMOST\" = ?1"),
            params![winner.label()],
            |row| row.get::<_, i64>(0),
        )?;
        Ok(counts.into_iter().next().unwrap_or(0))
    }

    /// Single read helper every query goes through: opens a connection,
    /// runs `sql`, maps each row, classifies failures.
    fn query_rows<T, P: Params>(
        &self,
        sql: &str,
        params: P,
        mut map: impl FnMut(&Row<'_>) -> rusqlite::Result<T>,
    ) -> Result<Vec<T>, StoreError> {
        debug!("query: {sql}");
        let conn = self.open().map_err(map_read)?;
        let mut stmt = conn.prepare(sql).map_err(map_read)?;
        let mut rows = stmt.query(params).map_err(map_read)?;
        let mut out = Vec::new();
        while let Some(row) = rows.next().map_err(map_read)? {
            out.push(map(row).map_err(map_read)?);
        }
        Ok(out)
    }
}

/// A missing table means no ingest has published yet.
fn map_read(e: rusqlite::Error) -> StoreError {
    match &e {
        rusqlite::Error::SqliteFailure(_, Some(msg)) if msg.contains("no such table") => {
            StoreError::DataUnavailable
        }
        _ => StoreError::Sql(e),
    }
}

fn classify_write(e: rusqlite::Error, db: &Path) -> IngestError {
    if let rusqlite::Error::SqliteFailure(f, _) = &e {
        if matches!(f.code, ErrorCode::CannotOpen | ErrorCode::ReadOnly | ErrorCode::PermissionDenied) {
            return IngestError::PermissionDenied(db.to_path_buf());
        }
    }
    IngestError::Store(e)
}
