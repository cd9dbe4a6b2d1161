// File: crates/sales-data/src/ingest.rs
// Summary: CSV aggregation: per-item retail/warehouse totals, winner label, top five.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use log::info;

use crate::error::IngestError;
use crate::store::SalesStore;

pub const ITEM_COLUMN: &str = "item description";
pub const RETAIL_COLUMN: &str = "retail sales";
pub const WAREHOUSE_COLUMN: &str = "warehouse sales";

/// How many items the top-five table keeps.
pub const TOP_N: usize = 5;

/// Winner label stored in the `THEMOST` column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Winner {
    Retail,
    Warehouse,
}

impl Winner {
    /// Retail wins only on a strictly greater total; ties go to warehouse.
    pub fn decide(retail: f64, warehouse: f64) -> Self {
        if retail > warehouse { Winner::Retail } else { Winner::Warehouse }
    }

    pub fn label(self) -> &'static str {
        match self {
            Winner::Retail => "Retail wins",
            Winner::Warehouse => "Warehouse wins",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Retail wins" => Some(Winner::Retail),
            "Warehouse wins" => Some(Winner::Warehouse),
            _ => None,
        }
    }
}

/// One row of the comparison table.
#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonRow {
    pub item: String,
    pub retail: f64,
    pub warehouse: f64,
    pub winner: Winner,
}

/// One row of the top-five table.
#[derive(Clone, Debug, PartialEq)]
pub struct TopFiveRow {
    pub item: String,
    pub retail: f64,
}

/// Aggregated output of one ingest run. `comparison` keeps first-seen item
/// order; `top_five` is sorted descending by retail total.
#[derive(Clone, Debug, PartialEq)]
pub struct SalesAggregate {
    pub comparison: Vec<ComparisonRow>,
    pub top_five: Vec<TopFiveRow>,
}

/// Read and aggregate a sales CSV from disk.
pub fn aggregate_csv(path: &Path) -> Result<SalesAggregate, IngestError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => IngestError::NotFound(path.to_path_buf()),
        io::ErrorKind::PermissionDenied => IngestError::PermissionDenied(path.to_path_buf()),
        _ => IngestError::Io(e),
    })?;
    aggregate_reader(file)
}

/// Aggregate a sales CSV from any reader.
pub fn aggregate_reader<R: Read>(reader: R) -> Result<SalesAggregate, IngestError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    if headers.iter().all(|h| h.is_empty()) {
        return Err(IngestError::EmptyInput);
    }

    let idx = |name: &str| headers.iter().position(|h| h == name);
    let i_item = idx(ITEM_COLUMN).ok_or(IngestError::MissingColumn("ITEM DESCRIPTION"))?;
    let i_retail = idx(RETAIL_COLUMN).ok_or(IngestError::MissingColumn("RETAIL SALES"))?;
    let i_warehouse = idx(WAREHOUSE_COLUMN).ok_or(IngestError::MissingColumn("WAREHOUSE SALES"))?;

    // Group by item description, preserving first-seen order.
    let mut groups: Vec<ComparisonRow> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut rows = 0usize;
    for record in rdr.records() {
        let record = record?;
        rows += 1;
        let item = record.get(i_item).unwrap_or("").trim().to_string();
        let retail = parse_quantity(record.get(i_retail));
        let warehouse = parse_quantity(record.get(i_warehouse));
        let slot = *slots.entry(item.clone()).or_insert_with(|| {
            groups.push(ComparisonRow { item, retail: 0.0, warehouse: 0.0, winner: Winner::Warehouse });
            groups.len() - 1
        });
        groups[slot].retail += retail;
        groups[slot].warehouse += warehouse;
    }
    if rows == 0 {
        return Err(IngestError::EmptyInput);
    }
    for row in &mut groups {
        row.winner = Winner::decide(row.retail, row.warehouse);
    }

    // Stable descending sort keeps first-seen order among equal retail totals.
    let mut ranked: Vec<&ComparisonRow> = groups.iter().collect();
    ranked.sort_by(|a, b| b.retail.partial_cmp(&a.retail).unwrap_or(std::cmp::Ordering::Equal));
    let top_five = ranked
        .into_iter()
        .take(TOP_N)
        .map(|r| TopFiveRow { item: r.item.clone(), retail: r.retail })
        .collect();

    Ok(SalesAggregate { comparison: groups, top_five })
}

/// One ingest run: aggregate the CSV and atomically replace both tables.
pub fn load_and_publish(csv_path: &Path, store: &SalesStore) -> Result<(), IngestError> {
    let aggregate = aggregate_csv(csv_path)?;
    store.replace(&aggregate)?;
    info!(
        "published {} items from {} to {} ({} in the top five)",
        aggregate.comparison.len(),
        csv_path.display(),
        store.path().display(),
        aggregate.top_five.len(),
    );
    Ok(())
}

/// Blank or unparsable quantities count as zero.
fn parse_quantity(field: Option<&str>) -> f64 {
    field.and_then(|s| s.trim().parse::<f64>().ok()).unwrap_or(0.0)
}
