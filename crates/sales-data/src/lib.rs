// File: crates/sales-data/src/lib.rs
// Summary: Library entry point; exports ingestion, store, and status APIs.

pub mod error;
pub mod ingest;
pub mod status;
pub mod store;

pub use error::{IngestError, StoreError};
pub use ingest::{
    aggregate_csv, aggregate_reader, load_and_publish, ComparisonRow, SalesAggregate, TopFiveRow,
    Winner,
};
pub use status::{spawn_ingest, IngestHandle, IngestStatus};
pub use store::{SalesStore, COMPARE_TABLE, DEFAULT_DB_PATH, TOP_FIVE_TABLE};
