// File: crates/sales-charts/src/error.rs
// Summary: Render-side error taxonomy.

use sales_data::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    /// The summary tables do not exist yet; nothing is drawn.
    #[error("sales data is not available yet")]
    DataUnavailable,
    #[error("sales database error: {0}")]
    Store(rusqlite::Error),
    #[error("chart drawing failed: {0}")]
    Draw(#[from] anyhow::Error),
}

impl From<StoreError> for RenderError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::DataUnavailable => RenderError::DataUnavailable,
            StoreError::Sql(e) => RenderError::Store(e),
        }
    }
}
