// File: crates/sales-charts/src/lib.rs
// Summary: Library entry point; exports chart kinds, builders, and binning.

pub mod bins;
pub mod builders;
pub mod error;
pub mod kind;

pub use bins::Bins;
pub use builders::{build_chart, render};
pub use error::RenderError;
pub use kind::ChartKind;
