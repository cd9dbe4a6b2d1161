// File: crates/sales-charts/tests/builders.rs
// Purpose: Each chart kind assembles the right series from the store.

use std::io::Cursor;

use chart_core::{ScaleKind, SeriesType};
use sales_charts::{build_chart, ChartKind, RenderError};
use sales_data::{aggregate_reader, SalesStore};
use tempfile::TempDir;

const SAMPLE: &str = "ITEM DESCRIPTION,RETAIL SALES,WAREHOUSE SALES\n\
                      Vodka,100,10\nRum,50,80\nGin,100,100\n";

fn ready_store(tmp: &TempDir) -> SalesStore {
    let store = SalesStore::new(tmp.path().join("salesdata.db"));
    let aggregate = aggregate_reader(Cursor::new(SAMPLE)).expect("aggregate");
    store.replace(&aggregate).expect("replace");
    store
}

#[test]
fn comparison_bar_counts_winners_in_fixed_order() {
    let tmp = TempDir::new().unwrap();
    let chart = build_chart(ChartKind::ComparisonBar, &ready_store(&tmp)).expect("build");

    assert_eq!(chart.series.len(), 1);
    let s = &chart.series[0];
    assert_eq!(s.series_type, SeriesType::Bar);
    assert_eq!(s.categories, ["total Retail sales", "total Warehouse sales"]);
    assert_eq!(s.values, [1.0, 2.0]);
}

#[test]
fn pie_has_one_slice_per_top_item() {
    let tmp = TempDir::new().unwrap();
    let chart = build_chart(ChartKind::TopFivePie, &ready_store(&tmp)).expect("build");

    let s = &chart.series[0];
    assert_eq!(s.series_type, SeriesType::Pie);
    assert_eq!(s.categories, ["Vodka", "Gin", "Rum"]);
    assert_eq!(s.values, [100.0, 100.0, 50.0]);
}

#[test]
fn histogram_bins_both_series_on_a_log_axis() {
    let tmp = TempDir::new().unwrap();
    let chart = build_chart(ChartKind::SalesHistogram, &ready_store(&tmp)).expect("build");

    assert_eq!(chart.series.len(), 2);
    assert_eq!(chart.y_axis.kind, ScaleKind::Log10);
    for s in &chart.series {
        assert_eq!(s.series_type, SeriesType::Bar);
        assert_eq!(s.categories.len(), 10);
        // every item lands in exactly one bin
        assert_eq!(s.values.iter().sum::<f64>(), 3.0);
    }
    assert_eq!(chart.series[0].name, "retail sales");
    assert_eq!(chart.series[1].name, "warehouse sales");
}

#[test]
fn horizontal_bar_preserves_descending_order() {
    let tmp = TempDir::new().unwrap();
    let chart = build_chart(ChartKind::TopFiveHorizontalBar, &ready_store(&tmp)).expect("build");

    let s = &chart.series[0];
    assert_eq!(s.series_type, SeriesType::HorizontalBar);
    assert_eq!(s.categories, ["Vodka", "Gin", "Rum"]);
    assert_eq!(s.values, [100.0, 100.0, 50.0]);
    assert!(chart.x_axis.max >= 100.0);
}

#[test]
fn scatter_pairs_retail_with_warehouse() {
    let tmp = TempDir::new().unwrap();
    let chart = build_chart(ChartKind::ComparisonScatter, &ready_store(&tmp)).expect("build");

    let s = &chart.series[0];
    assert_eq!(s.series_type, SeriesType::Scatter);
    assert_eq!(s.points, [(100.0, 10.0), (50.0, 80.0), (100.0, 100.0)]);
}

#[test]
fn retail_bar_draws_a_single_series() {
    let tmp = TempDir::new().unwrap();
    let chart = build_chart(ChartKind::TopFiveRetailBar, &ready_store(&tmp)).expect("build");

    assert_eq!(chart.series.len(), 1);
    let s = &chart.series[0];
    assert_eq!(s.series_type, SeriesType::Bar);
    assert_eq!(s.name, "Retail Sales");
    assert_eq!(s.values, [100.0, 100.0, 50.0]);
}

#[test]
fn every_kind_reports_data_unavailable_before_ingest() {
    let tmp = TempDir::new().unwrap();
    let store = SalesStore::new(tmp.path().join("salesdata.db"));
    for kind in ChartKind::ALL {
        let err = build_chart(kind, &store).unwrap_err();
        assert!(
            matches!(err, RenderError::DataUnavailable),
            "{kind:?} should report missing data, got {err}"
        );
    }
}
