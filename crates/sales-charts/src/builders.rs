// File: crates/sales-charts/src/builders.rs
// Summary: Assembles one chart per kind from store queries; no caching between renders.

use chart_core::{Axis, Chart, RenderOptions, Series};
use log::debug;
use sales_data::{SalesStore, Winner};
use skia_safe as skia;

use crate::bins::Bins;
use crate::error::RenderError;
use crate::kind::ChartKind;

const HIST_BINS: usize = 10;

// Chart colors kept from the legacy UI.
const BLUE: skia::Color = skia::Color::new(0xff_1f77b4);
const ORANGE: skia::Color = skia::Color::new(0xff_ff7f0e);
const GREEN: skia::Color = skia::Color::new(0xff_2ca02c);
const RED: skia::Color = skia::Color::new(0xff_d62728);
const PURPLE: skia::Color = skia::Color::new(0xff_9467bd);
const SKY_BLUE: skia::Color = skia::Color::new(0xff_87ceeb);

/// Query the store and assemble the chart for `kind`.
pub fn build_chart(kind: ChartKind, store: &SalesStore) -> Result<Chart, RenderError> {
    debug!("building {:?}", kind);
    match kind {
        ChartKind::ComparisonBar => comparison_bar(store),
        ChartKind::TopFivePie => top_five_pie(store),
        ChartKind::SalesHistogram => sales_histogram(store),
        ChartKind::TopFiveHorizontalBar => top_five_horizontal_bar(store),
        ChartKind::ComparisonScatter => comparison_scatter(store),
        ChartKind::TopFiveRetailBar => top_five_retail_bar(store),
    }
}

/// Draw the selected chart onto a caller-supplied canvas. Queries run per
/// call and complete before anything touches the canvas, so a failed build
/// leaves the surface untouched.
pub fn render(
    kind: ChartKind,
    store: &SalesStore,
    opts: &RenderOptions,
    canvas: &skia::Canvas,
) -> Result<(), RenderError> {
    let chart = build_chart(kind, store)?;
    chart.render_to_canvas(opts, canvas)?;
    Ok(())
}

fn comparison_bar(store: &SalesStore) -> Result<Chart, RenderError> {
    let retail = store.count_winner(Winner::Retail)?;
    let warehouse = store.count_winner(Winner::Warehouse)?;

    let mut chart = Chart::with_title("Retail against Warehouse sales");
    chart.x_axis = Axis::category("");
    chart.y_axis = Axis::new("Count", 0.0, 1.0);
    chart.add_series(
        Series::bar(
            "",
            vec!["total Retail sales".into(), "total Warehouse sales".into()],
            vec![retail as f64, warehouse as f64],
        )
        .with_category_colors(vec![BLUE, ORANGE]),
    );
    chart.autoscale_axes(0.05);
    Ok(chart)
}

fn top_five_pie(store: &SalesStore) -> Result<Chart, RenderError> {
    let rows = store.top_five_rows()?;
    let (items, retail): (Vec<String>, Vec<f64>) =
        rows.into_iter().map(|r| (r.item, r.retail)).unzip();

    let mut chart = Chart::with_title("Top 5 alcohols - Sales");
    chart.add_series(Series::pie("", items, retail));
    Ok(chart)
}

fn sales_histogram(store: &SalesStore) -> Result<Chart, RenderError> {
    let rows = store.comparison_rows()?;
    let retail: Vec<f64> = rows.iter().map(|r| r.retail).collect();
    let warehouse: Vec<f64> = rows.iter().map(|r| r.warehouse).collect();

    let lo = retail.iter().chain(&warehouse).copied().fold(f64::INFINITY, f64::min);
    let hi = retail.iter().chain(&warehouse).copied().fold(f64::NEG_INFINITY, f64::max);
    let bins = if lo.is_finite() && hi.is_finite() {
        Bins::equal_width(lo, hi, HIST_BINS)
    } else {
        Bins::equal_width(0.0, 1.0, HIST_BINS)
    };

    let retail_counts = bins.counts(&retail);
    let warehouse_counts = bins.counts(&warehouse);
    let max_stacked = retail_counts
        .iter()
        .zip(&warehouse_counts)
        .map(|(a, b)| a + b)
        .fold(0.0f64, f64::max);

    let mut chart = Chart::with_title("Distribution of Retail and Warehouse sales");
    chart.x_axis = Axis::category("Sales Range");
    // log frequency axis; the floor sits below a count of one so single-item
    // bins stay visible
    chart.y_axis = Axis::log10("Frequency", 0.7, (max_stacked * 1.5).max(10.0));
    chart.show_legend = true;
    chart.add_series(Series::bar("retail sales", bins.labels(), retail_counts).with_color(GREEN));
    chart.add_series(Series::bar("warehouse sales", bins.labels(), warehouse_counts).with_color(BLUE));
    Ok(chart)
}

fn top_five_horizontal_bar(store: &SalesStore) -> Result<Chart, RenderError> {
    let rows = store.top_five_rows()?;
    let (items, retail): (Vec<String>, Vec<f64>) =
        rows.into_iter().map(|r| (r.item, r.retail)).unzip();

    let mut chart = Chart::with_title("Top 5 Alcohols by Retail Sales");
    chart.x_axis = Axis::new("Retail Sales", 0.0, 1.0);
    chart.y_axis = Axis::category("Item");
    chart.add_series(Series::horizontal_bar("", items, retail).with_color(PURPLE));
    chart.autoscale_axes(0.05);
    Ok(chart)
}

fn comparison_scatter(store: &SalesStore) -> Result<Chart, RenderError> {
    let rows = store.comparison_rows()?;
    let points: Vec<(f64, f64)> = rows.iter().map(|r| (r.retail, r.warehouse)).collect();

    let mut chart = Chart::with_title("Retail and Warehouse Sales");
    chart.x_axis = Axis::new("Retail Sales", 0.0, 1.0);
    chart.y_axis = Axis::new("Warehouse Sales", 0.0, 1.0);
    chart.add_series(Series::scatter("", points).with_color(RED));
    chart.autoscale_axes(0.05);
    Ok(chart)
}

fn top_five_retail_bar(store: &SalesStore) -> Result<Chart, RenderError> {
    let rows = store.top_five_rows()?;
    let (items, retail): (Vec<String>, Vec<f64>) =
        rows.into_iter().map(|r| (r.item, r.retail)).unzip();

    // Only the retail series is drawn; the "Stacked Bar" selector label is
    // historical.
    let mut chart = Chart::with_title("Top 5 Alcohols: Stacked by Retail");
    chart.x_axis = Axis::category("Items");
    chart.y_axis = Axis::new("Sales", 0.0, 1.0);
    chart.show_legend = true;
    chart.add_series(Series::bar("Retail Sales", items, retail).with_color(SKY_BLUE));
    chart.autoscale_axes(0.05);
    Ok(chart)
}
