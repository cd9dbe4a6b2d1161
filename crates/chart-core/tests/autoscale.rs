// File: crates/chart-core/tests/autoscale.rs
// Purpose: Validate autoscale over the categorical series types.

use chart_core::{Chart, Series};

fn labels(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("c{i}")).collect()
}

#[test]
fn stacked_bars_scale_to_the_stacked_total() {
    let mut chart = Chart::new();
    chart.add_series(Series::bar("a", labels(2), vec![1.0, 2.0]));
    chart.add_series(Series::bar("b", labels(2), vec![3.0, 1.0]));

    chart.autoscale_axes(0.0);

    // category 0 stacks to 4.0, which must fit on the y axis
    assert!(chart.y_axis.min <= 0.0 + 1e-9);
    assert!(chart.y_axis.max >= 4.0 - 1e-9);
}

#[test]
fn horizontal_bars_scale_the_x_axis() {
    let mut chart = Chart::new();
    chart.add_series(Series::horizontal_bar("", labels(3), vec![10.0, 40.0, 25.0]));

    chart.autoscale_axes(0.0);

    assert!(chart.x_axis.min <= 0.0 + 1e-9);
    assert!(chart.x_axis.max >= 40.0 - 1e-9);
}

#[test]
fn scatter_covers_both_axes() {
    let mut chart = Chart::new();
    chart.add_series(Series::scatter("", vec![(2.0, 8.0), (-1.0, 3.0), (5.0, -2.0)]));

    chart.autoscale_axes(0.02);

    assert!(chart.x_axis.min <= -1.0 + 1e-9);
    assert!(chart.x_axis.max >= 5.0 - 1e-9);
    assert!(chart.y_axis.min <= -2.0 + 1e-9);
    assert!(chart.y_axis.max >= 8.0 - 1e-9);
}

#[test]
fn missing_values_count_as_zero() {
    let mut chart = Chart::new();
    chart.add_series(Series::bar("a", labels(3), vec![1.0])); // two slots have no value

    chart.autoscale_axes(0.0);

    assert!(chart.y_axis.max >= 1.0 - 1e-9);
}
