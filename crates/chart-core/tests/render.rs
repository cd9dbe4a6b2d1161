// File: crates/chart-core/tests/render.rs
// Purpose: Validate buffer shapes and encodings across the series types.

use chart_core::{Axis, Chart, RenderOptions, Series};

fn opts() -> RenderOptions {
    let mut o = RenderOptions::default();
    o.draw_labels = false; // avoid font variance
    o
}

fn labels(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("c{i}")).collect()
}

#[test]
fn bar_chart_rgba_buffer_shape() {
    let mut chart = Chart::with_title("counts");
    chart.x_axis = Axis::category("");
    chart.y_axis = Axis::new("Count", 0.0, 4.0);
    chart.add_series(Series::bar("", labels(2), vec![3.0, 1.0]));

    let (px, w, h, stride) = chart.render_to_rgba8(&opts()).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, w as usize * 4);

    // Background alpha in the top-left pixel (RGBA)
    assert_eq!(px[3], 255);
}

#[test]
fn pie_chart_png_bytes() {
    let mut chart = Chart::with_title("share");
    chart.add_series(Series::pie("", labels(3), vec![5.0, 3.0, 2.0]));

    let bytes = chart.render_to_png_bytes(&opts()).expect("png bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(img.width() as i32, opts().width);
    assert_eq!(img.height() as i32, opts().height);
}

#[test]
fn log_scale_bars_survive_empty_bins() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::category("range");
    chart.y_axis = Axis::log10("freq", 0.7, 100.0);
    chart.add_series(Series::bar("a", labels(4), vec![10.0, 0.0, 0.0, 2.0]));
    chart.add_series(Series::bar("b", labels(4), vec![0.0, 0.0, 0.0, 1.0]));

    chart.render_to_rgba8(&opts()).expect("render");
}

#[test]
fn scatter_marks_change_pixels() {
    let o = opts();
    let background = {
        let chart = Chart::new();
        chart.render_to_rgba8(&o).expect("empty render").0
    };

    let mut chart = Chart::new();
    chart.x_axis = Axis::new("x", 0.0, 10.0);
    chart.y_axis = Axis::new("y", 0.0, 10.0);
    chart.add_series(Series::scatter("", vec![(2.0, 2.0), (5.0, 7.0), (9.0, 1.0)]));
    let drawn = chart.render_to_rgba8(&o).expect("scatter render").0;

    assert_ne!(background, drawn, "scatter points should touch the buffer");
}
