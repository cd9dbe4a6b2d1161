// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and rendering pipeline onto Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;

use crate::axis::{Axis, ScaleKind};
use crate::geometry::RectI32;
use crate::grid::{linspace, log_ticks};
use crate::scale::ValueScale;
use crate::series::{Series, SeriesType};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::dark(),
            draw_labels: true,
        }
    }
}

#[derive(Debug)]
pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub show_legend: bool,
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            series: Vec::new(),
            x_axis: Axis::default(),
            y_axis: Axis::default(),
            show_legend: false,
        }
    }

    pub fn with_title(title: impl Into<String>) -> Self {
        let mut c = Self::new();
        c.title = title.into();
        c
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit axis ranges to the data: stacked totals for bars, value extent
    /// for horizontal bars, point extents for scatter. Pie is untouched.
    pub fn autoscale_axes(&mut self, margin: f64) {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;

        let bars: Vec<&Series> = self.series.iter().filter(|s| s.series_type == SeriesType::Bar).collect();
        if let Some(first) = bars.first() {
            for slot in 0..first.categories.len() {
                let total: f64 = bars.iter().map(|s| s.value_at(slot)).sum();
                y_min = y_min.min(0.0);
                y_max = y_max.max(total);
            }
        }
        for s in &self.series {
            match s.series_type {
                SeriesType::HorizontalBar => {
                    for slot in 0..s.categories.len() {
                        x_min = x_min.min(0.0);
                        x_max = x_max.max(s.value_at(slot));
                    }
                }
                SeriesType::Scatter => {
                    for &(x, y) in &s.points {
                        x_min = x_min.min(x);
                        x_max = x_max.max(x);
                        y_min = y_min.min(y);
                        y_max = y_max.max(y);
                    }
                }
                SeriesType::Bar | SeriesType::Pie => {}
            }
        }

        if x_min.is_finite() && x_max.is_finite() {
            let span = (x_max - x_min).max(1e-9);
            self.x_axis.min = if x_min == 0.0 { 0.0 } else { x_min - span * margin };
            self.x_axis.max = x_max + span * margin;
        }
        if y_min.is_finite() && y_max.is_finite() {
            let span = (y_max - y_min).max(1e-9);
            self.y_axis.min = if y_min == 0.0 { 0.0 } else { y_min - span * margin };
            self.y_axis.max = y_max + span * margin;
        }
    }

    /// Draw the chart onto a caller-supplied canvas, clearing it first.
    pub fn render_to_canvas(&self, opts: &RenderOptions, canvas: &skia::Canvas) -> Result<()> {
        canvas.clear(opts.theme.background);

        let plot = plot_rect(opts);
        let shaper = if opts.draw_labels { Some(TextShaper::new()) } else { None };

        let pies: Vec<&Series> = self.series.iter().filter(|s| s.series_type == SeriesType::Pie).collect();
        let bars: Vec<&Series> = self.series.iter().filter(|s| s.series_type == SeriesType::Bar).collect();
        let hbars: Vec<&Series> = self.series.iter().filter(|s| s.series_type == SeriesType::HorizontalBar).collect();
        let scatters: Vec<&Series> = self.series.iter().filter(|s| s.series_type == SeriesType::Scatter).collect();

        if let Some(pie) = pies.first() {
            draw_pie_series(canvas, &plot, pie, &opts.theme, shaper.as_ref());
        } else {
            let y_scale = ValueScale::from_axis(&self.y_axis, plot.bottom as f32, plot.top as f32);
            let x_scale = ValueScale::from_axis(&self.x_axis, plot.left as f32, plot.right as f32);

            draw_grid(canvas, &plot, &self.y_axis, &y_scale, &opts.theme);
            draw_axis_lines(canvas, &plot, &opts.theme);

            if !bars.is_empty() {
                draw_bar_series(canvas, &plot, &bars, &y_scale, &opts.theme, shaper.as_ref());
            }
            if let Some(hb) = hbars.first() {
                draw_hbar_series(canvas, &plot, hb, &x_scale, &opts.theme, shaper.as_ref());
            }
            for s in &scatters {
                draw_scatter_series(canvas, &plot, s, &x_scale, &y_scale, &opts.theme);
            }
            if let Some(sh) = &shaper {
                draw_axis_labels(canvas, &plot, &self.x_axis, &self.y_axis, &opts.theme, sh);
            }
        }

        if let Some(sh) = &shaper {
            if !self.title.is_empty() {
                sh.draw_centered(canvas, &self.title, opts.width as f32 * 0.5, 30.0, 18.0, opts.theme.title);
            }
            if self.show_legend {
                draw_legend(canvas, &plot, &self.series, &opts.theme, sh);
            }
        }
        Ok(())
    }

    /// Render to a tightly-packed RGBA8 buffer: (pixels, width, height, stride).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.render_to_canvas(opts, surface.canvas())?;
        surface_to_rgba8(&mut surface)
    }

    /// Render to in-memory PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.render_to_canvas(opts, surface.canvas())?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

/// Read a raster surface back as a tightly-packed RGBA8 buffer.
pub fn surface_to_rgba8(surface: &mut skia::Surface) -> Result<(Vec<u8>, i32, i32, usize)> {
    let (w, h) = (surface.width(), surface.height());
    let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Premul, None);
    let stride = w as usize * 4;
    let mut pixels = vec![0u8; stride * h as usize];
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        anyhow::bail!("read pixels from raster surface failed");
    }
    Ok((pixels, w, h, stride))
}

// ---- helpers ----------------------------------------------------------------

fn plot_rect(opts: &RenderOptions) -> RectI32 {
    let left = opts.insets.left as i32;
    let top = opts.insets.top as i32;
    let right = (opts.width - opts.insets.right as i32).max(left + 1);
    let bottom = (opts.height - opts.insets.bottom as i32).max(top + 1);
    RectI32::from_ltrb(left, top, right, bottom)
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

/// Per-slot color: explicit slot override, then the series color, then the
/// theme palette cycled by `fallback`.
fn slot_color(series: &Series, slot: usize, fallback: usize, theme: &Theme) -> skia::Color {
    series
        .category_colors
        .get(slot)
        .copied()
        .or(series.color)
        .unwrap_or(theme.palette[fallback % theme.palette.len()])
}

fn shorten(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        return label.to_string();
    }
    let mut out: String = label.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn draw_grid(canvas: &skia::Canvas, plot: &RectI32, y_axis: &Axis, y_scale: &ValueScale, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    // verticals
    for x in linspace(plot.left as f64, plot.right as f64, 9) {
        canvas.draw_line((x as f32, plot.top as f32), (x as f32, plot.bottom as f32), &paint);
    }
    // horizontals: decade positions for log scales, even pixel spacing otherwise
    match y_axis.kind {
        ScaleKind::Log10 => {
            for v in log_ticks(y_axis.min, y_axis.max) {
                let y = y_scale.to_px(v);
                canvas.draw_line((plot.left as f32, y), (plot.right as f32, y), &paint);
            }
        }
        ScaleKind::Linear => {
            for y in linspace(plot.top as f64, plot.bottom as f64, 6) {
                canvas.draw_line((plot.left as f32, y as f32), (plot.right as f32, y as f32), &paint);
            }
        }
    }
}

fn draw_axis_lines(canvas: &skia::Canvas, plot: &RectI32, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.axis_line);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.5);

    canvas.draw_line(
        (plot.left as f32, plot.bottom as f32),
        (plot.right as f32, plot.bottom as f32),
        &paint,
    );
    canvas.draw_line(
        (plot.left as f32, plot.top as f32),
        (plot.left as f32, plot.bottom as f32),
        &paint,
    );
}

fn draw_axis_labels(
    canvas: &skia::Canvas,
    plot: &RectI32,
    x_axis: &Axis,
    y_axis: &Axis,
    theme: &Theme,
    shaper: &TextShaper,
) {
    if !x_axis.label.is_empty() {
        shaper.draw_centered(
            canvas,
            &x_axis.label,
            plot.center_x(),
            plot.bottom as f32 + 46.0,
            14.0,
            theme.axis_label,
        );
    }
    if !y_axis.label.is_empty() {
        shaper.draw_left(canvas, &y_axis.label, 8.0, plot.top as f32 - 10.0, 14.0, theme.axis_label);
    }
}

/// Stacked vertical bars: every Bar series contributes one segment per
/// category slot. Zero-height segments are skipped, which also keeps log
/// scales out of trouble when a bin is empty.
fn draw_bar_series(
    canvas: &skia::Canvas,
    plot: &RectI32,
    bars: &[&Series],
    y_scale: &ValueScale,
    theme: &Theme,
    shaper: Option<&TextShaper>,
) {
    let n = bars[0].categories.len();
    if n == 0 {
        return;
    }
    let slot_w = plot.width() as f32 / n as f32;
    let bar_w = (slot_w * 0.7).max(1.0);

    for slot in 0..n {
        let cx = plot.left as f32 + slot_w * (slot as f32 + 0.5);
        let mut acc = 0.0f64;
        for (si, s) in bars.iter().enumerate() {
            let v = s.value_at(slot);
            if v <= 0.0 {
                continue;
            }
            let base_px = if acc == 0.0 { plot.bottom as f32 } else { y_scale.to_px(acc) };
            let top_px = y_scale.to_px(acc + v).min(base_px - 1.0);
            let rect = skia::Rect::from_ltrb(cx - bar_w * 0.5, top_px, cx + bar_w * 0.5, base_px);
            canvas.draw_rect(rect, &fill_paint(slot_color(s, slot, si, theme)));
            acc += v;
        }
        if let Some(sh) = shaper {
            sh.draw_centered(
                canvas,
                &shorten(&bars[0].categories[slot], 16),
                cx,
                plot.bottom as f32 + 22.0,
                12.0,
                theme.axis_label,
            );
        }
    }
}

/// Horizontal bars: one per category, length along the x scale.
fn draw_hbar_series(
    canvas: &skia::Canvas,
    plot: &RectI32,
    series: &Series,
    x_scale: &ValueScale,
    theme: &Theme,
    shaper: Option<&TextShaper>,
) {
    let n = series.categories.len();
    if n == 0 {
        return;
    }
    let slot_h = plot.height() as f32 / n as f32;
    let bar_h = (slot_h * 0.6).max(1.0);

    for slot in 0..n {
        let cy = plot.top as f32 + slot_h * (slot as f32 + 0.5);
        let v = series.value_at(slot);
        let right_px = x_scale.to_px(v).max(plot.left as f32 + 1.0);
        let rect = skia::Rect::from_ltrb(plot.left as f32, cy - bar_h * 0.5, right_px, cy + bar_h * 0.5);
        canvas.draw_rect(rect, &fill_paint(slot_color(series, slot, 0, theme)));
        if let Some(sh) = shaper {
            sh.draw_left(
                canvas,
                &shorten(&series.categories[slot], 24),
                plot.left as f32 + 6.0,
                cy + 5.0,
                12.0,
                theme.title,
            );
        }
    }
}

/// Pie: one filled wedge per positive slice, clockwise from 12 o'clock,
/// with the slice label outside and its percentage share inside.
fn draw_pie_series(
    canvas: &skia::Canvas,
    plot: &RectI32,
    series: &Series,
    theme: &Theme,
    shaper: Option<&TextShaper>,
) {
    let total: f64 = (0..series.categories.len()).map(|i| series.value_at(i)).sum();
    if total <= 0.0 {
        return;
    }

    let (cx, cy) = (plot.center_x(), plot.center_y());
    let radius = (plot.width().min(plot.height()) as f32 * 0.38).max(10.0);
    let oval = skia::Rect::from_ltrb(cx - radius, cy - radius, cx + radius, cy + radius);

    let mut start = -90.0f32;
    for slot in 0..series.categories.len() {
        let v = series.value_at(slot);
        if v <= 0.0 {
            continue;
        }
        let sweep = (v / total * 360.0) as f32;
        canvas.draw_arc(oval, start, sweep, true, &fill_paint(slot_color(series, slot, slot, theme)));

        if let Some(sh) = shaper {
            let mid = (start + sweep * 0.5).to_radians();
            let (dx, dy) = (mid.cos(), mid.sin());

            let lx = cx + dx * (radius + 14.0);
            let ly = cy + dy * (radius + 14.0);
            let label = shorten(&series.categories[slot], 20);
            let w = sh.measure_width(&label, 12.0);
            let anchor = if dx < 0.0 { lx - w } else { lx };
            sh.draw_left(canvas, &label, anchor, ly + 4.0, 12.0, theme.axis_label);

            let pct = format!("{:.1}%", v / total * 100.0);
            sh.draw_centered(canvas, &pct, cx + dx * radius * 0.6, cy + dy * radius * 0.6 + 4.0, 12.0, theme.title);
        }
        start += sweep;
    }
}

fn draw_scatter_series(
    canvas: &skia::Canvas,
    plot: &RectI32,
    series: &Series,
    x_scale: &ValueScale,
    y_scale: &ValueScale,
    theme: &Theme,
) {
    if series.points.is_empty() {
        return;
    }
    let paint = fill_paint(slot_color(series, 0, 0, theme));
    for &(x, y) in &series.points {
        let px = x_scale.to_px(x);
        let py = y_scale.to_px(y);
        if px >= plot.left as f32 && px <= plot.right as f32 && py >= plot.top as f32 && py <= plot.bottom as f32 {
            canvas.draw_circle((px, py), 4.0, &paint);
        }
    }
}

fn draw_legend(canvas: &skia::Canvas, plot: &RectI32, series: &[Series], theme: &Theme, shaper: &TextShaper) {
    let entries: Vec<&Series> = series.iter().filter(|s| !s.name.is_empty()).collect();
    if entries.is_empty() {
        return;
    }
    let x = plot.right as f32 - 160.0;
    let mut y = plot.top as f32 + 14.0;
    for (i, s) in entries.iter().enumerate() {
        let swatch = skia::Rect::from_ltrb(x, y - 10.0, x + 12.0, y + 2.0);
        canvas.draw_rect(swatch, &fill_paint(slot_color(s, 0, i, theme)));
        shaper.draw_left(canvas, &s.name, x + 18.0, y + 3.0, 12.0, theme.axis_label);
        y += 18.0;
    }
}
