// File: crates/sales-app/src/ui.rs
// Summary: Frame composition: selector rows, chart area, status line, hit testing.

use chart_core::geometry::RectI32;
use chart_core::{surface_to_rgba8, RenderOptions, TextShaper, Theme};
use log::warn;
use sales_charts::{render, ChartKind};
use sales_data::{IngestHandle, IngestStatus, SalesStore};
use skia_safe as skia;
use thiserror::Error;

pub const TOOLBAR_HEIGHT: i32 = 80;
pub const STATUS_HEIGHT: i32 = 26;
const ROW_HEIGHT: i32 = 34;
const BUTTON_WIDTH: i32 = 124;
const BUTTON_GAP: i32 = 8;
const GROUP_LABEL_WIDTH: i32 = 200;

const LOADING_MSG: &str = "loading sales data…";

/// Surface-level failures; caught in the event loop and shown in the status
/// line rather than propagated.
#[derive(Debug, Error)]
pub enum UiError {
    #[error("window surface has zero size")]
    ZeroSize,
    #[error("could not create a drawing surface")]
    SurfaceUnavailable,
    #[error("frame buffer unavailable: {0}")]
    Buffer(String),
    #[error("present failed: {0}")]
    Present(String),
}

/// One selector row: a group label plus three chart options.
pub struct SelectorRow {
    pub label: &'static str,
    pub options: [ChartKind; 3],
    pub selected: Option<usize>,
    y: i32,
}

pub struct AppUi {
    pub rows: [SelectorRow; 2],
    /// The chart currently shown; the most recent click in either row wins.
    pub active: Option<ChartKind>,
    pub status: String,
    theme: Theme,
    shaper: TextShaper,
}

impl AppUi {
    pub fn new() -> Self {
        Self {
            rows: [
                SelectorRow {
                    label: "Top 5 Alcohols Stats",
                    options: ChartKind::TOP_FIVE,
                    selected: None,
                    y: 6,
                },
                SelectorRow {
                    label: "Retail vs Warehouse Stats",
                    options: ChartKind::COMPARISON,
                    selected: None,
                    y: 6 + ROW_HEIGHT,
                },
            ],
            active: None,
            status: LOADING_MSG.to_string(),
            theme: Theme::dark(),
            shaper: TextShaper::new(),
        }
    }

    /// Hit-test a click against the selector buttons; returns the newly
    /// selected kind, if any. Re-clicking the current option re-renders.
    pub fn click(&mut self, x: f64, y: f64) -> Option<ChartKind> {
        for row in &mut self.rows {
            for (i, kind) in row.options.iter().enumerate() {
                if button_rect(row.y, i).contains(x, y) {
                    row.selected = Some(i);
                    self.active = Some(*kind);
                    return Some(*kind);
                }
            }
        }
        None
    }

    /// Refresh the status line from the background ingest.
    pub fn poll_ingest(&mut self, handle: &IngestHandle) {
        match handle.status() {
            IngestStatus::Running => {
                if self.status.is_empty() {
                    self.status = LOADING_MSG.to_string();
                }
            }
            IngestStatus::Done => {
                if self.status == LOADING_MSG {
                    self.status.clear();
                }
            }
            IngestStatus::Failed(msg) => self.status = msg,
        }
    }

    /// Compose one frame and return tightly-packed RGBA pixels for the blit.
    pub fn draw_frame(
        &mut self,
        width: i32,
        height: i32,
        store: &SalesStore,
    ) -> Result<(Vec<u8>, i32, i32), UiError> {
        if width <= 0 || height <= 0 {
            return Err(UiError::ZeroSize);
        }
        let mut surface =
            skia::surfaces::raster_n32_premul((width, height)).ok_or(UiError::SurfaceUnavailable)?;
        let canvas = surface.canvas();
        canvas.clear(self.theme.background);
        self.draw_toolbar(canvas, width);

        let chart_height = height - TOOLBAR_HEIGHT - STATUS_HEIGHT;
        if let (Some(kind), true) = (self.active, chart_height > 40) {
            let mut opts = RenderOptions::default();
            opts.width = width;
            opts.height = chart_height;
            opts.theme = self.theme;

            canvas.save();
            canvas.translate((0.0, TOOLBAR_HEIGHT as f32));
            canvas.clip_rect(
                skia::Rect::from_ltrb(0.0, 0.0, width as f32, chart_height as f32),
                None,
                None,
            );
            match render(kind, store, &opts, canvas) {
                Ok(()) => self.status.clear(),
                Err(e) => {
                    warn!("render {:?} failed: {e}", kind);
                    self.status = e.to_string();
                }
            }
            canvas.restore();
        }

        self.draw_status(canvas, width, height);

        let (pixels, w, h, _stride) =
            surface_to_rgba8(&mut surface).map_err(|e| UiError::Buffer(e.to_string()))?;
        Ok((pixels, w, h))
    }

    fn draw_toolbar(&self, canvas: &skia::Canvas, width: i32) {
        let mut panel = skia::Paint::default();
        panel.set_color(self.theme.panel);
        canvas.draw_rect(
            skia::Rect::from_ltrb(0.0, 0.0, width as f32, TOOLBAR_HEIGHT as f32),
            &panel,
        );

        for row in &self.rows {
            let mid = (row.y + ROW_HEIGHT / 2) as f32;
            self.shaper
                .draw_left(canvas, row.label, 12.0, mid + 5.0, 14.0, self.theme.axis_label);
            for (i, kind) in row.options.iter().enumerate() {
                let r = button_rect(row.y, i);
                let rect =
                    skia::Rect::from_ltrb(r.left as f32, r.top as f32, r.right as f32, r.bottom as f32);
                let mut fill = skia::Paint::default();
                fill.set_anti_alias(true);
                fill.set_color(if row.selected == Some(i) {
                    self.theme.accent
                } else {
                    self.theme.grid
                });
                canvas.draw_round_rect(rect, 6.0, 6.0, &fill);
                self.shaper.draw_centered(
                    canvas,
                    kind.label(),
                    rect.center_x(),
                    rect.center_y() + 5.0,
                    13.0,
                    self.theme.title,
                );
            }
        }
    }

    fn draw_status(&self, canvas: &skia::Canvas, width: i32, height: i32) {
        let top = (height - STATUS_HEIGHT) as f32;
        let mut panel = skia::Paint::default();
        panel.set_color(self.theme.panel);
        canvas.draw_rect(skia::Rect::from_ltrb(0.0, top, width as f32, height as f32), &panel);
        if !self.status.is_empty() {
            self.shaper.draw_left(
                canvas,
                &self.status,
                12.0,
                height as f32 - 8.0,
                13.0,
                self.theme.axis_label,
            );
        }
    }
}

impl Default for AppUi {
    fn default() -> Self {
        Self::new()
    }
}

fn button_rect(y: i32, i: usize) -> RectI32 {
    let left = GROUP_LABEL_WIDTH + i as i32 * (BUTTON_WIDTH + BUTTON_GAP);
    RectI32::from_ltrb(left, y, left + BUTTON_WIDTH, y + ROW_HEIGHT - 6)
}
