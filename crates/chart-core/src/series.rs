// File: crates/chart-core/src/series.rs
// Summary: Series model for bar, horizontal bar, pie, and scatter data.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesType {
    Bar,           // vertical bars over category slots; multiple Bar series stack
    HorizontalBar, // one horizontal bar per category
    Pie,           // one slice per category
    Scatter,       // (x, y) points
}

/// One drawable series. Bar/HorizontalBar/Pie use `categories` + `values`
/// (index-aligned); Scatter uses `points`.
#[derive(Clone, Debug)]
pub struct Series {
    pub series_type: SeriesType,
    pub name: String, // legend entry; empty names are skipped by the legend
    pub categories: Vec<String>,
    pub values: Vec<f64>,
    pub points: Vec<(f64, f64)>,
    pub color: Option<skia::Color>,
    pub category_colors: Vec<skia::Color>, // per-slot override; wins over `color`
}

impl Series {
    fn empty(series_type: SeriesType, name: impl Into<String>) -> Self {
        Self {
            series_type,
            name: name.into(),
            categories: Vec::new(),
            values: Vec::new(),
            points: Vec::new(),
            color: None,
            category_colors: Vec::new(),
        }
    }

    pub fn bar(name: impl Into<String>, categories: Vec<String>, values: Vec<f64>) -> Self {
        let mut s = Self::empty(SeriesType::Bar, name);
        s.categories = categories;
        s.values = values;
        s
    }

    pub fn horizontal_bar(name: impl Into<String>, categories: Vec<String>, values: Vec<f64>) -> Self {
        let mut s = Self::empty(SeriesType::HorizontalBar, name);
        s.categories = categories;
        s.values = values;
        s
    }

    pub fn pie(name: impl Into<String>, categories: Vec<String>, values: Vec<f64>) -> Self {
        let mut s = Self::empty(SeriesType::Pie, name);
        s.categories = categories;
        s.values = values;
        s
    }

    pub fn scatter(name: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        let mut s = Self::empty(SeriesType::Scatter, name);
        s.points = points;
        s
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_category_colors(mut self, colors: Vec<skia::Color>) -> Self {
        self.category_colors = colors;
        self
    }

    /// Number of drawable slots (categories, or points for scatter).
    pub fn len(&self) -> usize {
        match self.series_type {
            SeriesType::Scatter => self.points.len(),
            _ => self.categories.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value at a slot; absent or negative values count as zero.
    pub fn value_at(&self, slot: usize) -> f64 {
        self.values.get(slot).copied().unwrap_or(0.0).max(0.0)
    }
}
