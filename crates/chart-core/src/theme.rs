// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub panel: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub title: skia::Color,
    pub accent: skia::Color,
    /// Fallback series colors, cycled by slot.
    pub palette: [skia::Color; 6],
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 24, 24, 27),
            panel: skia::Color::from_argb(255, 34, 34, 39),
            grid: skia::Color::from_argb(255, 48, 48, 54),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 210, 210, 220),
            title: skia::Color::from_argb(255, 240, 240, 245),
            accent: skia::Color::from_argb(255, 64, 160, 255),
            palette: [
                skia::Color::from_argb(255, 0x1f, 0x77, 0xb4), // blue
                skia::Color::from_argb(255, 0xff, 0x7f, 0x0e), // orange
                skia::Color::from_argb(255, 0x2c, 0xa0, 0x2c), // green
                skia::Color::from_argb(255, 0xd6, 0x27, 0x28), // red
                skia::Color::from_argb(255, 0x94, 0x67, 0xbd), // purple
                skia::Color::from_argb(255, 0x87, 0xce, 0xeb), // sky blue
            ],
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            panel: skia::Color::from_argb(255, 238, 238, 242),
            grid: skia::Color::from_argb(255, 225, 225, 232),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 50, 50, 60),
            title: skia::Color::from_argb(255, 20, 20, 30),
            accent: skia::Color::from_argb(255, 30, 120, 240),
            palette: [
                skia::Color::from_argb(255, 0x1f, 0x77, 0xb4),
                skia::Color::from_argb(255, 0xff, 0x7f, 0x0e),
                skia::Color::from_argb(255, 0x2c, 0xa0, 0x2c),
                skia::Color::from_argb(255, 0xd6, 0x27, 0x28),
                skia::Color::from_argb(255, 0x94, 0x67, 0xbd),
                skia::Color::from_argb(255, 0x46, 0x82, 0xb4), // steel blue
            ],
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) { return t; }
    }
    Theme::dark()
}
