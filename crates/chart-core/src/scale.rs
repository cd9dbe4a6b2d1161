// File: crates/chart-core/src/scale.rs
// Summary: Linear and log10 mapping from values to pixels along one axis.

use crate::axis::{Axis, ScaleKind};

/// Maps [vmin, vmax] onto the pixel span [px_lo, px_hi]. `vmin` lands on
/// `px_lo`, so pass (bottom, top) for a y axis and (left, right) for x.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    px_lo: f32,
    px_hi: f32,
    vmin: f64,
    vmax: f64,
    log: bool,
    // cached log endpoints when log is true
    log_min: f64,
    log_max: f64,
}

impl ValueScale {
    pub fn linear(px_lo: f32, px_hi: f32, vmin: f64, mut vmax: f64) -> Self {
        if (vmax - vmin).abs() < 1e-12 { vmax = vmin + 1.0; }
        Self { px_lo, px_hi, vmin, vmax, log: false, log_min: 0.0, log_max: 0.0 }
    }

    pub fn log10(px_lo: f32, px_hi: f32, mut vmin: f64, mut vmax: f64) -> Self {
        // Ensure strictly positive range for log scale
        let eps = 1e-12;
        vmin = if vmin <= eps { eps } else { vmin };
        vmax = if vmax <= vmin { vmin * 10.0 } else { vmax };
        Self { px_lo, px_hi, vmin, vmax, log: true, log_min: vmin.log10(), log_max: vmax.log10() }
    }

    pub fn from_axis(axis: &Axis, px_lo: f32, px_hi: f32) -> Self {
        match axis.kind {
            ScaleKind::Linear => Self::linear(px_lo, px_hi, axis.min, axis.max),
            ScaleKind::Log10 => Self::log10(px_lo, px_hi, axis.min, axis.max),
        }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let frac = if self.log {
            let span = (self.log_max - self.log_min).max(1e-12);
            (v.max(1e-12).log10() - self.log_min) / span
        } else {
            (v - self.vmin) / (self.vmax - self.vmin)
        };
        self.px_lo + frac as f32 * (self.px_hi - self.px_lo)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        let frac = ((px - self.px_lo) / (self.px_hi - self.px_lo)) as f64;
        if self.log {
            10f64.powf(self.log_min + frac * (self.log_max - self.log_min).max(1e-12))
        } else {
            self.vmin + frac * (self.vmax - self.vmin)
        }
    }
}
