// File: crates/chart-core/src/grid.rs
// Summary: Grid line placement helpers.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Powers of ten inside [min, max]; grid positions for a log10 axis.
pub fn log_ticks(min: f64, max: f64) -> Vec<f64> {
    let lo = min.max(1e-12);
    let hi = max.max(lo);
    let first = lo.log10().floor() as i32;
    let last = hi.log10().ceil() as i32;
    let mut out = Vec::new();
    for e in first..=last {
        let v = 10f64.powi(e);
        if v >= lo && v <= hi { out.push(v); }
    }
    out
}
