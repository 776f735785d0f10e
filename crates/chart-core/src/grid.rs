// File: crates/chart-core/src/grid.rs
// Summary: Tick layout helpers.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 {
        return vec![start, end];
    }
    let step = (end - start) / (steps - 1) as f64;
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Evenly spaced tick positions over `range` paired with the domain value
/// at each position, endpoints included.
pub fn ticks(domain: (f64, f64), range: (f64, f64), count: usize) -> Vec<(f64, f64)> {
    linspace(range.0, range.1, count)
        .into_iter()
        .zip(linspace(domain.0, domain.1, count))
        .collect()
}
