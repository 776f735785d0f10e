// File: crates/chart-core/src/geometry.rs
// Summary: Angle math and SVG path-data assembly for slices, polylines, and areas.

use std::fmt::Write as _;

/// Trim float noise out of coordinates; three decimals is below a pixel.
pub fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

/// Point on a circle. Angles are degrees measured clockwise from 12 o'clock.
pub fn polar_point(cx: f64, cy: f64, radius: f64, angle_deg: f64) -> (f64, f64) {
    let rad = (angle_deg - 90.0).to_radians();
    (cx + radius * rad.cos(), cy + radius * rad.sin())
}

/// Path data for one pie slice spanning `start_deg..end_deg`.
/// `inner_radius > 0` cuts a donut hole with a matching inner arc;
/// otherwise the slice closes through the center.
pub fn slice_path(
    cx: f64,
    cy: f64,
    radius: f64,
    start_deg: f64,
    end_deg: f64,
    inner_radius: f64,
) -> String {
    let (sx, sy) = polar_point(cx, cy, radius, start_deg);
    let (ex, ey) = polar_point(cx, cy, radius, end_deg);
    let large_arc = if end_deg - start_deg > 180.0 { 1 } else { 0 };

    let mut d = String::new();
    let _ = write!(d, "M {} {}", round3(sx), round3(sy));
    let _ = write!(
        d,
        " A {} {} 0 {} 1 {} {}",
        round3(radius),
        round3(radius),
        large_arc,
        round3(ex),
        round3(ey)
    );
    if inner_radius > 0.0 {
        let (isx, isy) = polar_point(cx, cy, inner_radius, end_deg);
        let (iex, iey) = polar_point(cx, cy, inner_radius, start_deg);
        let _ = write!(d, " L {} {}", round3(isx), round3(isy));
        let _ = write!(
            d,
            " A {} {} 0 {} 0 {} {}",
            round3(inner_radius),
            round3(inner_radius),
            large_arc,
            round3(iex),
            round3(iey)
        );
        d.push_str(" Z");
    } else {
        let _ = write!(d, " L {} {}", round3(cx), round3(cy));
        d.push_str(" Z");
    }
    d
}

/// "M x y L x y ..." through the points in the order given.
pub fn polyline_path(points: &[(f64, f64)]) -> String {
    let mut d = String::new();
    for (i, &(x, y)) in points.iter().enumerate() {
        if i == 0 {
            let _ = write!(d, "M {} {}", round3(x), round3(y));
        } else {
            let _ = write!(d, " L {} {}", round3(x), round3(y));
        }
    }
    d
}

/// Polyline closed down to `baseline_y` at the last and first X positions.
pub fn area_path(points: &[(f64, f64)], baseline_y: f64) -> String {
    if points.is_empty() {
        return String::new();
    }
    let mut d = polyline_path(points);
    let last = points[points.len() - 1];
    let first = points[0];
    let _ = write!(d, " L {} {}", round3(last.0), round3(baseline_y));
    let _ = write!(d, " L {} {}", round3(first.0), round3(baseline_y));
    d.push_str(" Z");
    d
}

/// Total length of the polyline; sizes the stroke-reveal dash.
pub fn polyline_length(points: &[(f64, f64)]) -> f64 {
    points
        .windows(2)
        .map(|w| {
            let (dx, dy) = (w[1].0 - w[0].0, w[1].1 - w[0].1);
            (dx * dx + dy * dy).sqrt()
        })
        .sum()
}
