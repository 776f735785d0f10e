// File: crates/chart-render-svg/src/pie.rs
// Summary: Pie/donut construction: slice paths, percentage labels, legend.

use chart_core::config::{Fill, PieOptions};
use chart_core::datum::CategoricalDatum;
use chart_core::geometry::{polar_point, round3, slice_path};
use chart_core::Theme;

use crate::axis::{no_data_text, title_text};
use crate::legend::legend;
use crate::node::Node;

/// Slices below this share of the total get no percentage label.
pub const PIE_LABEL_MIN_FRACTION: f64 = 0.05;

const SLICE_FADE_DUR_S: f64 = 0.5;
const LABEL_FADE_DUR_S: f64 = 0.7;

pub(crate) fn build(
    surface_w: f64,
    surface_h: f64,
    data: &[CategoricalDatum],
    opts: &PieOptions,
    theme: &Theme,
) -> Node {
    let width = opts.width.unwrap_or(surface_w);
    let height = opts.height.unwrap_or(surface_h);
    let radius = opts
        .radius
        .unwrap_or(width.min(height) / 2.0 - 40.0)
        .max(0.0);

    let mut svg = Node::new("svg")
        .attr("xmlns", "http://www.w3.org/2000/svg")
        .attr_px("width", width)
        .attr_px("height", height)
        .attr("style", "overflow: visible;");

    // A non-positive total has no angular layout; placeholder instead.
    let total: f64 = data.iter().map(|d| d.value).sum();
    if data.is_empty() || total <= 0.0 {
        return svg.child(no_data_text(width, height, theme));
    }

    if let Some(title) = &opts.title {
        svg = svg.child(title_text(title, width / 2.0, 18.0, theme));
    }

    let fill = opts
        .slice_fill
        .clone()
        .unwrap_or_else(|| Fill::Cycle(theme.palette_vec()));
    let inner = if opts.donut { radius * opts.donut_ratio } else { 0.0 };

    let mut chart = Node::new("g").attr(
        "transform",
        format!("translate({},{})", round3(width / 2.0), round3(height / 2.0)),
    );

    let mut start = 0.0_f64;
    for (i, d) in data.iter().enumerate() {
        if d.value <= 0.0 {
            // no slice; the legend still lists it
            continue;
        }
        let span = d.value / total * 360.0;
        let end = start + span;
        let pct = (d.value / total * 100.0).round();

        let mut slice = Node::new("path")
            .attr("d", slice_path(0.0, 0.0, radius, start, end, inner))
            .attr("fill", fill.resolve(d, i))
            .attr("stroke", theme.background)
            .attr("stroke-width", "1")
            .attr("data-tooltip", format!("{}: {} ({}%)", d.name, d.value, pct));
        if opts.animate {
            slice = slice.attr("opacity", 0).animate("opacity", 0, 1, SLICE_FADE_DUR_S);
        }
        chart = chart.child(slice);

        if opts.show_labels && d.value / total >= PIE_LABEL_MIN_FRACTION {
            let mid = start + span / 2.0;
            let (lx, ly) = polar_point(0.0, 0.0, radius * 0.7, mid);
            let mut label = Node::new("text")
                .attr_px("x", lx)
                .attr_px("y", ly)
                .attr("text-anchor", "middle")
                .attr("alignment-baseline", "middle")
                .attr("fill", theme.text_primary)
                .attr("font-size", "12px")
                .text(format!("{}%", pct));
            if opts.animate {
                label = label.attr("opacity", 0).animate("opacity", 0, 1, LABEL_FADE_DUR_S);
            }
            chart = chart.child(label);
        }
        start = end;
    }

    svg = svg.child(chart);
    if opts.show_labels {
        svg = svg.child(legend(data, &fill, width, theme));
    }
    svg
}
