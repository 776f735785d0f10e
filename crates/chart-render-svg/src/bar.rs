// File: crates/chart-render-svg/src/bar.rs
// Summary: Bar chart construction: slot layout, bars, value labels, axes.

use chart_core::config::{BarOptions, Fill};
use chart_core::datum::CategoricalDatum;
use chart_core::geometry::round3;
use chart_core::{LinearScale, Theme};

use crate::axis::{category_x_axis, no_data_text, title_text, value_y_axis};
use crate::node::Node;

const GROW_DUR_S: f64 = 0.5;

pub(crate) fn build(
    surface_w: f64,
    surface_h: f64,
    data: &[CategoricalDatum],
    opts: &BarOptions,
    theme: &Theme,
) -> Node {
    let width = opts.width.unwrap_or(surface_w);
    let height = opts.height.unwrap_or(surface_h);
    let chart_w = (width - opts.margin.left - opts.margin.right).max(0.0);
    let chart_h = (height - opts.margin.top - opts.margin.bottom).max(0.0);

    let svg = Node::new("svg")
        .attr("xmlns", "http://www.w3.org/2000/svg")
        .attr_px("width", width)
        .attr_px("height", height)
        .attr("style", "overflow: visible;");
    let mut chart = Node::new("g").attr(
        "transform",
        format!("translate({},{})", round3(opts.margin.left), round3(opts.margin.top)),
    );

    if data.is_empty() {
        return svg.child(chart.child(no_data_text(chart_w, chart_h, theme)));
    }

    if let Some(title) = &opts.title {
        chart = chart.child(title_text(title, chart_w / 2.0, -opts.margin.top / 2.0, theme));
    }

    let fill = opts
        .bar_fill
        .clone()
        .unwrap_or_else(|| Fill::Cycle(theme.palette_vec()));

    // Degenerate max <= 0 collapses the scale, so every bar sits on the baseline.
    let max_value = data
        .iter()
        .map(|d| d.value)
        .fold(f64::NEG_INFINITY, f64::max)
        .max(0.0);
    let scale = LinearScale::new((0.0, max_value), (0.0, chart_h));

    let slot = chart_w / data.len() as f64;
    let bar_w = slot * (1.0 - opts.bar_padding);

    chart = chart
        .child(category_x_axis(data, chart_w, chart_h, theme))
        .child(value_y_axis(max_value, chart_w, chart_h, theme));

    for (i, d) in data.iter().enumerate() {
        let bar_h = scale.map(d.value).clamp(0.0, chart_h);
        let x = slot * i as f64 + slot * opts.bar_padding / 2.0;
        let y = chart_h - bar_h;

        let mut bar = Node::new("rect")
            .attr_px("x", x)
            .attr_px("width", bar_w)
            .attr("fill", fill.resolve(d, i))
            .attr("data-tooltip", format!("{}: {}", d.name, d.value));
        if opts.animate {
            // bars grow out of the baseline; the frozen animation holds the end state
            bar = bar
                .attr_px("y", chart_h)
                .attr_px("height", 0.0)
                .animate("y", round3(chart_h), round3(y), GROW_DUR_S)
                .animate("height", 0, round3(bar_h), GROW_DUR_S);
        } else {
            bar = bar.attr_px("y", y).attr_px("height", bar_h);
        }
        chart = chart.child(bar);

        if opts.show_values {
            let mut label = Node::new("text")
                .attr_px("x", x + bar_w / 2.0)
                .attr_px("y", y - 5.0)
                .attr("text-anchor", "middle")
                .attr("fill", theme.text_secondary)
                .attr("font-size", "12px")
                .text(d.value.to_string());
            if opts.animate {
                label = label.attr("opacity", 0).animate("opacity", 0, 1, GROW_DUR_S);
            }
            chart = chart.child(label);
        }
    }

    svg.child(chart)
}
