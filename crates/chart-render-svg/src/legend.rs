// File: crates/chart-render-svg/src/legend.rs
// Summary: Swatch + label legend rows for categorical charts.

use chart_core::config::Fill;
use chart_core::datum::CategoricalDatum;
use chart_core::format::truncate_label;
use chart_core::geometry::round3;
use chart_core::Theme;

use crate::node::Node;

/// One swatch + "name: value" row per datum, zero-value entries included.
pub(crate) fn legend(
    data: &[CategoricalDatum],
    fill: &Fill,
    width: f64,
    theme: &Theme,
) -> Node {
    let mut g = Node::new("g")
        .attr("class", "legend")
        .attr("transform", format!("translate({}, 20)", round3(width - 100.0)));
    for (i, d) in data.iter().enumerate() {
        let y = i as f64 * 20.0;
        g = g
            .child(
                Node::new("rect")
                    .attr_px("x", 0.0)
                    .attr_px("y", y)
                    .attr("width", 12)
                    .attr("height", 12)
                    .attr("fill", fill.resolve(d, i)),
            )
            .child(
                Node::new("text")
                    .attr_px("x", 20.0)
                    .attr_px("y", y + 10.0)
                    .attr("fill", theme.text_secondary)
                    .attr("font-size", "12px")
                    .text(format!("{}: {}", truncate_label(&d.name, 15, 12), d.value)),
            );
    }
    g
}
