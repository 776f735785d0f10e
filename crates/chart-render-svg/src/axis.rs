// File: crates/chart-render-svg/src/axis.rs
// Summary: Shared chart chrome: axes, ticks, gridlines, titles, and the empty-state text.

use chart_core::datum::CategoricalDatum;
use chart_core::format::{format_grouped, format_tick_date, format_value_k, truncate_label};
use chart_core::grid::ticks;
use chart_core::Theme;

use crate::node::Node;

/// X axis for categorical charts: baseline plus up to five name ticks.
pub(crate) fn category_x_axis(
    data: &[CategoricalDatum],
    width: f64,
    height: f64,
    theme: &Theme,
) -> Node {
    let mut g = Node::new("g").attr("class", "x-axis").child(
        Node::new("line")
            .attr_px("x1", 0.0)
            .attr_px("y1", height)
            .attr_px("x2", width)
            .attr_px("y2", height)
            .attr("stroke", theme.grid)
            .attr("stroke-width", "1"),
    );

    let tick_count = data.len().min(5);
    if tick_count <= 1 {
        return g;
    }
    for i in 0..tick_count {
        let frac = i as f64 / (tick_count as f64 - 1.0);
        let x = width * frac;
        g = g.child(
            Node::new("line")
                .attr_px("x1", x)
                .attr_px("y1", height)
                .attr_px("x2", x)
                .attr_px("y2", height + 5.0)
                .attr("stroke", theme.grid)
                .attr("stroke-width", "1"),
        );
        let index = ((data.len() - 1) as f64 * frac).floor() as usize;
        g = g.child(
            Node::new("text")
                .attr_px("x", x)
                .attr_px("y", height + 15.0)
                .attr("text-anchor", "middle")
                .attr("fill", theme.text_secondary)
                .attr("font-size", "10px")
                .text(truncate_label(&data[index].name, 10, 8)),
        );
    }
    g
}

/// Y axis for value charts: five ticks with k-suffix labels and dashed
/// gridlines across the plot.
pub(crate) fn value_y_axis(max_value: f64, width: f64, height: f64, theme: &Theme) -> Node {
    let mut g = Node::new("g").attr("class", "y-axis").child(
        Node::new("line")
            .attr_px("x1", 0.0)
            .attr_px("y1", 0.0)
            .attr_px("x2", 0.0)
            .attr_px("y2", height)
            .attr("stroke", theme.grid)
            .attr("stroke-width", "1"),
    );

    for (y, value) in ticks((0.0, max_value), (height, 0.0), 5) {
        g = g
            .child(
                Node::new("line")
                    .attr_px("x1", -5.0)
                    .attr_px("y1", y)
                    .attr_px("x2", 0.0)
                    .attr_px("y2", y)
                    .attr("stroke", theme.grid)
                    .attr("stroke-width", "1"),
            )
            .child(
                Node::new("line")
                    .attr_px("x1", 0.0)
                    .attr_px("y1", y)
                    .attr_px("x2", width)
                    .attr_px("y2", y)
                    .attr("stroke", theme.grid)
                    .attr("stroke-width", "0.5")
                    .attr("stroke-dasharray", "2,2"),
            )
            .child(
                Node::new("text")
                    .attr_px("x", -10.0)
                    .attr_px("y", y)
                    .attr("text-anchor", "end")
                    .attr("alignment-baseline", "middle")
                    .attr("fill", theme.text_secondary)
                    .attr("font-size", "10px")
                    .text(format_value_k(value)),
            );
    }
    g
}

/// Axes for time-series charts: date ticks along X, grouped numeric ticks
/// along Y, optional axis caption strings.
pub(crate) fn time_value_axes(
    x_domain: (f64, f64),
    y_domain: (f64, f64),
    width: f64,
    height: f64,
    x_label: Option<&str>,
    y_label: Option<&str>,
    theme: &Theme,
) -> Node {
    let mut g = Node::new("g")
        .attr("class", "axes")
        .child(
            Node::new("line")
                .attr_px("x1", 0.0)
                .attr_px("y1", height)
                .attr_px("x2", width)
                .attr_px("y2", height)
                .attr("stroke", theme.axis_line)
                .attr("stroke-width", "1"),
        )
        .child(
            Node::new("line")
                .attr_px("x1", 0.0)
                .attr_px("y1", 0.0)
                .attr_px("x2", 0.0)
                .attr_px("y2", height)
                .attr("stroke", theme.axis_line)
                .attr("stroke-width", "1"),
        );

    for (x, value) in ticks(x_domain, (0.0, width), 5) {
        g = g
            .child(
                Node::new("line")
                    .attr_px("x1", x)
                    .attr_px("y1", height)
                    .attr_px("x2", x)
                    .attr_px("y2", height + 5.0)
                    .attr("stroke", theme.axis_line)
                    .attr("stroke-width", "1"),
            )
            .child(
                Node::new("text")
                    .attr_px("x", x)
                    .attr_px("y", height + 20.0)
                    .attr("text-anchor", "middle")
                    .attr("font-size", "12px")
                    .attr("fill", theme.text_secondary)
                    .text(format_tick_date(value as i64)),
            );
    }

    for (y, value) in ticks(y_domain, (height, 0.0), 5) {
        g = g
            .child(
                Node::new("line")
                    .attr_px("x1", -5.0)
                    .attr_px("y1", y)
                    .attr_px("x2", 0.0)
                    .attr_px("y2", y)
                    .attr("stroke", theme.axis_line)
                    .attr("stroke-width", "1"),
            )
            .child(
                Node::new("text")
                    .attr_px("x", -10.0)
                    .attr_px("y", y)
                    .attr("text-anchor", "end")
                    .attr("dominant-baseline", "middle")
                    .attr("font-size", "12px")
                    .attr("fill", theme.text_secondary)
                    .text(format_grouped(value)),
            );
    }

    if let Some(label) = x_label {
        g = g.child(
            Node::new("text")
                .attr_px("x", width / 2.0)
                .attr_px("y", height + 40.0)
                .attr("text-anchor", "middle")
                .attr("font-size", "14px")
                .attr("fill", theme.text_primary)
                .text(label),
        );
    }
    if let Some(label) = y_label {
        g = g.child(
            Node::new("text")
                .attr_px("x", -35.0)
                .attr_px("y", height / 2.0)
                .attr("text-anchor", "middle")
                .attr("dominant-baseline", "middle")
                .attr("transform", format!("rotate(-90, -35, {})", height / 2.0))
                .attr("font-size", "14px")
                .attr("fill", theme.text_primary)
                .text(label),
        );
    }
    g
}

/// 5x5-cell background gridlines, drawn beneath the data layer.
pub(crate) fn background_grid(width: f64, height: f64, theme: &Theme) -> Node {
    let mut g = Node::new("g")
        .attr("class", "grid")
        .attr("stroke", theme.grid)
        .attr("stroke-width", "0.5");
    for i in 0..=5 {
        let y = height / 5.0 * i as f64;
        g = g.child(
            Node::new("line")
                .attr_px("x1", 0.0)
                .attr_px("y1", y)
                .attr_px("x2", width)
                .attr_px("y2", y)
                .attr("stroke", theme.grid),
        );
    }
    for i in 0..=5 {
        let x = width / 5.0 * i as f64;
        g = g.child(
            Node::new("line")
                .attr_px("x1", x)
                .attr_px("y1", 0.0)
                .attr_px("x2", x)
                .attr_px("y2", height)
                .attr("stroke", theme.grid),
        );
    }
    g
}

/// Centered placeholder when no valid datum survives filtering.
pub(crate) fn no_data_text(width: f64, height: f64, theme: &Theme) -> Node {
    Node::new("text")
        .attr_px("x", width / 2.0)
        .attr_px("y", height / 2.0)
        .attr("text-anchor", "middle")
        .attr("dominant-baseline", "middle")
        .attr("font-size", "14px")
        .attr("fill", theme.text_secondary)
        .text("No valid data to display")
}

/// Optional chart caption, centered at the given point.
pub(crate) fn title_text(title: &str, x: f64, y: f64, theme: &Theme) -> Node {
    Node::new("text")
        .attr_px("x", x)
        .attr_px("y", y)
        .attr("text-anchor", "middle")
        .attr("font-weight", "bold")
        .attr("font-size", "16px")
        .attr("fill", theme.text_primary)
        .text(title)
}
