// File: crates/chart-render-svg/src/line.rs
// Summary: Line/area construction: scales, paths, points, axes, hover targets.

use chart_core::config::LineOptions;
use chart_core::datum::{validate_temporal, TemporalDatum};
use chart_core::format::{format_grouped, format_tick_date};
use chart_core::geometry::{area_path, polyline_length, polyline_path, round3};
use chart_core::{LinearScale, Theme};
use log::debug;

use crate::axis::{background_grid, no_data_text, time_value_axes, title_text};
use crate::node::Node;
use crate::tooltip::HoverTarget;

const REVEAL_DUR_S: f64 = 1.0;

pub(crate) fn build(
    surface_w: f64,
    surface_h: f64,
    data: &[TemporalDatum],
    opts: &LineOptions,
    theme: &Theme,
) -> (Node, Vec<HoverTarget>) {
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

    let mut pts = validate_temporal(data);
    if pts.len() < data.len() {
        debug!("line chart: dropped {} invalid record(s)", data.len() - pts.len());
    }
    if pts.is_empty() {
        let empty = chart.child(no_data_text(chart_w, chart_h, theme));
        return (svg.child(empty), Vec::new());
    }
    if opts.sort_by_x {
        pts.sort_by_key(|p| p.t_ms);
    }

    let x_min = pts.iter().map(|p| p.t_ms).min().unwrap_or(0) as f64;
    let x_max = pts.iter().map(|p| p.t_ms).max().unwrap_or(0) as f64;
    let (y_min, y_max) = pts.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(lo, hi), p| (lo.min(p.y), hi.max(p.y)),
    );
    // pad the Y domain so points stay off the frame edge
    let y_pad = (y_max - y_min) * 0.1;
    let y_lo = (y_min - y_pad).max(0.0);
    let y_hi = y_max + y_pad;

    let x_scale = LinearScale::new((x_min, x_max), (0.0, chart_w));
    let y_scale = LinearScale::new_inverted_y((y_lo, y_hi), chart_h, 0.0);
    let screen: Vec<(f64, f64)> = pts
        .iter()
        .map(|p| (x_scale.map(p.t_ms as f64), y_scale.map(p.y)))
        .collect();

    let line_color = opts
        .line_color
        .clone()
        .unwrap_or_else(|| theme.palette[0].to_string());
    let point_color = opts.point_color.clone().unwrap_or_else(|| line_color.clone());

    if let Some(title) = &opts.title {
        chart = chart.child(title_text(title, chart_w / 2.0, -opts.margin.top / 2.0, theme));
    }
    if opts.grid_lines {
        chart = chart.child(background_grid(chart_w, chart_h, theme));
    }
    if opts.show_axes {
        chart = chart.child(time_value_axes(
            (x_min, x_max),
            (y_lo, y_hi),
            chart_w,
            chart_h,
            opts.x_axis_label.as_deref(),
            opts.y_axis_label.as_deref(),
            theme,
        ));
    }

    if opts.show_area {
        let mut area = Node::new("path")
            .attr("d", area_path(&screen, chart_h))
            .attr("fill", line_color.clone())
            .attr("fill-opacity", opts.area_opacity)
            .attr("stroke", "none");
        if opts.animate {
            area = area.attr("opacity", 0).animate("opacity", 0, 1, REVEAL_DUR_S);
        }
        chart = chart.child(area);
    }

    let mut line = Node::new("path")
        .attr("d", polyline_path(&screen))
        .attr("fill", "none")
        .attr("stroke", line_color)
        .attr("stroke-width", opts.line_width)
        .attr("stroke-linejoin", "round")
        .attr("stroke-linecap", "round");
    if opts.animate {
        // stroke-reveal: dash the full polyline length, then slide the offset to zero
        let len = round3(polyline_length(&screen));
        line = line
            .attr("stroke-dasharray", len)
            .attr("stroke-dashoffset", len)
            .animate("stroke-dashoffset", len, 0, REVEAL_DUR_S);
    }
    chart = chart.child(line);

    let mut targets = Vec::new();
    if opts.show_points {
        for (p, &(sx, sy)) in pts.iter().zip(&screen) {
            let datum = &data[p.index];
            let mut point = Node::new("circle")
                .attr_px("cx", sx)
                .attr_px("cy", sy)
                .attr_px("r", opts.point_radius)
                .attr("fill", point_color.clone())
                .attr("stroke", theme.point_outline)
                .attr("stroke-width", "1.5")
                .attr("data-x", datum.x.clone())
                .attr("data-y", datum.y);
            if opts.animate {
                point = point.attr("opacity", 0).animate("opacity", 0, 1, REVEAL_DUR_S);
            }
            chart = chart.child(point);

            if opts.show_tooltips {
                targets.push(HoverTarget {
                    cx: sx,
                    cy: sy,
                    radius: opts.point_radius,
                    label: format!("{}: {}", format_tick_date(p.t_ms), format_grouped(p.y)),
                });
            }
        }
    }

    (svg.child(chart), targets)
}
