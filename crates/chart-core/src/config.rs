// File: crates/chart-core/src/config.rs
// Summary: Per-chart option structs with explicit defaults, plus fill resolution.

use crate::datum::CategoricalDatum;

/// Margins around the plotting area, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }
}

/// How shapes pick their color.
#[derive(Clone, Debug, PartialEq)]
pub enum Fill {
    /// One color for every shape.
    Solid(String),
    /// Cycle through a palette by datum index.
    Cycle(Vec<String>),
    /// Caller-supplied per-datum function.
    ByDatum(fn(&CategoricalDatum, usize) -> String),
}

impl Fill {
    pub fn resolve(&self, datum: &CategoricalDatum, index: usize) -> String {
        match self {
            Fill::Solid(color) => color.clone(),
            Fill::Cycle(colors) if colors.is_empty() => "#888888".to_string(),
            Fill::Cycle(colors) => colors[index % colors.len()].clone(),
            Fill::ByDatum(f) => f(datum, index),
        }
    }
}

/// Bar chart options. `None` color/size fields fall back to the renderer's
/// theme and the container's size at call entry.
#[derive(Clone, Debug, PartialEq)]
pub struct BarOptions {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub margin: Margin,
    pub bar_fill: Option<Fill>,
    pub bar_padding: f64,
    pub animate: bool,
    pub show_values: bool,
    pub title: Option<String>,
}

impl Default for BarOptions {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            margin: Margin::new(20.0, 20.0, 30.0, 40.0),
            bar_fill: None,
            bar_padding: 0.2,
            animate: true,
            show_values: true,
            title: None,
        }
    }
}

/// Pie/donut chart options.
#[derive(Clone, Debug, PartialEq)]
pub struct PieOptions {
    pub width: Option<f64>,
    pub height: Option<f64>,
    /// Outer radius; defaults to half the smaller container side minus 40.
    pub radius: Option<f64>,
    pub slice_fill: Option<Fill>,
    pub animate: bool,
    /// Controls both the percentage labels and the legend.
    pub show_labels: bool,
    pub donut: bool,
    /// Fraction of the outer radius used as the donut hole radius.
    pub donut_ratio: f64,
    pub title: Option<String>,
}

impl Default for PieOptions {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            radius: None,
            slice_fill: None,
            animate: true,
            show_labels: true,
            donut: false,
            donut_ratio: 0.5,
            title: None,
        }
    }
}

/// Line/area chart options.
#[derive(Clone, Debug, PartialEq)]
pub struct LineOptions {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub margin: Margin,
    pub line_color: Option<String>,
    /// Defaults to the line color.
    pub point_color: Option<String>,
    pub animate: bool,
    pub show_points: bool,
    pub show_area: bool,
    pub area_opacity: f64,
    pub line_width: f64,
    pub point_radius: f64,
    pub show_tooltips: bool,
    pub show_axes: bool,
    pub grid_lines: bool,
    /// Points are plotted in caller order unless this sorts them by timestamp.
    pub sort_by_x: bool,
    pub x_axis_label: Option<String>,
    pub y_axis_label: Option<String>,
    pub title: Option<String>,
}

impl Default for LineOptions {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            margin: Margin::new(20.0, 30.0, 50.0, 50.0),
            line_color: None,
            point_color: None,
            animate: true,
            show_points: true,
            show_area: false,
            area_opacity: 0.2,
            line_width: 2.0,
            point_radius: 4.0,
            show_tooltips: true,
            show_axes: true,
            grid_lines: true,
            sort_by_x: false,
            x_axis_label: None,
            y_axis_label: None,
            title: None,
        }
    }
}
