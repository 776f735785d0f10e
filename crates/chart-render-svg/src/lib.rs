// File: crates/chart-render-svg/src/lib.rs
// Summary: SVG rendering backend: surfaces, element builder, and the three chart entry points.

mod axis;
mod bar;
mod legend;
mod line;
mod node;
mod pie;
mod surface;
mod tooltip;

pub use node::Node;
pub use pie::PIE_LABEL_MIN_FRACTION;
pub use surface::{Stage, Surface};
pub use tooltip::{HoverTarget, Tooltip};

use chart_core::{BarOptions, CategoricalDatum, LineOptions, PieOptions, TemporalDatum, Theme};
use log::warn;

/// Chart renderer over a shared theme. Stateless per call: rendering
/// replaces the target surface's contents and returns nothing; failures
/// degrade to placeholders instead of propagating.
pub struct ChartRenderer {
    theme: Theme,
}

impl ChartRenderer {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Replace `container_id`'s contents with a bar chart of `data`.
    /// An unregistered container is a silent no-op.
    pub fn bar_chart(
        &self,
        stage: &mut Stage,
        container_id: &str,
        data: &[CategoricalDatum],
        opts: &BarOptions,
    ) {
        let Some(surface) = stage.surface_mut(container_id) else {
            warn!("bar chart: no container '{container_id}'");
            return;
        };
        let svg = bar::build(surface.width, surface.height, data, opts, &self.theme);
        surface.clear();
        surface.append(svg);
    }

    /// Replace `container_id`'s contents with a pie or donut chart of `data`.
    pub fn pie_chart(
        &self,
        stage: &mut Stage,
        container_id: &str,
        data: &[CategoricalDatum],
        opts: &PieOptions,
    ) {
        let Some(surface) = stage.surface_mut(container_id) else {
            warn!("pie chart: no container '{container_id}'");
            return;
        };
        let svg = pie::build(surface.width, surface.height, data, opts, &self.theme);
        surface.clear();
        surface.append(svg);
    }

    /// Replace `container_id`'s contents with a line chart of `data`. Also
    /// resets and repopulates the container's floating tooltip entry, so
    /// re-renders reuse one tooltip element instead of leaking stale ones.
    pub fn line_chart(
        &self,
        stage: &mut Stage,
        container_id: &str,
        data: &[TemporalDatum],
        opts: &LineOptions,
    ) {
        let Some((w, h)) = stage.surface_size(container_id) else {
            warn!("line chart: no container '{container_id}'");
            return;
        };
        let (svg, targets) = line::build(w, h, data, opts, &self.theme);

        let tip = stage.tooltip_entry(container_id);
        tip.reset(&self.theme);
        tip.targets = targets;

        if let Some(surface) = stage.surface_mut(container_id) {
            surface.clear();
            surface.append(svg);
        }
    }
}

impl Default for ChartRenderer {
    fn default() -> Self {
        Self::new(Theme::css_variables())
    }
}
