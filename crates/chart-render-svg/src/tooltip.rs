// File: crates/chart-render-svg/src/tooltip.rs
// Summary: Floating tooltip state: one entry per container, reset at every render.

use chart_core::format::xml_escape;
use chart_core::geometry::round3;
use chart_core::Theme;

/// A hoverable point registered by the line chart.
#[derive(Clone, Debug, PartialEq)]
pub struct HoverTarget {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub label: String,
}

/// The floating label element that follows the pointer. It lives outside
/// the chart surface and is reused across renders of the same container.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub visible: bool,
    pub x: f64,
    pub y: f64,
    pub label: String,
    pub targets: Vec<HoverTarget>,
    background: String,
    text_color: String,
}

impl Default for Tooltip {
    fn default() -> Self {
        Self {
            visible: false,
            x: 0.0,
            y: 0.0,
            label: String::new(),
            targets: Vec::new(),
            background: "rgba(0, 0, 0, 0.8)".to_string(),
            text_color: "#ffffff".to_string(),
        }
    }
}

impl Tooltip {
    /// Hide the element and drop the previous render's hover targets,
    /// keeping the entry alive so repeated renders reuse it.
    pub(crate) fn reset(&mut self, theme: &Theme) {
        self.visible = false;
        self.label.clear();
        self.targets.clear();
        self.background = theme.tooltip_background.to_string();
        self.text_color = theme.tooltip_text.to_string();
    }

    /// Pointer entered the target with this index: fill and show the label.
    pub fn enter(&mut self, target: usize) {
        if let Some(t) = self.targets.get(target) {
            self.label = t.label.clone();
            self.visible = true;
        }
    }

    /// Pointer moved: track it, offset right and below the cursor.
    pub fn follow(&mut self, x: f64, y: f64) {
        self.x = x + 10.0;
        self.y = y + 10.0;
    }

    pub fn leave(&mut self) {
        self.visible = false;
    }

    /// Markup for the floating element, absolutely positioned in the host
    /// document rather than inside any chart surface.
    pub fn to_html(&self) -> String {
        format!(
            "<div style=\"position: absolute; display: {}; left: {}px; top: {}px; \
             padding: 8px; background: {}; color: {}; border-radius: 4px; \
             font-size: 12px; pointer-events: none; z-index: 1000; \
             white-space: nowrap;\">{}</div>",
            if self.visible { "block" } else { "none" },
            round3(self.x),
            round3(self.y),
            self.background,
            self.text_color,
            xml_escape(&self.label)
        )
    }
}
