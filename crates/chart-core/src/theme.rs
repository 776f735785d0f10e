// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming for chart chrome and series palettes.

/// Colors are CSS color strings so the same markup works inline in a host
/// page or in a standalone .svg file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub background: &'static str,
    pub grid: &'static str,
    pub axis_line: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub point_outline: &'static str,
    pub tooltip_background: &'static str,
    pub tooltip_text: &'static str,
    pub palette: [&'static str; 5],
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: "#121214",
            grid: "#28282d",
            axis_line: "#b4b4be",
            text_primary: "#ebebf5",
            text_secondary: "#9696a0",
            point_outline: "#121214",
            tooltip_background: "rgba(0, 0, 0, 0.8)",
            tooltip_text: "#ffffff",
            palette: ["#40a0ff", "#28c878", "#dc5050", "#e6b400", "#9678dc"],
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: "#fafafc",
            grid: "#e5e5e5",
            axis_line: "#666666",
            text_primary: "#333333",
            text_secondary: "#666666",
            point_outline: "#ffffff",
            tooltip_background: "rgba(0, 0, 0, 0.8)",
            tooltip_text: "#ffffff",
            palette: ["#3b82f6", "#10b981", "#ef4444", "#f59e0b", "#8b5cf6"],
        }
    }

    /// Palette expressed as host theme variables, for charts styled by the
    /// surrounding page's CSS custom properties.
    pub fn css_variables() -> Self {
        Self {
            name: "css-variables",
            background: "var(--bg-secondary)",
            grid: "var(--chart-grid)",
            axis_line: "var(--chart-grid)",
            text_primary: "var(--text-color)",
            text_secondary: "var(--text-secondary)",
            point_outline: "var(--bg-secondary)",
            tooltip_background: "var(--tooltip-bg)",
            tooltip_text: "var(--tooltip-text)",
            palette: [
                "var(--chart-color-1)",
                "var(--chart-color-2)",
                "var(--chart-color-3)",
                "var(--chart-color-4)",
                "var(--chart-color-5)",
            ],
        }
    }

    pub fn palette_vec(&self) -> Vec<String> {
        self.palette.iter().map(|c| c.to_string()).collect()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light(), Theme::css_variables()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::dark()
}
