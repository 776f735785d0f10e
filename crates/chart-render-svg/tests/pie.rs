// File: crates/chart-render-svg/tests/pie.rs
// Purpose: Validate slice angles, donut paths, labels, and the legend.

use chart_core::geometry::{polar_point, round3};
use chart_core::{CategoricalDatum, PieOptions, Theme};
use chart_render_svg::{ChartRenderer, Stage, Surface};

fn stage_with(id: &str, w: f64, h: f64) -> Stage {
    let mut stage = Stage::new();
    stage.register(Surface::new(id, w, h));
    stage
}

fn static_opts() -> PieOptions {
    PieOptions { animate: false, ..PieOptions::default() }
}

fn point_str(radius: f64, angle_deg: f64) -> String {
    let (x, y) = polar_point(0.0, 0.0, radius, angle_deg);
    format!("{} {}", round3(x), round3(y))
}

#[test]
fn slice_spans_are_proportional_and_consecutive() {
    // 300x300 surface -> radius 110. Pass 7/10 -> 252 degrees, Fail -> 108.
    let data = vec![
        CategoricalDatum::new("Pass", 7.0),
        CategoricalDatum::new("Fail", 3.0),
    ];
    let mut stage = stage_with("audit", 300.0, 300.0);
    ChartRenderer::new(Theme::light()).pie_chart(&mut stage, "audit", &data, &static_opts());

    let surface = stage.surface("audit").unwrap();
    let slices = surface.find_all("path");
    assert_eq!(slices.len(), 2);

    let first = slices[0].get_attr("d").unwrap();
    let second = slices[1].get_attr("d").unwrap();

    // first slice starts at 12 o'clock and takes the long way around
    assert!(first.starts_with(&format!("M {}", point_str(110.0, 0.0))), "{first}");
    assert!(first.contains("A 110 110 0 1 1"), "large-arc expected: {first}");
    assert!(first.contains(&point_str(110.0, 252.0)), "{first}");

    // second slice picks up exactly where the first ended and closes the circle
    assert!(second.starts_with(&format!("M {}", point_str(110.0, 252.0))), "{second}");
    assert!(second.contains("A 110 110 0 0 1"), "short arc expected: {second}");
    assert!(second.contains(&point_str(110.0, 360.0)), "{second}");

    assert_eq!(slices[0].get_attr("data-tooltip"), Some("Pass: 7 (70%)"));
    assert_eq!(slices[1].get_attr("data-tooltip"), Some("Fail: 3 (30%)"));
}

#[test]
fn legend_lists_every_datum_with_counts() {
    let data = vec![
        CategoricalDatum::new("Pass", 7.0),
        CategoricalDatum::new("Fail", 3.0),
    ];
    let mut stage = stage_with("audit", 300.0, 300.0);
    ChartRenderer::new(Theme::light()).pie_chart(&mut stage, "audit", &data, &static_opts());

    let surface = stage.surface("audit").unwrap();
    let legend = surface
        .find_all("g")
        .into_iter()
        .find(|g| g.get_attr("class") == Some("legend"))
        .expect("legend group");
    let rows: Vec<&str> = legend
        .find_all("text")
        .iter()
        .filter_map(|t| t.text.as_deref())
        .collect();
    assert_eq!(rows, vec!["Pass: 7", "Fail: 3"]);
    assert_eq!(legend.find_all("rect").len(), 2);
}

#[test]
fn donut_slices_cut_an_inner_hole() {
    let data = vec![
        CategoricalDatum::new("done", 6.0),
        CategoricalDatum::new("todo", 4.0),
    ];
    let opts = PieOptions { donut: true, animate: false, ..PieOptions::default() };
    let mut stage = stage_with("progress", 300.0, 300.0);
    ChartRenderer::new(Theme::light()).pie_chart(&mut stage, "progress", &data, &opts);

    // inner radius = 0.5 * 110, strictly inside the outer radius
    for slice in stage.surface("progress").unwrap().find_all("path") {
        let d = slice.get_attr("d").unwrap();
        assert!(d.contains("A 110 110 0"), "{d}");
        assert!(d.contains("A 55 55 0"), "inner arc expected: {d}");
        assert!(!d.contains("L 0 0"), "donut must not close through the center: {d}");
    }
}

#[test]
fn zero_value_datum_keeps_its_legend_row_but_no_slice() {
    let data = vec![
        CategoricalDatum::new("a", 5.0),
        CategoricalDatum::new("b", 0.0),
        CategoricalDatum::new("c", 5.0),
    ];
    let mut stage = stage_with("audit", 300.0, 300.0);
    ChartRenderer::new(Theme::light()).pie_chart(&mut stage, "audit", &data, &static_opts());

    let surface = stage.surface("audit").unwrap();
    assert_eq!(surface.find_all("path").len(), 2);

    let legend = surface
        .find_all("g")
        .into_iter()
        .find(|g| g.get_attr("class") == Some("legend"))
        .expect("legend group");
    let rows: Vec<&str> = legend
        .find_all("text")
        .iter()
        .filter_map(|t| t.text.as_deref())
        .collect();
    assert_eq!(rows, vec!["a: 5", "b: 0", "c: 5"]);
}

#[test]
fn labels_below_the_visibility_threshold_are_suppressed() {
    let data = vec![
        CategoricalDatum::new("big", 96.0),
        CategoricalDatum::new("tiny", 4.0),
    ];
    let mut stage = stage_with("audit", 300.0, 300.0);
    ChartRenderer::new(Theme::light()).pie_chart(&mut stage, "audit", &data, &static_opts());

    let surface = stage.surface("audit").unwrap();
    let pct_labels: Vec<&str> = surface
        .find_all("text")
        .iter()
        .filter_map(|t| t.text.as_deref())
        .filter(|t| t.ends_with('%'))
        .collect();
    assert_eq!(pct_labels, vec!["96%"]);
}

#[test]
fn zero_total_renders_the_placeholder() {
    let data = vec![
        CategoricalDatum::new("a", 0.0),
        CategoricalDatum::new("b", 0.0),
    ];
    let mut stage = stage_with("audit", 300.0, 300.0);
    ChartRenderer::new(Theme::light()).pie_chart(&mut stage, "audit", &data, &static_opts());

    let surface = stage.surface("audit").unwrap();
    assert!(surface.find_all("path").is_empty());
    let texts = surface.find_all("text");
    assert_eq!(texts.len(), 1);
    assert_eq!(texts[0].text.as_deref(), Some("No valid data to display"));
}

#[test]
fn long_legend_names_truncate() {
    let data = vec![CategoricalDatum::new("a-very-long-project-name", 1.0)];
    let mut stage = stage_with("audit", 300.0, 300.0);
    ChartRenderer::new(Theme::light()).pie_chart(&mut stage, "audit", &data, &static_opts());

    let texts: Vec<String> = stage
        .surface("audit")
        .unwrap()
        .find_all("text")
        .iter()
        .filter_map(|t| t.text.clone())
        .collect();
    assert!(texts.contains(&"a-very-long-...: 1".to_string()), "{texts:?}");
}
