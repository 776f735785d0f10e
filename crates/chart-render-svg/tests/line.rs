// File: crates/chart-render-svg/tests/line.rs
// Purpose: Validate line scaling, filtering, area/points, axes, and animation.

use chart_core::geometry::{polyline_length, round3};
use chart_core::{LineOptions, TemporalDatum, Theme};
use chart_render_svg::{ChartRenderer, Stage, Surface};

fn stage_with(id: &str, w: f64, h: f64) -> Stage {
    let mut stage = Stage::new();
    stage.register(Surface::new(id, w, h));
    stage
}

fn static_opts() -> LineOptions {
    LineOptions { animate: false, ..LineOptions::default() }
}

fn xp_data() -> Vec<TemporalDatum> {
    vec![
        TemporalDatum::new("2024-01-01", 10.0),
        TemporalDatum::new("2024-01-11", 20.0),
    ]
}

#[test]
fn points_map_through_padded_scales() {
    // 460x370 with default margins -> 380x300 plot area.
    // y domain 10..20 padded 10% -> 9..21.
    let mut stage = stage_with("xp", 460.0, 370.0);
    ChartRenderer::new(Theme::light()).line_chart(&mut stage, "xp", &xp_data(), &static_opts());

    let surface = stage.surface("xp").unwrap();
    let circles = surface.find_all("circle");
    assert_eq!(circles.len(), 2);
    assert_eq!(circles[0].get_attr("cx"), Some("0"));
    assert_eq!(circles[0].get_attr("cy"), Some("275"));
    assert_eq!(circles[1].get_attr("cx"), Some("380"));
    assert_eq!(circles[1].get_attr("cy"), Some("25"));
    assert_eq!(circles[0].get_attr("data-x"), Some("2024-01-01"));
    assert_eq!(circles[0].get_attr("r"), Some("4"));
}

#[test]
fn invalid_records_do_not_shift_the_axes() {
    // The bad record must vanish from both the points and the domain,
    // leaving markup identical to a render without it.
    let with_bad = vec![
        TemporalDatum::new("2024-01-01", 10.0),
        TemporalDatum::new("not-a-date", 99.0),
        TemporalDatum::new("2024-01-11", 20.0),
    ];
    let renderer = ChartRenderer::new(Theme::light());

    let mut stage = stage_with("xp", 460.0, 370.0);
    renderer.line_chart(&mut stage, "xp", &with_bad, &static_opts());
    let dirty = stage.surface("xp").unwrap().to_svg();

    renderer.line_chart(&mut stage, "xp", &xp_data(), &static_opts());
    let clean = stage.surface("xp").unwrap().to_svg();

    assert_eq!(dirty, clean);
}

#[test]
fn axis_ticks_span_the_time_and_value_domains() {
    let mut stage = stage_with("xp", 460.0, 370.0);
    ChartRenderer::new(Theme::light()).line_chart(&mut stage, "xp", &xp_data(), &static_opts());

    let surface = stage.surface("xp").unwrap();
    let axes = surface
        .find_all("g")
        .into_iter()
        .find(|g| g.get_attr("class") == Some("axes"))
        .expect("axes group");
    let labels: Vec<&str> = axes
        .find_all("text")
        .iter()
        .filter_map(|t| t.text.as_deref())
        .collect();
    assert_eq!(labels[0], "1/1/2024");
    assert_eq!(labels[4], "1/11/2024");
    // y ticks over the padded 9..21 domain
    assert!(labels.contains(&"9"));
    assert!(labels.contains(&"21"));
}

#[test]
fn grid_draws_five_by_five_cells() {
    let mut stage = stage_with("xp", 460.0, 370.0);
    ChartRenderer::new(Theme::light()).line_chart(&mut stage, "xp", &xp_data(), &static_opts());

    let surface = stage.surface("xp").unwrap();
    let grid = surface
        .find_all("g")
        .into_iter()
        .find(|g| g.get_attr("class") == Some("grid"))
        .expect("grid group");
    assert_eq!(grid.find_all("line").len(), 12);
}

#[test]
fn area_renders_beneath_the_line_and_closes_to_the_baseline() {
    let opts = LineOptions { show_area: true, animate: false, ..LineOptions::default() };
    let mut stage = stage_with("xp", 460.0, 370.0);
    ChartRenderer::new(Theme::light()).line_chart(&mut stage, "xp", &xp_data(), &opts);

    let surface = stage.surface("xp").unwrap();
    let paths = surface.find_all("path");
    assert_eq!(paths.len(), 2);

    let area = paths[0];
    assert_eq!(area.get_attr("fill-opacity"), Some("0.2"));
    let d = area.get_attr("d").unwrap();
    assert!(d.ends_with("L 0 300 Z"), "area must close at the baseline: {d}");

    let line = paths[1];
    assert_eq!(line.get_attr("fill"), Some("none"));
    assert_eq!(line.get_attr("stroke-width"), Some("2"));
}

#[test]
fn caller_order_is_preserved_unless_sorting_is_requested() {
    let reversed = vec![
        TemporalDatum::new("2024-01-11", 20.0),
        TemporalDatum::new("2024-01-01", 10.0),
    ];
    let renderer = ChartRenderer::new(Theme::light());

    let mut stage = stage_with("xp", 460.0, 370.0);
    renderer.line_chart(&mut stage, "xp", &reversed, &static_opts());
    let surface = stage.surface("xp").unwrap();
    let line = surface.find_all("path")[0];
    assert!(line.get_attr("d").unwrap().starts_with("M 380 25"));

    let sorted = LineOptions { sort_by_x: true, animate: false, ..LineOptions::default() };
    renderer.line_chart(&mut stage, "xp", &reversed, &sorted);
    let surface = stage.surface("xp").unwrap();
    let line = surface.find_all("path")[0];
    assert!(line.get_attr("d").unwrap().starts_with("M 0 275"));
}

#[test]
fn animated_line_reveals_through_its_dash_offset() {
    let opts = LineOptions { show_points: false, ..LineOptions::default() };
    let mut stage = stage_with("xp", 460.0, 370.0);
    ChartRenderer::new(Theme::light()).line_chart(&mut stage, "xp", &xp_data(), &opts);

    let len = round3(polyline_length(&[(0.0, 275.0), (380.0, 25.0)]));
    let surface = stage.surface("xp").unwrap();
    let line = surface.find_all("path")[0];
    assert_eq!(line.get_attr("stroke-dasharray"), Some(len.to_string().as_str()));
    assert_eq!(line.get_attr("stroke-dashoffset"), Some(len.to_string().as_str()));

    let anim = line.find_all("animate")[0];
    assert_eq!(anim.get_attr("attributeName"), Some("stroke-dashoffset"));
    assert_eq!(anim.get_attr("to"), Some("0"));
    assert_eq!(anim.get_attr("dur"), Some("1s"));
}

#[test]
fn empty_and_all_invalid_data_render_the_placeholder() {
    let renderer = ChartRenderer::new(Theme::light());

    let mut stage = stage_with("xp", 460.0, 370.0);
    renderer.line_chart(&mut stage, "xp", &[], &static_opts());
    let surface = stage.surface("xp").unwrap();
    assert!(surface.find_all("circle").is_empty());
    assert!(surface.find_all("path").is_empty());
    assert_eq!(
        surface.find_all("text")[0].text.as_deref(),
        Some("No valid data to display")
    );

    let garbage = vec![
        TemporalDatum::new("bad", 1.0),
        TemporalDatum::new("2024-01-01", f64::NAN),
    ];
    renderer.line_chart(&mut stage, "xp", &garbage, &static_opts());
    let surface = stage.surface("xp").unwrap();
    assert!(surface.find_all("circle").is_empty());
    assert_eq!(
        surface.find_all("text")[0].text.as_deref(),
        Some("No valid data to display")
    );
}

#[test]
fn axis_captions_are_optional() {
    let opts = LineOptions {
        animate: false,
        x_axis_label: Some("Date".to_string()),
        y_axis_label: Some("Cumulative XP".to_string()),
        ..LineOptions::default()
    };
    let mut stage = stage_with("xp", 460.0, 370.0);
    ChartRenderer::new(Theme::light()).line_chart(&mut stage, "xp", &xp_data(), &opts);

    let texts: Vec<String> = stage
        .surface("xp")
        .unwrap()
        .find_all("text")
        .iter()
        .filter_map(|t| t.text.clone())
        .collect();
    assert!(texts.contains(&"Date".to_string()));
    assert!(texts.contains(&"Cumulative XP".to_string()));

    let rotated = stage
        .surface("xp")
        .unwrap()
        .find_all("text")
        .into_iter()
        .find(|t| t.text.as_deref() == Some("Cumulative XP"))
        .unwrap();
    assert!(rotated.get_attr("transform").unwrap().starts_with("rotate(-90"));
}
