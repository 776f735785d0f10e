// File: crates/demo/src/main.rs
// Summary: Demo renders a sample learning dashboard (skills bars, audit donut, XP line) to SVG files.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chart_core::datum::parse_time_ms;
use chart_core::{theme, BarOptions, CategoricalDatum, LineOptions, PieOptions, TemporalDatum};
use chart_render_svg::{ChartRenderer, Stage, Surface};

const SKILLS_JSON: &str = include_str!("../data/skills.json");
const XP_CSV: &str = include_str!("../data/xp_transactions.csv");

fn main() -> Result<()> {
    env_logger::init();

    // Theme name from CLI, falling back to dark
    let theme_name = std::env::args().nth(1).unwrap_or_else(|| "dark".to_string());
    let renderer = ChartRenderer::new(theme::find(&theme_name));
    println!("Using theme: {}", renderer.theme().name);

    let mut stage = Stage::new();
    stage.register(Surface::new("skills-chart", 600.0, 400.0));
    stage.register(Surface::new("audit-chart", 360.0, 360.0));
    stage.register(Surface::new("xp-chart", 800.0, 420.0));

    // Top skills, shaped the way the data layer hands them over
    let skills: Vec<CategoricalDatum> =
        serde_json::from_str(SKILLS_JSON).context("decoding skills dataset")?;
    println!("Loaded {} skills", skills.len());
    renderer.bar_chart(
        &mut stage,
        "skills-chart",
        &skills,
        &BarOptions {
            title: Some("Top skills".to_string()),
            ..BarOptions::default()
        },
    );

    // Audit results as a donut
    let audits = vec![
        CategoricalDatum::new("Pass", 7.0),
        CategoricalDatum::new("Fail", 3.0),
    ];
    renderer.pie_chart(
        &mut stage,
        "audit-chart",
        &audits,
        &PieOptions {
            donut: true,
            title: Some("Audits".to_string()),
            ..PieOptions::default()
        },
    );

    // Cumulative XP over time; shaping (sort + running sum) is the caller's job
    let xp = load_cumulative_xp(XP_CSV).context("loading XP dataset")?;
    println!("Loaded {} XP points", xp.len());
    renderer.line_chart(
        &mut stage,
        "xp-chart",
        &xp,
        &LineOptions {
            show_area: true,
            x_axis_label: Some("Date".to_string()),
            y_axis_label: Some("Cumulative XP".to_string()),
            title: Some("XP progress over time".to_string()),
            ..LineOptions::default()
        },
    );

    let out_dir = PathBuf::from("target/out");
    for id in ["skills-chart", "audit-chart", "xp-chart"] {
        let path = out_dir.join(format!("{id}.svg"));
        stage.save_svg(id, &path)?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}

/// Read (createdAt, amount) rows and fold them into a running total.
fn load_cumulative_xp(raw: &str) -> Result<Vec<TemporalDatum>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(raw.as_bytes());

    let mut rows: Vec<(String, f64)> = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let created = rec.get(0).unwrap_or("").trim().to_string();
        let amount: f64 = rec.get(1).unwrap_or("").trim().parse().unwrap_or(0.0);
        rows.push((created, amount));
    }
    rows.sort_by_key(|(created, _)| parse_time_ms(created).unwrap_or(i64::MAX));

    let mut total = 0.0;
    Ok(rows
        .into_iter()
        .map(|(created, amount)| {
            total += amount;
            TemporalDatum::new(created, total)
        })
        .collect())
}
