// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the datum model, options, scales, geometry, and themes.

pub mod config;
pub mod datum;
pub mod format;
pub mod geometry;
pub mod grid;
pub mod scale;
pub mod theme;

pub use config::{BarOptions, Fill, LineOptions, Margin, PieOptions};
pub use datum::{CategoricalDatum, TemporalDatum, TimeParseError, TimePoint};
pub use scale::LinearScale;
pub use theme::Theme;
