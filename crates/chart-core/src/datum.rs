// File: crates/chart-core/src/datum.rs
// Summary: Categorical and temporal datum records with parse-or-drop validation.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One named value, fed to bar and pie charts in array order.
/// Duplicate names are allowed and render as separate bars/slices.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoricalDatum {
    pub name: String,
    pub value: f64,
}

impl CategoricalDatum {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self { name: name.into(), value }
    }
}

/// One time/value pair, fed to line charts. `x` stays unparsed until
/// validation so malformed records can be dropped instead of errored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TemporalDatum {
    pub x: String,
    pub y: f64,
}

impl TemporalDatum {
    pub fn new(x: impl Into<String>, y: f64) -> Self {
        Self { x: x.into(), y }
    }
}

/// A validated temporal record: epoch milliseconds plus the position the
/// record held in the caller's array.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimePoint {
    pub t_ms: i64,
    pub y: f64,
    pub index: usize,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeParseError {
    #[error("empty timestamp")]
    Empty,
    #[error("unrecognized timestamp '{0}'")]
    Unrecognized(String),
}

/// Parse a timestamp string to epoch milliseconds.
/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM:SS`,
/// `YYYY-MM-DD`, and bare integers (epoch seconds, or milliseconds above 1e12).
pub fn parse_time_ms(s: &str) -> Result<i64, TimeParseError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(TimeParseError::Empty);
    }
    if let Ok(n) = s.parse::<i64>() {
        // epoch ms vs seconds cutoff
        if n.abs() > 10_i64.pow(12) {
            return Ok(n);
        }
        return Ok(n * 1000);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.timestamp_millis());
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt.and_utc().timestamp_millis());
        }
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(d.and_time(NaiveTime::MIN).and_utc().timestamp_millis());
    }
    Err(TimeParseError::Unrecognized(s.to_string()))
}

/// Keep the records whose `x` parses to a point in time and whose `y` is
/// finite; everything else is filtered, not errored.
pub fn validate_temporal(data: &[TemporalDatum]) -> Vec<TimePoint> {
    let mut out = Vec::with_capacity(data.len());
    for (index, d) in data.iter().enumerate() {
        let t_ms = match parse_time_ms(&d.x) {
            Ok(t) => t,
            Err(_) => continue,
        };
        if !d.y.is_finite() {
            continue;
        }
        out.push(TimePoint { t_ms, y: d.y, index });
    }
    out
}
