// File: crates/chart-core/src/format.rs
// Summary: Label formatting: k-suffix values, grouped numbers, tick dates, truncation, escaping.

use chrono::DateTime;

/// Axis value with a "k" suffix above 1000: 1234 -> "1.2k", 80 -> "80".
pub fn format_value_k(v: f64) -> String {
    if v >= 1000.0 {
        format!("{:.1}k", v / 1000.0)
    } else {
        format!("{}", v.round() as i64)
    }
}

/// Thousands-grouped with at most two decimals: 1234567.891 -> "1,234,567.89".
pub fn format_grouped(v: f64) -> String {
    let rounded = (v * 100.0).round() / 100.0;
    let neg = rounded < 0.0;
    let abs = rounded.abs();
    let mut int = abs.trunc() as u64;
    let mut cents = ((abs - abs.trunc()) * 100.0).round() as u64;
    if cents >= 100 {
        int += 1;
        cents = 0;
    }

    let digits = int.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 4);
    if neg {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if cents > 0 {
        if cents % 10 == 0 {
            out.push_str(&format!(".{}", cents / 10));
        } else {
            out.push_str(&format!(".{:02}", cents));
        }
    }
    out
}

/// Short date label for a tick at epoch milliseconds, e.g. "6/5/2024".
pub fn format_tick_date(t_ms: i64) -> String {
    DateTime::from_timestamp_millis(t_ms)
        .map(|d| d.format("%-m/%-d/%Y").to_string())
        .unwrap_or_default()
}

/// Ellipsis truncation: names longer than `max` keep the first `keep`
/// characters followed by "...".
pub fn truncate_label(s: &str, max: usize, keep: usize) -> String {
    if s.chars().count() > max {
        let head: String = s.chars().take(keep).collect();
        format!("{}...", head)
    } else {
        s.to_string()
    }
}

/// Minimal XML escaping for text nodes and attribute values.
pub fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
