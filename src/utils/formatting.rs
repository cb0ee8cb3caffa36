//! Formatting utilities used for CLI output.

/// Amounts are shown with two decimals.
pub fn fmt_amount(v: f64) -> String {
    format!("{v:.2}")
}

/// Empty text fields are shown as a dash.
pub fn or_dash(s: &str) -> &str {
    if s.trim().is_empty() { "-" } else { s }
}
