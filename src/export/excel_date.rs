// src/export/excel_date.rs

use chrono::NaiveDate;

/// Number format applied to date cells.
pub(crate) const DATE_FORMAT: &str = "yyyy-mm-dd";

/// Interpret an ISO `YYYY-MM-DD` string as an Excel date serial.
///
/// Other strings (the date column is free text) return `None` and are
/// written as plain text.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<f64> {
    let d = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()?;
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    Some((d - excel_epoch).num_days() as f64)
}
