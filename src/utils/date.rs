use chrono::Local;

/// Today's date as `YYYY-MM-DD`, the default date of a new entry.
///
/// ISO text sorts chronologically, which the newest-first listing relies on.
pub fn today_iso() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}
