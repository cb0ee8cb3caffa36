//! The (date, doctor) filter applied before records are listed or exported.

/// Optional exact-match filter on `work_date` and `doctor_name`.
///
/// Blank values (empty or whitespace only) mean "no filter". Non-blank
/// values are trimmed and then compared with case-sensitive equality:
/// `Ali` does not match `ali`, and `Al` does not match `Ali`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    date: Option<String>,
    doctor: Option<String>,
}

impl RecordFilter {
    pub fn new(date: Option<&str>, doctor: Option<&str>) -> Self {
        Self {
            date: normalize(date),
            doctor: normalize(doctor),
        }
    }

    /// Filter that matches every record.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    pub fn doctor(&self) -> Option<&str> {
        self.doctor.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.doctor.is_none()
    }

    /// Short text for headers and prompts, e.g. `date=2024-01-03, doctor=Ali`.
    pub fn describe(&self) -> String {
        match (self.date(), self.doctor()) {
            (None, None) => "all records".to_string(),
            (Some(d), None) => format!("date={d}"),
            (None, Some(doc)) => format!("doctor={doc}"),
            (Some(d), Some(doc)) => format!("date={d}, doctor={doc}"),
        }
    }
}

fn normalize(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_mean_no_filter() {
        let f = RecordFilter::new(Some("   "), Some(""));
        assert!(f.is_empty());
        assert_eq!(f, RecordFilter::all());
    }

    #[test]
    fn values_are_trimmed_but_case_is_kept() {
        let f = RecordFilter::new(Some(" 2024-01-03 "), Some("Ali"));
        assert_eq!(f.date(), Some("2024-01-03"));
        assert_eq!(f.doctor(), Some("Ali"));
        assert_eq!(f.describe(), "date=2024-01-03, doctor=Ali");
    }
}
