//! Raw user input → `WorkEntry`.
//!
//! This is the boundary where the shell's text fields are turned into typed
//! values: blank amounts become 0, anything unparseable is a validation error.
//! The store never sees strings it has to guess about.

use crate::errors::{AppError, AppResult};
use crate::models::{Period, WorkEntry};

/// Text values as typed by the user. `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct EntryInput {
    pub work_date: Option<String>,
    pub work_amount: Option<String>,
    pub expense_amount: Option<String>,
    pub doctor_name: Option<String>,
    pub worker_name: Option<String>,
    pub worker_amount: Option<String>,
    pub withdraw_amount: Option<String>,
    pub place_rent: Option<String>,
    pub file_number: Option<String>,
    pub period: Option<String>,
}

impl EntryInput {
    /// Build a fresh entry. Missing amounts are 0, a missing date is `today`
    /// and a missing period is `default_period`.
    pub fn new_entry(&self, today: &str, default_period: Period) -> AppResult<WorkEntry> {
        let base = WorkEntry {
            work_date: today.to_string(),
            period: Some(default_period),
            ..WorkEntry::default()
        };
        self.apply_to(&base)
    }

    /// Overlay the given values on `base`; fields that were not given keep
    /// their current value. A given-but-blank amount means 0.
    pub fn apply_to(&self, base: &WorkEntry) -> AppResult<WorkEntry> {
        let mut e = base.clone();

        if let Some(d) = &self.work_date {
            let d = d.trim();
            if d.is_empty() {
                return Err(AppError::validation("date cannot be empty"));
            }
            e.work_date = d.to_string();
        }
        if let Some(v) = &self.work_amount {
            e.work_amount = parse_amount("work amount", v)?;
        }
        if let Some(v) = &self.expense_amount {
            e.expense_amount = parse_amount("expense", v)?;
        }
        if let Some(v) = &self.doctor_name {
            e.doctor_name = v.trim().to_string();
        }
        if let Some(v) = &self.worker_name {
            e.worker_name = v.trim().to_string();
        }
        if let Some(v) = &self.worker_amount {
            e.worker_amount = parse_amount("worker amount", v)?;
        }
        if let Some(v) = &self.withdraw_amount {
            e.withdraw_amount = parse_amount("withdrawal", v)?;
        }
        if let Some(v) = &self.place_rent {
            e.place_rent = parse_amount("place rent", v)?;
        }
        if let Some(v) = &self.file_number {
            e.file_number = parse_file_number(v)?;
        }
        if let Some(v) = &self.period {
            e.period = Some(parse_period(v)?);
        }

        Ok(e)
    }
}

/// Parse an amount field; blank means 0.
pub fn parse_amount(field: &str, raw: &str) -> AppResult<f64> {
    let s = raw.trim();
    if s.is_empty() {
        return Ok(0.0);
    }

    match s.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(AppError::validation(format!(
            "{field}: '{raw}' is not a valid number"
        ))),
    }
}

/// Parse the clinic file number; blank means 0.
pub fn parse_file_number(raw: &str) -> AppResult<i64> {
    let s = raw.trim();
    if s.is_empty() {
        return Ok(0);
    }

    s.parse::<i64>()
        .map_err(|_| AppError::validation(format!("file number: '{raw}' is not a whole number")))
}

pub fn parse_period(raw: &str) -> AppResult<Period> {
    Period::from_input(raw).ok_or_else(|| {
        AppError::validation(format!(
            "period: '{raw}' is not valid (use 'morning' or 'evening')"
        ))
    })
}

/// Check a worker name against the configured list.
///
/// An empty list accepts any name; an empty name is always accepted.
pub fn check_worker(name: &str, known: &[String]) -> AppResult<()> {
    if name.is_empty() || known.is_empty() || known.iter().any(|w| w == name) {
        return Ok(());
    }

    Err(AppError::validation(format!(
        "worker '{}' is not one of: {}",
        name,
        known.join(", ")
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_amounts_are_zero() {
        assert_eq!(parse_amount("work", "").unwrap(), 0.0);
        assert_eq!(parse_amount("work", "   ").unwrap(), 0.0);
        assert_eq!(parse_file_number("").unwrap(), 0);
    }

    #[test]
    fn garbage_is_rejected_not_coerced() {
        assert!(matches!(parse_amount("work", "12a"), Err(AppError::Validation(_))));
        assert!(matches!(parse_amount("work", "NaN"), Err(AppError::Validation(_))));
        assert!(matches!(parse_amount("work", "inf"), Err(AppError::Validation(_))));
        assert!(matches!(parse_file_number("3.5"), Err(AppError::Validation(_))));
        assert!(matches!(parse_period("noon"), Err(AppError::Validation(_))));
    }

    #[test]
    fn new_entry_uses_defaults() {
        let input = EntryInput {
            work_amount: Some("150.5".into()),
            doctor_name: Some(" Ali ".into()),
            file_number: Some("42".into()),
            ..Default::default()
        };
        let e = input.new_entry("2024-01-03", Period::Evening).unwrap();

        assert_eq!(e.work_date, "2024-01-03");
        assert_eq!(e.work_amount, 150.5);
        assert_eq!(e.expense_amount, 0.0);
        assert_eq!(e.doctor_name, "Ali");
        assert_eq!(e.file_number, 42);
        assert_eq!(e.period, Some(Period::Evening));
    }

    #[test]
    fn apply_to_keeps_untouched_fields() {
        let base = WorkEntry {
            work_date: "2024-01-01".into(),
            work_amount: 10.0,
            expense_amount: 3.0,
            doctor_name: "Sara".into(),
            ..WorkEntry::default()
        };
        let input = EntryInput {
            expense_amount: Some("".into()),
            period: Some("pm".into()),
            ..Default::default()
        };
        let e = input.apply_to(&base).unwrap();

        assert_eq!(e.work_amount, 10.0);
        assert_eq!(e.expense_amount, 0.0);
        assert_eq!(e.doctor_name, "Sara");
        assert_eq!(e.period, Some(Period::Evening));
    }

    #[test]
    fn worker_must_be_known_when_list_is_set() {
        let known = vec!["Halima".to_string(), "Zahra".to_string()];
        assert!(check_worker("Zahra", &known).is_ok());
        assert!(check_worker("", &known).is_ok());
        assert!(check_worker("Omar", &[]).is_ok());
        assert!(matches!(check_worker("Omar", &known), Err(AppError::Validation(_))));
    }
}
