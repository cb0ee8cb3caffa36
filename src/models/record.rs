//! The daily work entry and its persisted form.

use super::period::Period;
use serde::Serialize;

/// The ten user-supplied fields of a daily work entry (everything but `id`).
///
/// This is what `insert_record` takes and what `update_record` overwrites.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct WorkEntry {
    pub work_date: String, // ⇔ daily_work.work_date (TEXT, compared verbatim)
    pub work_amount: f64,
    pub expense_amount: f64,
    pub doctor_name: String,
    pub worker_name: String,
    pub worker_amount: f64,
    pub withdraw_amount: f64,
    pub place_rent: f64,
    pub file_number: i64,
    pub period: Option<Period>, // ⇔ daily_work.period ('morning' | 'evening' | NULL)
}

impl WorkEntry {
    /// Name/value pairs of the five amount columns, in column order.
    pub fn amounts(&self) -> [(&'static str, f64); 5] {
        [
            ("work_amount", self.work_amount),
            ("expense_amount", self.expense_amount),
            ("worker_amount", self.worker_amount),
            ("withdraw_amount", self.withdraw_amount),
            ("place_rent", self.place_rent),
        ]
    }

    /// Period label for display; `""` when the entry has none.
    pub fn period_label(&self) -> &'static str {
        self.period.map(|p| p.label()).unwrap_or_default()
    }
}

/// A stored entry: the store-assigned id plus its fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub id: i64,
    #[serde(flatten)]
    pub entry: WorkEntry,
}
