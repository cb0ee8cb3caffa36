//! Running sums over a set of records.

use crate::models::Record;
use serde::Serialize;

/// The five running sums shown under a record listing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Totals {
    pub work: f64,
    pub expense: f64,
    pub worker: f64,
    pub withdraw: f64,
    pub rent: f64,
}

impl Totals {
    /// Sum every amount column of `records`. An empty slice gives all zeros.
    ///
    /// Each column is added up in ascending value order, so the result is the
    /// same bit pattern whatever order the records come in.
    pub fn from_records(records: &[Record]) -> Self {
        let column = |pick: fn(&Record) -> f64| -> f64 {
            let mut values: Vec<f64> = records.iter().map(pick).collect();
            values.sort_by(f64::total_cmp);
            values.into_iter().fold(0.0, |acc, v| acc + v)
        };

        Totals {
            work: column(|r| r.entry.work_amount),
            expense: column(|r| r.entry.expense_amount),
            worker: column(|r| r.entry.worker_amount),
            withdraw: column(|r| r.entry.withdraw_amount),
            rent: column(|r| r.entry.place_rent),
        }
    }
}
