// src/export/model.rs

use crate::models::Record;
use serde::Serialize;

/// Column labels, in export order. There is deliberately no id column.
pub const HEADERS: [&str; 10] = [
    "Date",
    "Work Amount",
    "Expense",
    "Doctor",
    "Worker",
    "Worker Amount",
    "Withdrawal",
    "Place Rent",
    "File Number",
    "Period",
];

/// Flat row written by every exporter. Serde names match `HEADERS`.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RecordExport {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Work Amount")]
    pub work_amount: f64,
    #[serde(rename = "Expense")]
    pub expense_amount: f64,
    #[serde(rename = "Doctor")]
    pub doctor_name: String,
    #[serde(rename = "Worker")]
    pub worker_name: String,
    #[serde(rename = "Worker Amount")]
    pub worker_amount: f64,
    #[serde(rename = "Withdrawal")]
    pub withdraw_amount: f64,
    #[serde(rename = "Place Rent")]
    pub place_rent: f64,
    #[serde(rename = "File Number")]
    pub file_number: i64,
    #[serde(rename = "Period")]
    pub period: String,
}

impl From<&Record> for RecordExport {
    fn from(r: &Record) -> Self {
        let e = &r.entry;
        Self {
            date: e.work_date.clone(),
            work_amount: e.work_amount,
            expense_amount: e.expense_amount,
            doctor_name: e.doctor_name.clone(),
            worker_name: e.worker_name.clone(),
            worker_amount: e.worker_amount,
            withdraw_amount: e.withdraw_amount,
            place_rent: e.place_rent,
            file_number: e.file_number,
            period: e.period_label().to_string(),
        }
    }
}

/// A typed spreadsheet cell.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Cell {
    /// The work date; written as an Excel date when it is ISO formatted.
    Date(String),
    Text(String),
    Number(f64),
}

impl Cell {
    /// Text as it would be displayed, used for column width estimates.
    pub(crate) fn display(&self) -> String {
        match self {
            Cell::Date(s) | Cell::Text(s) => s.clone(),
            Cell::Number(n) => n.to_string(),
        }
    }
}

/// Cells of one row, in `HEADERS` order.
pub(crate) fn export_to_cells(e: &RecordExport) -> Vec<Cell> {
    vec![
        Cell::Date(e.date.clone()),
        Cell::Number(e.work_amount),
        Cell::Number(e.expense_amount),
        Cell::Text(e.doctor_name.clone()),
        Cell::Text(e.worker_name.clone()),
        Cell::Number(e.worker_amount),
        Cell::Number(e.withdraw_amount),
        Cell::Number(e.place_rent),
        Cell::Number(e.file_number as f64),
        Cell::Text(e.period.clone()),
    ]
}
