use crate::core::filter::RecordFilter;
use crate::errors::{AppError, AppResult};
use crate::models::{Period, Record, WorkEntry};
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Row, params};

const SELECT_RECORD: &str = "SELECT id, work_date, work_amount, expense_amount, doctor_name,
            worker_name, worker_amount, withdraw_amount, place_rent,
            file_number, period
     FROM daily_work";

/// Mapping DB → Record.
///
/// NULL amounts read as 0 and NULL text as "", matching rows written by
/// older versions of the app, and so does a NULL period (`None`). A period
/// that is present but unknown is a conversion failure.
pub fn map_row(row: &Row) -> rusqlite::Result<Record> {
    let period = match row.get::<_, Option<String>>("period")? {
        None => None,
        Some(s) => Some(Period::from_db_str(&s).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                10,
                Type::Text,
                Box::new(AppError::validation(format!(
                    "Invalid period '{s}' in stored record"
                ))),
            )
        })?),
    };

    let amount = |col: &str| -> rusqlite::Result<f64> {
        Ok(row.get::<_, Option<f64>>(col)?.unwrap_or(0.0))
    };
    let text = |col: &str| -> rusqlite::Result<String> {
        Ok(row.get::<_, Option<String>>(col)?.unwrap_or_default())
    };

    Ok(Record {
        id: row.get("id")?,
        entry: WorkEntry {
            work_date: text("work_date")?,
            work_amount: amount("work_amount")?,
            expense_amount: amount("expense_amount")?,
            doctor_name: text("doctor_name")?,
            worker_name: text("worker_name")?,
            worker_amount: amount("worker_amount")?,
            withdraw_amount: amount("withdraw_amount")?,
            place_rent: amount("place_rent")?,
            file_number: row.get::<_, Option<i64>>("file_number")?.unwrap_or(0),
            period,
        },
    })
}

/// Reject values that would silently corrupt the running totals.
pub fn validate_entry(entry: &WorkEntry) -> AppResult<()> {
    for (name, value) in entry.amounts() {
        if !value.is_finite() {
            return Err(AppError::validation(format!(
                "{name} must be a finite number, got {value}"
            )));
        }
    }
    Ok(())
}

/// Insert a new entry and return its store-assigned id.
pub fn insert_record(conn: &Connection, entry: &WorkEntry) -> AppResult<i64> {
    validate_entry(entry)?;

    conn.execute(
        "INSERT INTO daily_work (work_date, work_amount, expense_amount, doctor_name,
                                 worker_name, worker_amount, withdraw_amount,
                                 place_rent, file_number, period)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            entry.work_date,
            entry.work_amount,
            entry.expense_amount,
            entry.doctor_name,
            entry.worker_name,
            entry.worker_amount,
            entry.withdraw_amount,
            entry.place_rent,
            entry.file_number,
            entry.period.map(|p| p.to_db_str()),
        ],
    )?;

    let id = conn.last_insert_rowid();
    tracing::debug!(id, date = %entry.work_date, "inserted record");
    Ok(id)
}

/// Overwrite every field except `id`.
///
/// Fails with `NotFound` when no row has this id; the table is then unchanged.
pub fn update_record(conn: &Connection, id: i64, entry: &WorkEntry) -> AppResult<()> {
    validate_entry(entry)?;

    let changed = conn.execute(
        "UPDATE daily_work
         SET work_date = ?1, work_amount = ?2, expense_amount = ?3,
             doctor_name = ?4, worker_name = ?5, worker_amount = ?6,
             withdraw_amount = ?7, place_rent = ?8, file_number = ?9,
             period = ?10
         WHERE id = ?11",
        params![
            entry.work_date,
            entry.work_amount,
            entry.expense_amount,
            entry.doctor_name,
            entry.worker_name,
            entry.worker_amount,
            entry.withdraw_amount,
            entry.place_rent,
            entry.file_number,
            entry.period.map(|p| p.to_db_str()),
            id,
        ],
    )?;

    if changed == 0 {
        return Err(AppError::NotFound(id));
    }

    tracing::debug!(id, "updated record");
    Ok(())
}

/// Delete a record. Deleting a missing id is not an error.
///
/// Returns whether a row was actually removed.
pub fn delete_record(conn: &Connection, id: i64) -> AppResult<bool> {
    let changed = conn.execute("DELETE FROM daily_work WHERE id = ?1", [id])?;
    tracing::debug!(id, removed = changed > 0, "delete record");
    Ok(changed > 0)
}

pub fn get_record(conn: &Connection, id: i64) -> AppResult<Record> {
    let mut stmt = conn.prepare(&format!("{SELECT_RECORD} WHERE id = ?1"))?;
    stmt.query_row([id], map_row)
        .optional()?
        .ok_or(AppError::NotFound(id))
}

/// Load the filtered view, newest date first, newest id first within a date.
pub fn query_records(conn: &Connection, filter: &RecordFilter) -> AppResult<Vec<Record>> {
    let mut stmt = conn.prepare(&format!(
        "{SELECT_RECORD}
         WHERE (?1 IS NULL OR work_date = ?1)
           AND (?2 IS NULL OR doctor_name = ?2)
         ORDER BY work_date DESC, id DESC"
    ))?;

    let rows = stmt.query_map(params![filter.date(), filter.doctor()], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }

    tracing::debug!(filter = %filter.describe(), count = out.len(), "queried records");
    Ok(out)
}
