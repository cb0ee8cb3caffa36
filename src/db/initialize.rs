use crate::errors::AppResult;
use rusqlite::Connection;

/// Name of the single table holding every work entry.
pub const TABLE_DAILY_WORK: &str = "daily_work";

const SQL_CREATE_DAILY_WORK: &str = r#"
    CREATE TABLE IF NOT EXISTS daily_work (
        id              INTEGER PRIMARY KEY AUTOINCREMENT,
        work_date       TEXT,
        work_amount     REAL,
        expense_amount  REAL,
        doctor_name     TEXT,
        worker_name     TEXT,
        worker_amount   REAL,
        withdraw_amount REAL,
        place_rent      REAL,
        file_number     INTEGER,
        period          TEXT
    );
"#;

/// Initialize the database.
///
/// Safe to run on every start: the table is only created when missing and
/// existing rows are never touched. The column layout matches databases
/// written by earlier versions of the clinic app, so those open as-is.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(SQL_CREATE_DAILY_WORK)?;
    Ok(())
}
