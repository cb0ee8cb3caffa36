use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RED, RESET, YELLOW};
use rusqlite::{Connection, OptionalExtension};
use std::fs;

/// Basic facts about the `daily_work` table.
#[derive(Debug, Clone, PartialEq)]
pub struct DbInfo {
    pub records: i64,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
    pub doctors: i64,
}

pub fn load_db_info(conn: &Connection) -> AppResult<DbInfo> {
    let records: i64 = conn.query_row("SELECT COUNT(*) FROM daily_work", [], |row| row.get(0))?;

    let first_date: Option<String> = conn
        .query_row(
            "SELECT work_date FROM daily_work WHERE work_date IS NOT NULL
             ORDER BY work_date ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_date: Option<String> = conn
        .query_row(
            "SELECT work_date FROM daily_work WHERE work_date IS NOT NULL
             ORDER BY work_date DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let doctors: i64 = conn.query_row(
        "SELECT COUNT(DISTINCT doctor_name) FROM daily_work
         WHERE doctor_name IS NOT NULL AND doctor_name <> ''",
        [],
        |row| row.get(0),
    )?;

    Ok(DbInfo {
        records,
        first_date,
        last_date,
        doctors,
    })
}

/// Run `PRAGMA integrity_check` and return the problems found (empty when ok).
pub fn integrity_check(conn: &Connection) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare("PRAGMA integrity_check;")?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut problems = Vec::new();
    for r in rows {
        let line = r?;
        if line != "ok" {
            problems.push(line);
        }
    }
    Ok(problems)
}

pub fn print_db_info(info: &DbInfo, db_path: &str) {
    println!();

    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);
    println!(
        "{}• Total records:{} {}{}{}",
        CYAN, RESET, GREEN, info.records, RESET
    );
    println!("{}• Doctors:{} {}", CYAN, RESET, info.doctors);

    let dash = format!("{GREY}--{RESET}");
    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", info.first_date.as_deref().unwrap_or(&dash));
    println!("    to:   {}", info.last_date.as_deref().unwrap_or(&dash));
    println!();
}

pub fn print_integrity(problems: &[String]) {
    if problems.is_empty() {
        println!("{}✔ Integrity check passed.{}\n", GREEN, RESET);
    } else {
        println!("{}✘ Integrity check failed:{}", RED, RESET);
        for p in problems {
            println!("    {p}");
        }
        println!();
    }
}
