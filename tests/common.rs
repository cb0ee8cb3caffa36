#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rclinicbook::db::initialize::init_db;
use rclinicbook::db::pool::DbPool;
use rclinicbook::models::{Period, WorkEntry};
use std::path::PathBuf;
use tempfile::TempDir;

/// Isolated environment for CLI tests: its own HOME (so no real config file
/// is read) and its own database file.
pub struct TestEnv {
    pub dir: TempDir,
    pub db: String,
}

impl TestEnv {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let db = dir
            .path()
            .join("clinic_test.sqlite")
            .to_string_lossy()
            .to_string();
        Self { dir, db }
    }

    /// `rclinicbook --db <db>` with HOME pointing at the temp dir.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("rclinicbook");
        cmd.env("HOME", self.dir.path())
            .env_remove("RUST_LOG")
            .args(["--db", &self.db]);
        cmd
    }

    /// `init` in test mode (schema only, no config file).
    pub fn init(&self) {
        self.cmd().args(["--test", "init"]).assert().success();
    }

    pub fn add(&self, args: &[&str]) {
        self.cmd().arg("add").args(args).assert().success();
    }

    /// Run raw SQL against the test database (rows the CLI would never write).
    pub fn exec_sql(&self, sql: &str) {
        let conn = rusqlite::Connection::open(&self.db).expect("open test db");
        conn.execute_batch(sql).expect("run sql");
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

/// Fresh in-memory store with the schema in place.
pub fn memory_store() -> DbPool {
    let pool = DbPool::in_memory().expect("open in-memory db");
    init_db(&pool.conn).expect("init db");
    pool
}

pub fn entry(date: &str, doctor: &str, work: f64) -> WorkEntry {
    WorkEntry {
        work_date: date.to_string(),
        work_amount: work,
        expense_amount: 10.0,
        doctor_name: doctor.to_string(),
        worker_name: "زهرة".to_string(),
        worker_amount: 30.0,
        withdraw_amount: 0.0,
        place_rent: 20.0,
        file_number: 101,
        period: Some(Period::Morning),
    }
}

/// Position of `needle` in `hay`, panicking with context when absent.
pub fn pos(hay: &str, needle: &str) -> usize {
    hay.find(needle)
        .unwrap_or_else(|| panic!("'{needle}' not found in output:\n{hay}"))
}
