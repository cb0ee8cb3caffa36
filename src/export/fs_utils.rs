// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use chrono::NaiveDateTime;
use std::fs;
use std::path::{Path, PathBuf};

/// Check whether `path` may be written.
///
/// - file does not exist → Ok
/// - file exists and `force` → Ok
/// - file exists without `force` → `FileExists`
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }
    Err(AppError::FileExists(path.display().to_string()))
}

/// Build `records_YYYYMMDD_HHMMSS.<ext>` inside `dir`, adding `_1`, `_2`, …
/// when a file with that name is already there.
pub fn default_export_path(dir: &Path, format: ExportFormat, now: NaiveDateTime) -> PathBuf {
    let stem = format!("records_{}", now.format("%Y%m%d_%H%M%S"));
    let ext = format.extension();

    let mut candidate = dir.join(format!("{stem}.{ext}"));
    let mut n = 1;
    while candidate.exists() {
        candidate = dir.join(format!("{stem}_{n}.{ext}"));
        n += 1;
    }
    candidate
}

/// Create the parent directory of `path` when missing.
pub(crate) fn ensure_parent_dir(path: &Path) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 3)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn name_carries_timestamp() {
        let dir = tempfile::tempdir().unwrap();
        let p = default_export_path(dir.path(), ExportFormat::Xlsx, at(9, 5, 7));
        assert_eq!(p.file_name().unwrap(), "records_20240103_090507.xlsx");
    }

    #[test]
    fn existing_file_is_never_reused() {
        let dir = tempfile::tempdir().unwrap();
        let first = default_export_path(dir.path(), ExportFormat::Csv, at(9, 0, 0));
        fs::write(&first, "x").unwrap();

        let second = default_export_path(dir.path(), ExportFormat::Csv, at(9, 0, 0));
        assert_ne!(first, second);
        assert_eq!(second.file_name().unwrap(), "records_20240103_090000_1.csv");
    }

    #[test]
    fn existing_file_needs_force() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("out.csv");
        fs::write(&p, "x").unwrap();

        assert!(matches!(ensure_writable(&p, false), Err(AppError::FileExists(_))));
        assert!(ensure_writable(&p, true).is_ok());
    }
}
