// src/export/logic.rs

use crate::core::filter::RecordFilter;
use crate::db::pool::DbPool;
use crate::db::queries::query_records;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::{default_export_path, ensure_parent_dir, ensure_writable};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::RecordExport;
use crate::export::xlsx::export_xlsx;
use crate::models::Record;
use chrono::Local;
use std::path::{Path, PathBuf};

/// High level export entry points.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `records` (already filtered and ordered) to `path`.
    ///
    /// An empty slice is refused with `EmptyExport` and no file is created.
    /// An existing file is only replaced when `force` is set.
    pub fn export_records(
        records: &[Record],
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<()> {
        if records.is_empty() {
            return Err(AppError::EmptyExport);
        }

        ensure_writable(path, force)?;
        ensure_parent_dir(path)?;

        let rows: Vec<RecordExport> = records.iter().map(RecordExport::from).collect();

        tracing::debug!(
            format = format.as_str(),
            rows = rows.len(),
            path = %path.display(),
            "exporting records"
        );

        match format {
            ExportFormat::Xlsx => export_xlsx(&rows, path),
            ExportFormat::Csv => export_csv(&rows, path),
            ExportFormat::Json => export_json(&rows, path),
        }
    }

    /// Export the current view: query with `filter`, then write the result.
    ///
    /// When `file` is `None` a timestamped name is derived inside `dir`.
    /// Returns the path actually written.
    pub fn export(
        pool: &mut DbPool,
        filter: &RecordFilter,
        format: ExportFormat,
        file: Option<&Path>,
        dir: &Path,
        force: bool,
    ) -> AppResult<PathBuf> {
        let records = query_records(&pool.conn, filter)?;

        let path = match file {
            Some(p) => p.to_path_buf(),
            None => default_export_path(dir, format, Local::now().naive_local()),
        };

        Self::export_records(&records, format, &path, force)?;
        Ok(path)
    }
}
