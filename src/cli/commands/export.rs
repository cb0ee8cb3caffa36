use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;
use crate::ui::messages::warning;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        filter,
        force,
    } = cmd
    {
        let filter = filter.to_filter();
        let mut pool = DbPool::open_initialized(cfg.database_path())?;

        match ExportLogic::export(
            &mut pool,
            &filter,
            *format,
            file.as_deref().map(Path::new),
            &cfg.export_dir_path(),
            *force,
        ) {
            Ok(_) => {}
            Err(AppError::EmptyExport) => {
                warning(format!(
                    "Nothing to export: no records found ({}).",
                    filter.describe()
                ));
            }
            Err(e) => return Err(e),
        }
    }
    Ok(())
}
