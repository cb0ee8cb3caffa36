use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::input::check_worker;
use crate::db::pool::DbPool;
use crate::db::queries::{get_record, update_record};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Edit an existing entry: unspecified options keep the stored values.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit { id, entry } = cmd {
        let pool = DbPool::open_initialized(cfg.database_path())?;

        let current = get_record(&pool.conn, *id)?;
        let updated = entry.to_input().apply_to(&current.entry)?;

        if updated == current.entry {
            info(format!("Record #{} unchanged.", id));
            return Ok(());
        }

        // only a newly given worker is checked against the config list
        if entry.worker_name.is_some() {
            check_worker(&updated.worker_name, &cfg.workers)?;
        }
        update_record(&pool.conn, *id, &updated)?;

        success(format!("Record #{} updated.", id));
    }

    Ok(())
}
