use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::input::check_worker;
use crate::db::pool::DbPool;
use crate::db::queries::insert_record;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date::today_iso;
use crate::utils::formatting::or_dash;

/// Add a daily work entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { entry } = cmd {
        //
        // 1. Parse the typed values (blank amounts → 0)
        //
        let new_entry = entry.to_input().new_entry(&today_iso(), cfg.period()?)?;
        check_worker(&new_entry.worker_name, &cfg.workers)?;

        //
        // 2. Store
        //
        let pool = DbPool::open_initialized(cfg.database_path())?;
        let id = insert_record(&pool.conn, &new_entry)?;

        success(format!(
            "Record #{} saved: {}, doctor: {}, worker: {}, period: {}",
            id,
            new_entry.work_date,
            or_dash(&new_entry.doctor_name),
            or_dash(&new_entry.worker_name),
            or_dash(new_entry.period_label())
        ));
    }

    Ok(())
}
