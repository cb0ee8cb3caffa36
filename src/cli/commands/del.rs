use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::core::selection::SelectionSet;
use crate::db::pool::DbPool;
use crate::db::queries::query_records;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { ids, filter, yes } = cmd {
        let filter = filter.to_filter();
        if ids.is_empty() && filter.is_empty() {
            return Err(AppError::validation(
                "nothing to delete: give record ids and/or --date/--doctor",
            ));
        }

        let mut pool = DbPool::open_initialized(cfg.database_path())?;

        //
        // Build the selection: explicit ids plus the filtered view
        //
        let mut selection: SelectionSet = ids.iter().copied().collect();
        if !filter.is_empty() {
            let records = query_records(&pool.conn, &filter)?;
            selection.extend(records.iter().map(|r| r.id));
        }

        if selection.is_empty() {
            info(format!("No records match ({}).", filter.describe()));
            return Ok(());
        }

        //
        // Confirmation prompt
        //
        let selected = selection.len();
        if !*yes {
            let prompt = format!(
                "Delete {} record(s)? Deleted records cannot be recovered.",
                selected
            );
            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        //
        // Execute deletion
        //
        let removed = DeleteLogic::delete_selected(&mut pool, &mut selection)?;

        success(format!("Deleted {} record(s).", removed));
        if removed < selected {
            info(format!(
                "{} selected id(s) did not exist.",
                selected - removed
            ));
        }
    }

    Ok(())
}
