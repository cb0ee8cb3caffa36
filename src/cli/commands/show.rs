use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::get_record;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::formatting::{fmt_amount, or_dash};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let pool = DbPool::open_initialized(cfg.database_path())?;
        let rec = get_record(&pool.conn, *id)?;
        let e = &rec.entry;

        header(format!("Record #{}", rec.id));
        let lines = [
            ("Date", e.work_date.clone()),
            ("Work amount", fmt_amount(e.work_amount)),
            ("Expense", fmt_amount(e.expense_amount)),
            ("Doctor", or_dash(&e.doctor_name).to_string()),
            ("Worker", or_dash(&e.worker_name).to_string()),
            ("Worker amount", fmt_amount(e.worker_amount)),
            ("Withdrawal", fmt_amount(e.withdraw_amount)),
            ("Place rent", fmt_amount(e.place_rent)),
            ("File number", e.file_number.to_string()),
            ("Period", or_dash(e.period_label()).to_string()),
        ];
        for (label, value) in lines {
            println!("{:<14} {}", format!("{label}:"), value);
        }
    }

    Ok(())
}
