use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::totals::Totals;
use crate::db::pool::DbPool;
use crate::db::queries::query_records;
use crate::errors::AppResult;
use crate::models::Record;
use crate::ui::messages::{header, info};
use crate::utils::colors::{BOLD, RESET};
use crate::utils::formatting::{fmt_amount, or_dash};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { filter } = cmd {
        let filter = filter.to_filter();
        let pool = DbPool::open_initialized(cfg.database_path())?;

        let records = query_records(&pool.conn, &filter)?;
        if records.is_empty() {
            info(format!("No records found ({}).", filter.describe()));
            return Ok(());
        }

        let totals = Totals::from_records(&records);

        header(format!("📋 Records ({})", filter.describe()));
        print!("{}", render_records(&records));
        println!();
        print_totals(&totals, records.len());
    }
    Ok(())
}

fn render_records(records: &[Record]) -> String {
    let mut table = Table::new(vec![
        Column::right("ID"),
        Column::left("Date"),
        Column::right("Work"),
        Column::right("Expense"),
        Column::left("Doctor"),
        Column::left("Worker"),
        Column::right("Worker amt"),
        Column::right("Withdraw"),
        Column::right("Rent"),
        Column::right("File"),
        Column::left("Period"),
    ]);

    for r in records {
        let e = &r.entry;
        table.add_row(vec![
            r.id.to_string(),
            e.work_date.clone(),
            fmt_amount(e.work_amount),
            fmt_amount(e.expense_amount),
            or_dash(&e.doctor_name).to_string(),
            or_dash(&e.worker_name).to_string(),
            fmt_amount(e.worker_amount),
            fmt_amount(e.withdraw_amount),
            fmt_amount(e.place_rent),
            e.file_number.to_string(),
            or_dash(e.period_label()).to_string(),
        ]);
    }

    table.render()
}

fn print_totals(t: &Totals, count: usize) {
    println!("{BOLD}Totals ({count} records){RESET}");
    println!("  Work:       {}", fmt_amount(t.work));
    println!("  Expense:    {}", fmt_amount(t.expense));
    println!("  Worker:     {}", fmt_amount(t.worker));
    println!("  Withdrawal: {}", fmt_amount(t.withdraw));
    println!("  Rent:       {}", fmt_amount(t.rent));
}
