use crate::core::filter::RecordFilter;
use crate::core::input::EntryInput;
use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rClinicBook
/// CLI application to record a clinic's daily work with SQLite
#[derive(Parser)]
#[command(
    name = "rclinicbook",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record a clinic's daily work entries, see running totals and export them",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or a second clinic)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// The ten entry fields, as typed by the user.
///
/// Amounts stay text here: empty means 0 and anything else must parse,
/// which is decided in `core::input`.
#[derive(Args, Debug, Clone, Default)]
pub struct EntryArgs {
    #[arg(long, help = "Work date (default: today, YYYY-MM-DD)")]
    pub date: Option<String>,

    #[arg(long = "work", allow_hyphen_values = true, help = "Amount earned by the session")]
    pub work_amount: Option<String>,

    #[arg(long = "expense", allow_hyphen_values = true, help = "Amount spent")]
    pub expense_amount: Option<String>,

    #[arg(long = "doctor", help = "Doctor name")]
    pub doctor_name: Option<String>,

    #[arg(long = "worker", help = "Worker name (one of the configured workers)")]
    pub worker_name: Option<String>,

    #[arg(long = "worker-amount", allow_hyphen_values = true, help = "Amount owed/paid to the worker")]
    pub worker_amount: Option<String>,

    #[arg(long = "withdraw", allow_hyphen_values = true, help = "Amount withdrawn from the proceeds")]
    pub withdraw_amount: Option<String>,

    #[arg(long = "rent", allow_hyphen_values = true, help = "Place rent for this entry")]
    pub place_rent: Option<String>,

    #[arg(long = "file", help = "Clinic file number")]
    pub file_number: Option<String>,

    #[arg(long = "period", help = "morning | evening")]
    pub period: Option<String>,
}

impl EntryArgs {
    pub fn to_input(&self) -> EntryInput {
        EntryInput {
            work_date: self.date.clone(),
            work_amount: self.work_amount.clone(),
            expense_amount: self.expense_amount.clone(),
            doctor_name: self.doctor_name.clone(),
            worker_name: self.worker_name.clone(),
            worker_amount: self.worker_amount.clone(),
            withdraw_amount: self.withdraw_amount.clone(),
            place_rent: self.place_rent.clone(),
            file_number: self.file_number.clone(),
            period: self.period.clone(),
        }
    }
}

/// Exact-match filter shared by `list`, `del` and `export`.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    #[arg(long = "date", help = "Only entries with exactly this date")]
    pub date: Option<String>,

    #[arg(long = "doctor", help = "Only entries with exactly this doctor name (case-sensitive)")]
    pub doctor: Option<String>,
}

impl FilterArgs {
    pub fn to_filter(&self) -> RecordFilter {
        RecordFilter::new(self.date.as_deref(), self.doctor.as_deref())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check the configuration for invalid values")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Manage the database (info, integrity check, vacuum)
    Db {
        #[arg(long = "info", help = "Show database information")]
        info: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,
    },

    /// Add a daily work entry
    Add {
        #[command(flatten)]
        entry: EntryArgs,
    },

    /// Edit an entry; options not given keep their stored value
    Edit {
        /// Record id (see `list`)
        id: i64,

        #[command(flatten)]
        entry: EntryArgs,
    },

    /// Show a single entry
    Show {
        /// Record id
        id: i64,
    },

    /// List entries (newest date first) with running totals
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Delete entries by id and/or every entry matching a filter
    Del {
        /// Record ids to delete
        ids: Vec<i64>,

        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Export the (filtered) entries to a spreadsheet
    Export {
        #[arg(long, value_enum, default_value_t = ExportFormat::Xlsx)]
        format: ExportFormat,

        #[arg(
            long,
            value_name = "FILE",
            help = "Output file (default: records_<timestamp> in the export dir)"
        )]
        file: Option<String>,

        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long, short = 'f', help = "Overwrite FILE if it exists")]
        force: bool,
    },
}
