use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for wagebook
/// CLI application to keep a worker-wages ledger in a local JSON document
#[derive(Parser)]
#[command(
    name = "wagebook",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple wage ledger CLI: workers, daily logs, advances and overtime",
    long_about = None
)]
pub struct Cli {
    /// Override data file path (useful for tests or custom locations)
    #[arg(global = true, long = "data")]
    pub data: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty data file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check the configuration for weak spots")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage workers
    Worker {
        #[command(subcommand)]
        action: WorkerAction,
    },

    /// Add or delete daily log entries
    Log {
        #[command(subcommand)]
        action: LogAction,
    },

    /// List the general ledger
    List {
        #[arg(long, help = "Show only entries of this worker id")]
        worker: Option<String>,

        #[arg(
            long,
            short,
            help = "Filter by year/month/day or a custom range (e.g. 2026-08 or 2026-01:2026-06)"
        )]
        period: Option<String>,
    },

    /// Show the dashboard: totals, daily flow, worker balances
    Summary {
        #[arg(long, default_value_t = 7, help = "Trailing window size in days")]
        days: usize,
    },

    /// Import daily logs from a CSV day-sheet
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, value_name = "WORKER_ID", help = "Worker to credit the rows to")]
        worker: String,

        #[arg(long, short = 'y', help = "Skip the review confirmation prompt")]
        yes: bool,
    },

    /// Import daily logs from an image via the configured extraction command
    Scan {
        #[arg(long, value_name = "IMAGE")]
        image: String,

        #[arg(long, value_name = "WORKER_ID", help = "Worker to credit the rows to")]
        worker: String,

        #[arg(long, short = 'y', help = "Skip the review confirmation prompt")]
        yes: bool,
    },

    /// Write a backup of the whole ledger to a file
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Replace the whole ledger with a backup file (all-or-nothing)
    Restore {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// Export ledger entries
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum WorkerAction {
    /// Register a new worker
    Add {
        #[arg(long)]
        name: String,

        #[arg(long, default_value = "")]
        role: String,

        /// Pay for a full attendance day
        #[arg(long = "daily-rate", allow_negative_numbers = true)]
        daily_rate: f64,

        /// Pay per overtime hour
        #[arg(long = "hourly-rate", allow_negative_numbers = true)]
        hourly_rate: f64,
    },

    /// List workers with their rates
    List,

    /// Delete a worker and all of their log entries
    Del {
        id: String,

        #[arg(long, short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum LogAction {
    /// Record one day for a worker
    Add {
        /// Worker id the entry belongs to
        worker: String,

        #[arg(long, help = "Calendar date (YYYY-MM-DD), default today")]
        date: Option<String>,

        #[arg(long, default_value = "", help = "Task description")]
        task: String,

        #[arg(long, help = "Mark the day as absent (no base pay)")]
        absent: bool,

        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true, help = "Overtime hours")]
        ot: f64,

        #[arg(
            long = "ot-rate",
            allow_negative_numbers = true,
            help = "Overtime rate snapshot (default: worker's hourly rate)"
        )]
        ot_rate: Option<f64>,

        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true, help = "Advance paid out")]
        advance: f64,

        #[arg(long, default_value = "")]
        note: String,
    },

    /// Delete one log entry by id
    Del {
        id: String,

        #[arg(long, short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },
}
