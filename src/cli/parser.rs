use crate::export::ExportFormat;
use crate::models::event_type::EventType;
use clap::{Parser, Subcommand};

/// Command-line interface definition for geoclock
#[derive(Parser)]
#[command(
    name = "geoclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "Geofenced clock-in/clock-out recording with shift and overtime reports",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their defaults")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage the employee registry
    Employee {
        #[command(subcommand)]
        action: EmployeeAction,
    },

    /// Record a clock-in or clock-out
    Clock {
        /// Event kind
        #[arg(value_enum)]
        kind: EventType,

        #[arg(long, short = 'e', help = "Employee name")]
        employee: String,

        #[arg(long, help = "Employee PIN")]
        pin: String,

        #[arg(
            long = "lat",
            allow_negative_numbers = true,
            requires = "lon",
            help = "Reported latitude (decimal degrees)"
        )]
        lat: Option<f64>,

        #[arg(
            long = "lon",
            allow_negative_numbers = true,
            requires = "lat",
            help = "Reported longitude (decimal degrees)"
        )]
        lon: Option<f64>,

        #[arg(long, value_name = "REF", help = "Reference to the photo evidence")]
        photo: Option<String>,

        #[arg(
            long,
            value_name = "DATETIME",
            help = "Explicit local time \"YYYY-MM-DD HH:MM\" (manual correction)"
        )]
        at: Option<String>,
    },

    /// List raw attendance events
    Events {
        #[arg(
            long,
            short,
            value_name = "RANGE",
            help = "Filter by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'e', help = "Only events of this employee")]
        employee: Option<String>,
    },

    /// Reconstruct shifts and overtime (most recent first)
    Shifts {
        #[arg(
            long,
            short,
            value_name = "RANGE",
            help = "Filter by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'e', help = "Only shifts of this employee")]
        employee: Option<String>,

        #[arg(long, help = "Also list superseded INs, orphan OUTs and invalid pairs")]
        issues: bool,
    },

    /// Show employees currently clocked in
    Status,

    /// Export raw events
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Absolute path of the output file")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'e', help = "Only events of this employee")]
        employee: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite output file without confirmation")]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Compress the backup into a .zip archive")]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing backup without confirmation")]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum EmployeeAction {
    /// Register a new employee
    Add {
        name: String,

        #[arg(long, help = "PIN used to clock in and out (4 to 12 digits)")]
        pin: String,
    },

    /// List employees
    List {
        #[arg(long, help = "Include deactivated employees")]
        all: bool,
    },

    /// Deactivate an employee (their events are kept)
    Deactivate { name: String },
}
