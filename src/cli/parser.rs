use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for punchclock
/// Employee punch-clock over SQLite with monthly PDF reports
#[derive(Parser)]
#[command(
    name = "punchclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "Employee punch-clock: record attendance events and generate monthly reports",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

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

    /// Inspect the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Validate offset and shift settings")]
        check: bool,
    },

    /// Manage the employee registry
    Employee {
        #[command(subcommand)]
        action: EmployeeAction,
    },

    /// Record the next punch for an employee (entry/exit alternate automatically)
    Punch {
        /// Employee id
        employee: i64,

        /// Client-side timestamp (RFC 3339); the server clock is used when
        /// absent or unreadable
        #[arg(long = "at", value_name = "TIMESTAMP")]
        at: Option<String>,
    },

    /// Show the next expected punch kind for an employee
    Status {
        /// Employee id
        employee: i64,
    },

    /// List punch records, newest first
    History {
        #[arg(long, help = "Filter by employee id")]
        employee: Option<i64>,

        #[arg(long = "from", value_name = "DATE", help = "Start date (YYYY-MM-DD)")]
        from: Option<String>,

        #[arg(long = "to", value_name = "DATE", help = "End date (YYYY-MM-DD)")]
        to: Option<String>,

        #[arg(long, help = "Filter by kind: entry or exit")]
        kind: Option<String>,

        #[arg(long, value_enum, help = "Export format (used with --file)")]
        format: Option<ExportFormat>,

        #[arg(long, value_name = "FILE", help = "Write the listing to a file")]
        file: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite the output file if present")]
        force: bool,
    },

    /// Edit the administrative note of a punch record
    Note {
        /// Punch record id
        punch: i64,

        #[arg(long, help = "Note text to store")]
        text: Option<String>,

        #[arg(long, conflicts_with = "text", help = "Remove the stored note")]
        clear: bool,
    },

    /// Generate an attendance report PDF for an employee
    Report {
        /// Employee id
        employee: i64,

        #[arg(long, value_name = "YYYY-MM", help = "Report month (defaults to the current month)")]
        month: Option<String>,

        #[arg(long = "from", value_name = "DATE", help = "Custom range start (YYYY-MM-DD)")]
        from: Option<String>,

        #[arg(long = "to", value_name = "DATE", help = "Custom range end (YYYY-MM-DD)")]
        to: Option<String>,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite the output file if present")]
        force: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage the database (migrations, integrity checks)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },
}

#[derive(Subcommand)]
pub enum EmployeeAction {
    /// Register a new employee
    Add {
        #[arg(long)]
        username: String,

        #[arg(long = "name")]
        full_name: String,

        #[arg(long = "national-id")]
        national_id: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        role: Option<String>,

        #[arg(long = "hired", value_name = "DATE", help = "Hire date (YYYY-MM-DD, defaults to today)")]
        hire_date: Option<String>,
    },

    /// List registered employees
    List,

    /// Remove an employee and all of their punches
    Del {
        /// Employee id
        id: i64,
    },
}
