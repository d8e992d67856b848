use crate::export::ReportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for worklocation
/// CLI application to record daily work location with SQLite
#[derive(Parser)]
#[command(
    name = "worklocation",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record where you worked each day (office/remote) and track weekly office attendance",
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
    /// Initialize the configuration and the database (tables, locations, weeks)
    Init {
        #[arg(long = "start-year", help = "First ISO year to seed into the Week table")]
        start_year: Option<i32>,

        #[arg(long = "years", help = "Number of consecutive years to seed")]
        years: Option<u32>,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
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

    /// Manage the database (integrity checks, info, vacuum)
    Db {
        #[arg(long = "check", help = "Check database and foreign key integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Record the work location of a day (never overwrites)
    Add {
        /// Date of the work day (YYYY-MM-DD or "today")
        date: String,

        /// Location name (e.g. office, remote)
        location: String,
    },

    /// Revise the location of an already recorded day
    Set {
        /// Date of the work day (YYYY-MM-DD)
        date: String,

        /// New location name
        location: String,
    },

    /// Show the record of a single day
    Show {
        /// Date of the work day (YYYY-MM-DD or "today")
        date: String,
    },

    /// List the most recent work days
    Recent {
        #[arg(long, short = 'n', help = "Number of days to show")]
        limit: Option<usize>,
    },

    /// Office days per week over a range of weeks
    Summary {
        #[arg(long, value_name = "YYYY-WW", help = "First week (default: week 01 of this year)")]
        from: Option<String>,

        #[arg(long, value_name = "YYYY-WW", help = "Last week (default: current week)")]
        to: Option<String>,
    },

    /// Year-to-date weekly office average and current week count
    Ytd {
        #[arg(long, help = "ISO year (default: current)")]
        year: Option<i32>,

        #[arg(long, value_name = "YYYY-WW", help = "Last week included (default: current week)")]
        week: Option<String>,
    },

    /// List the location vocabulary or add a new location
    Locations {
        #[arg(long = "add", value_name = "NAME", help = "Add a new location")]
        add: Option<String>,
    },

    /// Import work days from a CSV file (Year,Month,Day,Location)
    Import {
        #[arg(value_name = "FILE")]
        file: String,
    },

    /// Write the year-to-date attendance report
    Report {
        #[arg(long, value_enum, default_value = "html")]
        format: ReportFormat,

        #[arg(long, value_name = "FILE", help = "Output file (default from config)")]
        file: Option<String>,

        #[arg(long, help = "ISO year (default: current)")]
        year: Option<i32>,

        #[arg(long, value_name = "YYYY-WW", help = "Last week included (default: current week)")]
        week: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },
}
