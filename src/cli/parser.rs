use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimesheet
/// CLI application to edit a yearly Excel timesheet
#[derive(Parser)]
#[command(
    name = "rtimesheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Edit a yearly Excel timesheet from the command line, keeping its formulas intact",
    long_about = None
)]
pub struct Cli {
    /// Use this configuration file instead of ~/.rtimesheet/rtimesheet.conf
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Override the workbook to read
    #[arg(global = true, long = "workbook", value_name = "FILE")]
    pub workbook: Option<String>,

    /// Override where edited workbooks are saved
    #[arg(global = true, long = "output", value_name = "FILE")]
    pub output: Option<String>,

    /// Verbose diagnostics on stderr (or in the configured log file)
    #[arg(global = true, long = "debug")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(long = "editor", requires = "edit_config")]
        editor: Option<String>,
    },

    /// Create a blank timesheet workbook for one year
    Template {
        /// Destination .xlsx file
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Calendar year of the sheets
        #[arg(long)]
        year: i32,

        /// Overwrite an existing file without asking
        #[arg(long)]
        force: bool,
    },

    /// List entries
    List {
        /// Only this month (3, 03 or 2025-03)
        #[arg(long, short, conflicts_with = "day")]
        month: Option<String>,

        /// Only this day (YYYY-MM-DD)
        #[arg(long, short)]
        day: Option<String>,
    },

    /// Add an entry, or edit one with --edit --pair N
    Add {
        /// Date (YYYY-MM-DD)
        date: String,

        /// Start time (HH:MM); defaults to the end of the previous entry of the day
        #[arg(long = "in")]
        start: Option<String>,

        /// End time (HH:MM)
        #[arg(long = "out")]
        end: Option<String>,

        /// Pause: 30, 30m, 1h, 1h30m or 0:45
        #[arg(long)]
        pause: Option<String>,

        /// Project number from the project sheet
        #[arg(long)]
        project: Option<String>,

        /// Activity description
        #[arg(long = "desc")]
        description: Option<String>,

        /// Entry of the day to edit (1-based, with --edit)
        #[arg(long = "pair", requires = "edit")]
        edit_pair: Option<usize>,

        /// Edit an existing entry instead of adding one
        #[arg(long = "edit", requires = "edit_pair")]
        edit: bool,
    },

    /// Delete one entry (--pair) or all entries of a day
    Del {
        /// Date (YYYY-MM-DD)
        date: String,

        /// Entry of the day to delete (1-based)
        #[arg(long = "pair")]
        pair: Option<usize>,

        /// Do not ask for confirmation
        #[arg(long, short)]
        yes: bool,
    },

    /// List or search the project directory
    Projects {
        /// Case-insensitive match on code, project or customer
        #[arg(long, short)]
        search: Option<String>,
    },

    /// Export entries
    Export {
        #[arg(long, value_enum)]
        format: ExportFormat,

        /// Destination file
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Only this month (3, 03 or 2025-03)
        #[arg(long)]
        month: Option<String>,

        /// Overwrite an existing file without asking
        #[arg(long)]
        force: bool,
    },

    /// Write the workbook back in memory and report rows that would change
    Check,
}
