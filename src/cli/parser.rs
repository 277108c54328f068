use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for knitcount
/// Count knitting rows and time the project, persisted in SQLite
#[derive(Parser)]
#[command(
    name = "knitcount",
    version = env!("CARGO_PKG_VERSION"),
    about = "A knitting row counter with a project stopwatch, persisted in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or a second project)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Without a command the current status is shown
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

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

    /// Show project name, stopwatch and rows
    Status,

    /// Show or change the project name
    Name {
        #[command(subcommand)]
        action: NameAction,
    },

    /// Work with the row counters (positions are 1-based)
    Rows {
        #[command(subcommand)]
        action: RowsAction,
    },

    /// Start, stop or watch the project stopwatch
    Watch {
        #[command(subcommand)]
        action: WatchAction,
    },

    /// Export the project (rows, counts, elapsed time)
    Export {
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

#[derive(Subcommand)]
pub enum NameAction {
    /// Print the project name
    Show,
    /// Rename the project (blank restores "Knitting Counter")
    Set {
        #[arg(default_value = "")]
        name: String,
    },
}

#[derive(Subcommand)]
pub enum RowsAction {
    /// List all rows
    List,

    /// Insert a new row
    Add {
        /// Insert after this position (0 = at the start, default = at the end)
        #[arg(long, value_name = "POS")]
        after: Option<usize>,
    },

    /// Remove a row (the last remaining row is kept)
    Remove { pos: usize },

    /// Rename a row (blank restores "Row N")
    Rename {
        pos: usize,
        #[arg(default_value = "")]
        name: String,
    },

    /// Increase a row count
    Inc {
        pos: usize,
        #[arg(long, default_value_t = 1)]
        by: u32,
    },

    /// Decrease a row count (never below zero)
    Dec {
        pos: usize,
        #[arg(long, default_value_t = 1)]
        by: u32,
    },

    /// Set a row count; non-numeric input counts as 0
    Set {
        pos: usize,
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Move a row to another position
    Move { from: usize, to: usize },
}

#[derive(Subcommand)]
pub enum WatchAction {
    /// Print the elapsed time
    Show,
    /// Start or stop the stopwatch
    Toggle,
    /// Keep redrawing the elapsed time while the stopwatch runs
    Live {
        /// Stop after this many seconds (default: until interrupted)
        #[arg(long)]
        seconds: Option<u64>,
    },
}
