use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "timesheet")]
#[command(about = "Terminal timesheet editor with overlap checking")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the editor (default)
    Run {
        /// Keep entries in memory only; nothing is written to disk
        #[arg(long)]
        ephemeral: bool,
    },
    /// Print stored entries in load order
    List {
        /// Only entries on this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
        /// Only entries in this category
        #[arg(long)]
        category: Option<String>,
    },
    /// Print config path and create default file if missing
    ConfigPath,
}
