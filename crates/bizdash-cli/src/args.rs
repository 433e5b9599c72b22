use crate::types::{LogLevel, OutputFormat, RecordKind};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bizdash")]
#[command(about = "Browse and page through dashboard records from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Workspace directory holding config.toml (default: $BIZDASH_PATH or the XDG data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print one page of records
    List {
        kind: RecordKind,

        /// JSON array of records
        #[arg(long)]
        file: PathBuf,

        #[arg(long)]
        search: Option<String>,

        /// Page number; values below 1 are ignored
        #[arg(long, default_value = "1", allow_negative_numbers = true)]
        page: i64,

        /// Rows per page (default: page_size from config)
        #[arg(long)]
        size: Option<u32>,
    },

    /// Interactive list with search, paging, edit and delete
    Browse {
        kind: RecordKind,

        #[arg(long)]
        file: PathBuf,
    },

    /// Show the navigation tree, or the breadcrumb for a route
    Nav { path: Option<String> },

    /// Show the signed-in session from config
    Whoami,
}
