//! CLI commands and argument parsing

use crate::config::TOKEN_ENV_VAR;
use crate::types::ExportFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Explore an offset/limit paginated collection
#[derive(Parser, Debug)]
#[command(name = "pagewise")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// API token
    #[arg(long, global = true, env = TOKEN_ENV_VAR, hide_env_values = true)]
    pub token: Option<String>,

    /// Configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Inline config JSON
    #[arg(long, global = true)]
    pub config_json: Option<String>,

    /// Override the API base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Override the initial page size (1-100)
    #[arg(long, global = true)]
    pub page_size: Option<u32>,

    /// Serve N generated records from memory instead of calling the API
    #[arg(long, global = true, value_name = "N")]
    pub offline_demo: Option<usize>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// CLI subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Interactive explorer (default)
    Explore,

    /// Fetch one page and print it as JSON
    Page {
        /// Offset of the first record
        #[arg(long, default_value = "0")]
        offset: u64,

        /// Page size (defaults to the configured page size)
        #[arg(long)]
        limit: Option<u32>,
    },

    /// Fetch one record by id and print it as JSON
    Get {
        /// Record id
        id: String,
    },

    /// Load the whole collection and export it
    Dump {
        /// Export format: csv or json
        #[arg(short, long, default_value = "csv")]
        format: ExportFormat,

        /// Output file (defaults to a timestamped file in the export directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
