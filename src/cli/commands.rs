//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "orgcal")]
#[command(about = "Render calendar event records as an Org outline", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: ./orgcal.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace); overrides RUST_LOG
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new document from record files
    Build {
        /// Record files or directories of *.json files
        #[arg(required = true, value_name = "INPUT")]
        inputs: Vec<PathBuf>,

        /// Output document (default: config `output`, else journal.org)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Add records to an existing document
    Append {
        /// Previously rendered document
        existing: PathBuf,

        /// Record files or directories of *.json files
        #[arg(required = true, value_name = "INPUT")]
        inputs: Vec<PathBuf>,

        /// Output document (default: overwrite EXISTING)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Load a document and verify it re-renders unchanged
    Check {
        /// Document to check
        file: PathBuf,
    },

    /// Write a default orgcal.toml
    InitConfig {
        /// Directory to write into (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}
