//! Command-line interface for rowdiff

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rowdiff")]
#[command(about = "Compare two CSV files row by row")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// JSON file with default comparison settings
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare two files and print the classified rows
    Compare {
        /// Original (baseline) file
        original: PathBuf,

        /// File to compare against the original
        comparison: PathBuf,

        /// Output format: "pretty", "json"
        #[arg(long, default_value = "pretty")]
        format: String,

        /// Also write the detailed change report (default: detailed-comparison-results.csv, `-` for stdout)
        #[arg(long, num_args = 0..=1, value_name = "PATH")]
        export: Option<Option<PathBuf>>,

        /// Field separator for both inputs
        #[arg(long)]
        delimiter: Option<char>,

        /// List unchanged rows too
        #[arg(long)]
        show_unchanged: bool,

        /// Maximum number of changed rows to list (must be > 0)
        #[arg(long, value_parser = validate_preview_rows)]
        preview: Option<usize>,

        /// Quiet output (machine-readable counts only)
        #[arg(long)]
        quiet: bool,
    },

    /// Write the detailed change report only
    Export {
        /// Original (baseline) file
        original: PathBuf,

        /// File to compare against the original
        comparison: PathBuf,

        /// Report destination; "-" writes to stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Field separator for both inputs
        #[arg(long)]
        delimiter: Option<char>,
    },

    /// Show which header names are shared between two files
    Columns {
        /// Original (baseline) file
        original: PathBuf,

        /// File to compare against the original
        comparison: PathBuf,

        /// Output format: "pretty", "json"
        #[arg(long, default_value = "pretty")]
        format: String,

        /// Field separator for both inputs
        #[arg(long)]
        delimiter: Option<char>,
    },

    /// Show the shape of a single file
    Inspect {
        /// Input file
        input: PathBuf,

        /// Output format: "pretty", "json"
        #[arg(long, default_value = "pretty")]
        format: String,

        /// Field separator
        #[arg(long)]
        delimiter: Option<char>,
    },
}

/// Parse output format string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    Pretty,
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid output format: {}. Use 'pretty' or 'json'", s)),
        }
    }
}

/// Validate that the preview row limit is greater than 0
fn validate_preview_rows(s: &str) -> Result<usize, String> {
    let rows: usize = s
        .parse()
        .map_err(|_| format!("Invalid preview size: '{}'. Must be a positive integer.", s))?;

    if rows == 0 {
        return Err("Preview size must be greater than 0".to_string());
    }

    Ok(rows)
}
