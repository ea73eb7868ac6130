//! # rowdiff
//!
//! Positional comparison of two CSV datasets: every row position is classified
//! as added, removed, modified or unchanged, and per-field differences can be
//! summarized or exported as a CSV change report.

pub mod cli;
pub mod error;
pub mod parser;
pub mod classifier;
pub mod report;
pub mod source;
pub mod session;
pub mod config;
pub mod commands;
pub mod output;
pub mod progress;

pub use classifier::{classify, RowVerdict, VerdictKind};
pub use error::{Result, RowdiffError, TableSide};
pub use parser::{parse, ParsedTable, RecordParser};
pub use report::{diff_columns, export_report, summarize, ColumnDiff, ComparisonSummary};
pub use session::{ComparisonOutcome, ComparisonSession};
pub use source::Dataset;
