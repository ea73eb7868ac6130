//! Positional row classification between two parsed tables
//!
//! Rows are aligned strictly by index. Inserting a row in the middle of the
//! comparison table therefore shows every later row as modified; callers who
//! need key-based alignment must sort or align their inputs beforehand.

use crate::parser::ParsedTable;
use serde::{Deserialize, Serialize};

/// Outcome category for one row position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerdictKind {
    Added,
    Removed,
    Modified,
    Unchanged,
}

impl VerdictKind {
    /// Lowercase label used in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            VerdictKind::Added => "added",
            VerdictKind::Removed => "removed",
            VerdictKind::Modified => "modified",
            VerdictKind::Unchanged => "unchanged",
        }
    }
}

impl std::fmt::Display for VerdictKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of a single row position
///
/// Each variant carries exactly the rows that exist for it: an added row has
/// no original, a removed row has no counterpart in the comparison table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RowVerdict {
    Added {
        row_index: usize,
        new_data: Vec<String>,
    },
    Removed {
        row_index: usize,
        old_data: Vec<String>,
    },
    Modified {
        row_index: usize,
        new_data: Vec<String>,
        old_data: Vec<String>,
    },
    Unchanged {
        row_index: usize,
        data: Vec<String>,
    },
}

impl RowVerdict {
    pub fn kind(&self) -> VerdictKind {
        match self {
            RowVerdict::Added { .. } => VerdictKind::Added,
            RowVerdict::Removed { .. } => VerdictKind::Removed,
            RowVerdict::Modified { .. } => VerdictKind::Modified,
            RowVerdict::Unchanged { .. } => VerdictKind::Unchanged,
        }
    }

    /// Zero-based row position
    pub fn row_index(&self) -> usize {
        match self {
            RowVerdict::Added { row_index, .. }
            | RowVerdict::Removed { row_index, .. }
            | RowVerdict::Modified { row_index, .. }
            | RowVerdict::Unchanged { row_index, .. } => *row_index,
        }
    }

    /// Fields from the comparison table, absent for removed rows
    pub fn new_data(&self) -> Option<&[String]> {
        match self {
            RowVerdict::Added { new_data, .. } | RowVerdict::Modified { new_data, .. } => {
                Some(new_data.as_slice())
            }
            RowVerdict::Unchanged { data, .. } => Some(data.as_slice()),
            RowVerdict::Removed { .. } => None,
        }
    }

    /// Fields from the original table, present for modified and removed rows
    pub fn old_data(&self) -> Option<&[String]> {
        match self {
            RowVerdict::Removed { old_data, .. } | RowVerdict::Modified { old_data, .. } => {
                Some(old_data.as_slice())
            }
            RowVerdict::Added { .. } | RowVerdict::Unchanged { .. } => None,
        }
    }

    pub fn is_change(&self) -> bool {
        !matches!(self, RowVerdict::Unchanged { .. })
    }
}

/// Classify every row position of `original` against `comparison`
///
/// One verdict is emitted per position in `0..max(rows)`, unchanged rows
/// included, in ascending row order.
pub fn classify(original: &ParsedTable, comparison: &ParsedTable) -> Vec<RowVerdict> {
    let max_rows = original.rows.len().max(comparison.rows.len());
    let mut verdicts = Vec::with_capacity(max_rows);

    for row_index in 0..max_rows {
        let verdict = match (original.row(row_index), comparison.row(row_index)) {
            (None, Some(new_row)) => RowVerdict::Added {
                row_index,
                new_data: new_row.to_vec(),
            },
            (Some(old_row), None) => RowVerdict::Removed {
                row_index,
                old_data: old_row.to_vec(),
            },
            (Some(old_row), Some(new_row)) => {
                if rows_differ(old_row, new_row) {
                    RowVerdict::Modified {
                        row_index,
                        new_data: new_row.to_vec(),
                        old_data: old_row.to_vec(),
                    }
                } else {
                    RowVerdict::Unchanged {
                        row_index,
                        data: new_row.to_vec(),
                    }
                }
            }
            (None, None) => unreachable!("row index below max of both row counts"),
        };
        verdicts.push(verdict);
    }

    log::debug!(
        "Classified {} row positions ({} original rows, {} comparison rows)",
        verdicts.len(),
        original.rows.len(),
        comparison.rows.len()
    );

    verdicts
}

/// Rows differ when any positional field differs or the field counts differ
pub fn rows_differ(old_row: &[String], new_row: &[String]) -> bool {
    old_row.len() != new_row.len() || old_row.iter().zip(new_row).any(|(a, b)| a != b)
}

/// Only the verdicts that represent a change, in row order
pub fn changed(verdicts: &[RowVerdict]) -> impl Iterator<Item = &RowVerdict> {
    verdicts.iter().filter(|v| v.is_change())
}
