//! Summary statistics, header analysis and the detailed change export

use crate::classifier::{RowVerdict, VerdictKind};
use crate::error::Result;
use crate::parser::{always_quote, RecordParser};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Column names of the exported change report, in order
pub const EXPORT_HEADER: [&str; 6] = [
    "Row",
    "Status",
    "Field",
    "Original Value",
    "New Value",
    "Change Type",
];

/// File name used when an export destination is not given
pub const DEFAULT_EXPORT_FILE_NAME: &str = "detailed-comparison-results.csv";

/// Aggregate counts derived from a verdict list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSummary {
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
    pub unchanged: usize,
    pub total_rows: usize,
    pub total_changes: usize,
    /// Percentage of changed row positions, rounded to one decimal
    pub change_rate: f64,
    /// Differing field positions across modified rows, up to the shorter row
    pub field_changes: usize,
}

impl ComparisonSummary {
    pub fn has_changes(&self) -> bool {
        self.total_changes > 0
    }

    pub fn count(&self, kind: VerdictKind) -> usize {
        match kind {
            VerdictKind::Added => self.added,
            VerdictKind::Removed => self.removed,
            VerdictKind::Modified => self.modified,
            VerdictKind::Unchanged => self.unchanged,
        }
    }
}

/// Summarize a full verdict list (one verdict per row position)
pub fn summarize(verdicts: &[RowVerdict]) -> ComparisonSummary {
    let mut summary = ComparisonSummary {
        total_rows: verdicts.len(),
        ..Default::default()
    };

    for verdict in verdicts {
        match verdict {
            RowVerdict::Added { .. } => summary.added += 1,
            RowVerdict::Removed { .. } => summary.removed += 1,
            RowVerdict::Unchanged { .. } => summary.unchanged += 1,
            RowVerdict::Modified {
                new_data, old_data, ..
            } => {
                summary.modified += 1;
                summary.field_changes += new_data
                    .iter()
                    .zip(old_data)
                    .filter(|(new, old)| new != old)
                    .count();
            }
        }
    }

    summary.total_changes = summary.added + summary.removed + summary.modified;
    summary.change_rate = change_rate(summary.total_changes, summary.total_rows);
    summary
}

/// Changed share of `total` as a percentage with one decimal; 0.0 when `total` is 0
fn change_rate(changed: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let percentage = changed as f64 / total as f64 * 100.0;
    (percentage * 10.0).round() / 10.0
}

/// Header names compared as sets (exact, case-sensitive)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDiff {
    pub common: IndexSet<String>,
    pub only_in_first: IndexSet<String>,
    pub only_in_second: IndexSet<String>,
    /// Header counts differ or some original header is absent from the comparison
    pub has_differences: bool,
}

impl ColumnDiff {
    pub fn total_columns(&self) -> usize {
        self.common.len() + self.only_in_first.len() + self.only_in_second.len()
    }
}

/// Compare two header lists; duplicates collapse, first-seen order is kept
pub fn diff_columns(first: &[String], second: &[String]) -> ColumnDiff {
    let first_set: IndexSet<&String> = first.iter().collect();
    let second_set: IndexSet<&String> = second.iter().collect();

    let common: IndexSet<String> = first_set
        .iter()
        .filter(|h| second_set.contains(*h))
        .map(|h| h.to_string())
        .collect();
    let only_in_first: IndexSet<String> = first_set
        .iter()
        .filter(|h| !second_set.contains(*h))
        .map(|h| h.to_string())
        .collect();
    let only_in_second: IndexSet<String> = second_set
        .iter()
        .filter(|h| !first_set.contains(*h))
        .map(|h| h.to_string())
        .collect();

    let has_differences = first.len() != second.len() || !only_in_first.is_empty();

    ColumnDiff {
        common,
        only_in_first,
        only_in_second,
        has_differences,
    }
}

/// Union of both header lists in first-seen order
pub fn all_headers(first: &[String], second: &[String]) -> IndexSet<String> {
    first.iter().chain(second).cloned().collect()
}

/// Free-text label in the last column of the export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeType {
    #[serde(rename = "new field")]
    NewField,
    #[serde(rename = "deleted field")]
    DeletedField,
    #[serde(rename = "field changed")]
    FieldChanged,
}

impl ChangeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeType::NewField => "new field",
            ChangeType::DeletedField => "deleted field",
            ChangeType::FieldChanged => "field changed",
        }
    }
}

/// One field-level line of the detailed report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldChange {
    /// 1-based row number
    pub row: usize,
    pub status: VerdictKind,
    pub field: String,
    pub original_value: Option<String>,
    pub new_value: Option<String>,
    pub change_type: ChangeType,
}

impl FieldChange {
    /// Render as one export line; values are always quoted, absent sides left empty
    pub fn to_record(&self) -> String {
        let parser = RecordParser::default();
        [
            self.row.to_string(),
            self.status.to_string(),
            parser.quote_field(&self.field).into_owned(),
            self.original_value.as_deref().map(always_quote).unwrap_or_default(),
            self.new_value.as_deref().map(always_quote).unwrap_or_default(),
            self.change_type.as_str().to_string(),
        ]
        .join(",")
    }
}

/// Header name at `index`, or `Column N` when it is missing or blank
pub fn field_label(headers: &[String], index: usize) -> String {
    match headers.get(index) {
        Some(name) if !name.is_empty() => name.clone(),
        _ => format!("Column {}", index + 1),
    }
}

/// Expand verdicts into field-level changes; unchanged rows contribute nothing
///
/// Added rows are labelled with the comparison headers, removed and modified
/// rows with the original headers. Modified rows list every position of the
/// new row whose value differs, a missing original field counting as empty;
/// trailing fields present only in the original row are not reported.
pub fn field_changes(
    verdicts: &[RowVerdict],
    original_headers: &[String],
    comparison_headers: &[String],
) -> Vec<FieldChange> {
    let mut changes = Vec::new();

    for verdict in verdicts {
        let row = verdict.row_index() + 1;
        match verdict {
            RowVerdict::Added { new_data, .. } => {
                changes.extend(new_data.iter().enumerate().map(|(i, value)| FieldChange {
                    row,
                    status: VerdictKind::Added,
                    field: field_label(comparison_headers, i),
                    original_value: None,
                    new_value: Some(value.clone()),
                    change_type: ChangeType::NewField,
                }));
            }
            RowVerdict::Removed { old_data, .. } => {
                changes.extend(old_data.iter().enumerate().map(|(i, value)| FieldChange {
                    row,
                    status: VerdictKind::Removed,
                    field: field_label(original_headers, i),
                    original_value: Some(value.clone()),
                    new_value: None,
                    change_type: ChangeType::DeletedField,
                }));
            }
            RowVerdict::Modified {
                new_data, old_data, ..
            } => {
                // Only positions present in the new row are reported
                for (i, new) in new_data.iter().enumerate() {
                    let old = old_data.get(i).map(String::as_str).unwrap_or("");
                    if old != new {
                        changes.push(FieldChange {
                            row,
                            status: VerdictKind::Modified,
                            field: field_label(original_headers, i),
                            original_value: Some(old.to_string()),
                            new_value: Some(new.clone()),
                            change_type: ChangeType::FieldChanged,
                        });
                    }
                }
            }
            RowVerdict::Unchanged { .. } => {}
        }
    }

    changes
}

/// Build the detailed CSV report: header line, then one line per field change
pub fn export_report(
    verdicts: &[RowVerdict],
    original_headers: &[String],
    comparison_headers: &[String],
) -> String {
    std::iter::once(EXPORT_HEADER.join(","))
        .chain(
            field_changes(verdicts, original_headers, comparison_headers)
                .iter()
                .map(FieldChange::to_record),
        )
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write the detailed report to a sink in one shot
pub fn write_report<W: Write>(
    writer: &mut W,
    verdicts: &[RowVerdict],
    original_headers: &[String],
    comparison_headers: &[String],
) -> Result<()> {
    let report = export_report(verdicts, original_headers, comparison_headers);
    writer.write_all(report.as_bytes())?;
    writer.flush()?;
    Ok(())
}
