//! Output formatting utilities

use crate::classifier::{RowVerdict, VerdictKind};
use crate::error::Result;
use crate::report::{field_label, ColumnDiff, ComparisonSummary};
use crate::session::ComparisonOutcome;
use crate::source::DatasetInfo;

/// Changed fields shown per modified row before eliding the rest
const FIELDS_PER_ROW: usize = 3;

/// Pretty printer for rowdiff output
pub struct PrettyPrinter;

impl PrettyPrinter {
    /// Print the shape of one dataset
    pub fn print_dataset_info(info: &DatasetInfo) {
        println!("📄 {}", info.name);
        println!("├─ Rows: {}", info.rows);
        println!("├─ Columns: {}", info.columns);
        if info.headers.is_empty() {
            println!("└─ Headers: (none)");
        } else {
            println!("└─ Headers: {}", info.headers.join(", "));
        }
    }

    /// Print a full comparison: inputs, summary, header analysis and changed rows
    pub fn print_comparison(outcome: &ComparisonOutcome, preview_rows: usize, show_unchanged: bool) {
        println!(
            "🔍 Comparing {} → {}",
            outcome.original.name, outcome.comparison.name
        );
        println!(
            "├─ Original: {} rows, {} columns",
            outcome.original.rows, outcome.original.columns
        );
        println!(
            "└─ Comparison: {} rows, {} columns",
            outcome.comparison.rows, outcome.comparison.columns
        );
        println!();

        Self::print_summary(&outcome.summary);

        if outcome.columns.has_differences {
            println!();
            Self::print_column_diff(
                &outcome.columns,
                &outcome.original.name,
                &outcome.comparison.name,
            );
        }

        let listed: Vec<&RowVerdict> = outcome
            .verdicts
            .iter()
            .filter(|v| show_unchanged || v.is_change())
            .collect();

        if listed.is_empty() {
            println!();
            println!("✅ No row differences");
            return;
        }

        println!();
        println!(
            "📝 Detailed changes ({} rows with changes)",
            outcome.summary.total_changes
        );
        let shown = listed.len().min(preview_rows);
        for (i, verdict) in listed.iter().take(shown).enumerate() {
            let is_last = i == shown - 1 && listed.len() <= shown;
            Self::print_verdict(verdict, &outcome.original.headers, &outcome.comparison.headers, is_last);
        }
        if listed.len() > shown {
            println!("└─ ... and {} more rows", listed.len() - shown);
        }
    }

    /// Print aggregate counts
    pub fn print_summary(summary: &ComparisonSummary) {
        println!("📊 Comparison summary");
        println!("├─ Total rows: {}", summary.total_rows);
        println!("├─ Total changes: {}", summary.total_changes);
        println!("├─ Change rate: {:.1}%", summary.change_rate);
        println!("├─ Field changes: {}", summary.field_changes);
        println!("├─ ➕ Added rows: {}", summary.added);
        println!("├─ ➖ Removed rows: {}", summary.removed);
        println!("└─ ✏️  Modified rows: {}", summary.modified);
    }

    /// Print header analysis
    pub fn print_column_diff(columns: &ColumnDiff, original_name: &str, comparison_name: &str) {
        if columns.has_differences {
            println!("⚠️  Column structure differences detected");
        } else {
            println!("✅ Column structure: identical");
        }
        println!(
            "├─ Common columns ({}): {}",
            columns.common.len(),
            join_or(columns.common.iter(), "No common columns")
        );
        println!(
            "├─ Only in {} ({}): {}",
            original_name,
            columns.only_in_first.len(),
            join_or(columns.only_in_first.iter(), "None")
        );
        println!(
            "└─ Only in {} ({}): {}",
            comparison_name,
            columns.only_in_second.len(),
            join_or(columns.only_in_second.iter(), "None")
        );
    }

    /// Print machine-readable counts
    pub fn print_quiet(summary: &ComparisonSummary) {
        println!("added={}", summary.added);
        println!("removed={}", summary.removed);
        println!("modified={}", summary.modified);
        println!("unchanged={}", summary.unchanged);
        println!("field_changes={}", summary.field_changes);
    }

    fn print_verdict(
        verdict: &RowVerdict,
        original_headers: &[String],
        comparison_headers: &[String],
        is_last: bool,
    ) {
        let prefix = if is_last { "└─" } else { "├─" };
        let child = if is_last { "   " } else { "│  " };
        let row = verdict.row_index() + 1;

        match verdict {
            RowVerdict::Added { new_data, .. } => {
                println!("{} Row {} ➕ {}", prefix, row, VerdictKind::Added);
                println!("{}└─ {}", child, new_data.join(", "));
            }
            RowVerdict::Removed { old_data, .. } => {
                println!("{} Row {} ➖ {}", prefix, row, VerdictKind::Removed);
                println!("{}└─ {}", child, old_data.join(", "));
            }
            RowVerdict::Unchanged { data, .. } => {
                println!("{} Row {} {}", prefix, row, VerdictKind::Unchanged);
                println!("{}└─ {}", child, data.join(", "));
            }
            RowVerdict::Modified {
                new_data, old_data, ..
            } => {
                let width = new_data.len().max(old_data.len());
                let diffs: Vec<(String, &str, &str)> = (0..width)
                    .filter_map(|i| {
                        let old = old_data.get(i).map(String::as_str).unwrap_or("");
                        let new = new_data.get(i).map(String::as_str).unwrap_or("");
                        (old != new).then(|| {
                            let label = if i < original_headers.len() {
                                field_label(original_headers, i)
                            } else {
                                field_label(comparison_headers, i)
                            };
                            (label, old, new)
                        })
                    })
                    .collect();

                println!(
                    "{} Row {} ✏️  {} ({} fields changed)",
                    prefix,
                    row,
                    VerdictKind::Modified,
                    diffs.len()
                );
                let shown = diffs.len().min(FIELDS_PER_ROW);
                for (j, (label, old, new)) in diffs.iter().take(shown).enumerate() {
                    let marker = if j == shown - 1 && diffs.len() <= shown { "└─" } else { "├─" };
                    println!("{}{} {}: '{}' → '{}'", child, marker, label, old, new);
                }
                if diffs.len() > shown {
                    println!("{}└─ ... and {} more", child, diffs.len() - shown);
                }
            }
        }
    }
}

fn join_or<'a>(names: impl Iterator<Item = &'a String>, empty: &str) -> String {
    let joined = names.map(String::as_str).collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        empty.to_string()
    } else {
        joined
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format any serializable data as JSON
    pub fn format<T: serde::Serialize + ?Sized>(data: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(data)?)
    }

    /// Format a comparison, optionally dropping unchanged verdicts
    pub fn format_comparison(outcome: &ComparisonOutcome, include_unchanged: bool) -> Result<String> {
        let changes: Vec<&RowVerdict> = outcome
            .verdicts
            .iter()
            .filter(|v| include_unchanged || v.is_change())
            .collect();

        let json = serde_json::json!({
            "generated_at": chrono::Utc::now(),
            "original": outcome.original,
            "comparison": outcome.comparison,
            "summary": outcome.summary,
            "columns": outcome.columns,
            "changes": changes,
        });
        Ok(serde_json::to_string_pretty(&json)?)
    }
}
