//! Holds the two inputs of a comparison until both are available

use crate::classifier::{self, RowVerdict};
use crate::error::{Result, RowdiffError, TableSide};
use crate::report::{self, ColumnDiff, ComparisonSummary, FieldChange};
use crate::source::{Dataset, DatasetInfo};
use serde::Serialize;

/// Everything derived from one comparison run
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonOutcome {
    pub original: DatasetInfo,
    pub comparison: DatasetInfo,
    pub verdicts: Vec<RowVerdict>,
    pub summary: ComparisonSummary,
    pub columns: ColumnDiff,
}

impl ComparisonOutcome {
    /// Compare two loaded datasets
    pub fn new(original: &Dataset, comparison: &Dataset) -> Self {
        let verdicts = classifier::classify(&original.table, &comparison.table);
        let summary = report::summarize(&verdicts);
        let columns = report::diff_columns(&original.table.headers, &comparison.table.headers);

        if columns.has_differences {
            log::warn!(
                "Column structure differs between '{}' and '{}'; fields are compared by position",
                original.name,
                comparison.name
            );
        }
        log::debug!(
            "{} added, {} removed, {} modified, {} unchanged",
            summary.added,
            summary.removed,
            summary.modified,
            summary.unchanged
        );

        Self {
            original: original.info(),
            comparison: comparison.info(),
            verdicts,
            summary,
            columns,
        }
    }

    pub fn changed(&self) -> impl Iterator<Item = &RowVerdict> {
        classifier::changed(&self.verdicts)
    }

    pub fn field_changes(&self) -> Vec<FieldChange> {
        report::field_changes(
            &self.verdicts,
            &self.original.headers,
            &self.comparison.headers,
        )
    }

    pub fn export_report(&self) -> String {
        report::export_report(
            &self.verdicts,
            &self.original.headers,
            &self.comparison.headers,
        )
    }
}

/// Collects the original and comparison datasets in any order
#[derive(Debug, Default)]
pub struct ComparisonSession {
    original: Option<Dataset>,
    comparison: Option<Dataset>,
}

impl ComparisonSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_original(&mut self, dataset: Dataset) {
        self.original = Some(dataset);
    }

    pub fn load_comparison(&mut self, dataset: Dataset) {
        self.comparison = Some(dataset);
    }

    pub fn original(&self) -> Option<&Dataset> {
        self.original.as_ref()
    }

    pub fn comparison(&self) -> Option<&Dataset> {
        self.comparison.as_ref()
    }

    pub fn is_ready(&self) -> bool {
        self.original.is_some() && self.comparison.is_some()
    }

    /// Run the comparison; fails if either side has not been loaded
    pub fn compare(&self) -> Result<ComparisonOutcome> {
        let original = self
            .original
            .as_ref()
            .ok_or_else(|| RowdiffError::missing_table(TableSide::Original))?;
        let comparison = self
            .comparison
            .as_ref()
            .ok_or_else(|| RowdiffError::missing_table(TableSide::Comparison))?;

        Ok(ComparisonOutcome::new(original, comparison))
    }

    /// Drop both inputs
    pub fn reset(&mut self) {
        self.original = None;
        self.comparison = None;
    }
}
