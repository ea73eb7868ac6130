//! Reading input files into named, parsed datasets

use crate::error::{Result, RowdiffError};
use crate::parser::{ParsedTable, RecordParser};
use serde::Serialize;
use std::path::Path;

const UTF8_BOM: char = '\u{feff}';

/// A parsed table together with the name it was loaded under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    pub name: String,
    pub table: ParsedTable,
}

/// Shape of a dataset, for listings and reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetInfo {
    pub name: String,
    pub rows: usize,
    pub columns: usize,
    pub headers: Vec<String>,
}

impl Dataset {
    pub fn new(name: impl Into<String>, table: ParsedTable) -> Self {
        Self {
            name: name.into(),
            table,
        }
    }

    /// Parse already-decoded text
    pub fn from_text(name: impl Into<String>, text: &str, parser: &RecordParser) -> Self {
        let text = text.strip_prefix(UTF8_BOM).unwrap_or(text);
        Self::new(name, parser.parse(text))
    }

    pub fn info(&self) -> DatasetInfo {
        DatasetInfo {
            name: self.name.clone(),
            rows: self.table.row_count(),
            columns: self.table.column_count(),
            headers: self.table.headers.clone(),
        }
    }
}

/// Read, decode and parse a file; the dataset is named after the file
pub fn load_dataset(path: &Path, parser: &RecordParser) -> Result<Dataset> {
    if !path.exists() {
        return Err(RowdiffError::invalid_input(format!(
            "File not found: {}",
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(RowdiffError::invalid_input(format!(
            "Not a regular file: {}",
            path.display()
        )));
    }
    if !is_supported_format(path) {
        log::warn!(
            "'{}' does not look like a delimited text file; parsing anyway",
            path.display()
        );
    }

    let bytes = std::fs::read(path)?;
    let text = String::from_utf8(bytes)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let dataset = Dataset::from_text(name, &text, parser);
    log::debug!(
        "Loaded '{}': {} rows, {} columns",
        dataset.name,
        dataset.table.row_count(),
        dataset.table.column_count()
    );
    Ok(dataset)
}

/// Whether the file extension is one we expect delimited text in
pub fn is_supported_format(path: &Path) -> bool {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => matches!(ext.to_lowercase().as_str(), "csv" | "tsv" | "txt"),
        None => false,
    }
}
