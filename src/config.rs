//! Comparison settings loaded from an optional JSON file

use crate::error::{Result, RowdiffError};
use crate::parser::{RecordParser, DEFAULT_DELIMITER, QUOTE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default number of changed rows listed by the pretty printer
pub const DEFAULT_PREVIEW_ROWS: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompareConfig {
    /// Field separator for both inputs
    pub delimiter: char,
    /// List unchanged rows alongside changed ones
    pub include_unchanged: bool,
    /// Where `compare --export` writes when no path is given
    pub export_path: Option<PathBuf>,
    /// Maximum changed rows shown in pretty output
    pub preview_rows: usize,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            include_unchanged: false,
            export_path: None,
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }
}

impl CompareConfig {
    /// Load from `path`, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                let content = fs::read_to_string(path).map_err(|e| {
                    RowdiffError::config(format!(
                        "Cannot read config file {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                let config: Self = serde_json::from_str(&content)?;
                log::debug!("Loaded config from {}", path.display());
                config
            }
            None => Self::default(),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if matches!(self.delimiter, QUOTE | '\n' | '\r') {
            return Err(RowdiffError::config(format!(
                "Delimiter cannot be {:?}",
                self.delimiter
            )));
        }
        if self.preview_rows == 0 {
            return Err(RowdiffError::config("preview_rows must be greater than 0"));
        }
        Ok(())
    }

    pub fn parser(&self) -> RecordParser {
        RecordParser::new().with_delimiter(self.delimiter)
    }
}
