//! Error types for rowdiff operations

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RowdiffError>;

/// Which side of a comparison a table belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableSide {
    Original,
    Comparison,
}

impl std::fmt::Display for TableSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableSide::Original => write!(f, "original"),
            TableSide::Comparison => write!(f, "comparison"),
        }
    }
}

#[derive(Error, Debug)]
pub enum RowdiffError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Input is not valid UTF-8: {0}")]
    StringConversion(#[from] std::string::FromUtf8Error),

    #[error("Cannot compare: the {side} table has not been loaded")]
    MissingTable { side: TableSide },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Generic error: {0}")]
    Generic(#[from] anyhow::Error),
}

impl RowdiffError {
    pub fn missing_table(side: TableSide) -> Self {
        Self::MissingTable { side }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: msg.into(),
        }
    }
}
