//! Line-oriented CSV record parsing and the matching record writer
//!
//! The parser is deliberately lenient: it never fails. Input is split on line
//! feeds, blank lines are dropped, and every field is trimmed after the quotes
//! have been resolved. Two consequences are known limitations rather than bugs:
//!
//! - a quoted field spanning several lines is split at each line feed, and any
//!   blank line inside it disappears;
//! - significant leading/trailing whitespace inside a quoted field is lost.
//!
//! An unterminated quote absorbs the rest of its line into the current field.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Default field separator
pub const DEFAULT_DELIMITER: char = ',';

/// Quoting character; a doubled quote inside a quoted field is one literal quote
pub const QUOTE: char = '"';

/// A header row plus the data rows that follow it
///
/// Rows are independent field lists and may be shorter or longer than
/// `headers`. Duplicate header names are kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ParsedTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Number of data rows (the header row is not counted)
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of header columns
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(Vec::as_slice)
    }
}

/// Tokenizes delimited text into a [`ParsedTable`]
#[derive(Debug, Clone)]
pub struct RecordParser {
    delimiter: char,
}

impl Default for RecordParser {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl RecordParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different field separator (e.g. `;` or a tab)
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Parse a whole document: first non-blank line is the header row
    pub fn parse(&self, text: &str) -> ParsedTable {
        let mut lines = text.split('\n').filter(|line| !line.trim().is_empty());

        let headers = match lines.next() {
            Some(line) => self.parse_line(line),
            None => return ParsedTable::default(),
        };
        let rows: Vec<Vec<String>> = lines.map(|line| self.parse_line(line)).collect();

        log::debug!(
            "Parsed {} header fields and {} rows",
            headers.len(),
            rows.len()
        );

        ParsedTable { headers, rows }
    }

    /// Split one line into trimmed fields
    pub fn parse_line(&self, line: &str) -> Vec<String> {
        let mut fields = Vec::new();
        let mut current = String::new();
        let mut in_quotes = false;
        let mut chars = line.chars().peekable();

        while let Some(c) = chars.next() {
            if c == QUOTE {
                if in_quotes && chars.peek() == Some(&QUOTE) {
                    current.push(QUOTE);
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            } else if c == self.delimiter && !in_quotes {
                fields.push(current.trim().to_string());
                current.clear();
            } else {
                current.push(c);
            }
        }

        fields.push(current.trim().to_string());
        fields
    }

    /// Quote a field only when it would not survive [`parse_line`](Self::parse_line) unquoted
    pub fn quote_field<'a>(&self, field: &'a str) -> Cow<'a, str> {
        let needs_quotes = field
            .chars()
            .any(|c| c == self.delimiter || c == QUOTE || c == '\n' || c == '\r');

        if needs_quotes {
            Cow::Owned(always_quote(field))
        } else {
            Cow::Borrowed(field)
        }
    }

    /// Serialize one record so that parsing it yields the same fields
    pub fn write_record<S: AsRef<str>>(&self, fields: &[S]) -> String {
        // A lone empty field would otherwise produce a blank line, which the parser drops
        if let [only] = fields {
            if only.as_ref().is_empty() {
                return always_quote("");
            }
        }

        fields
            .iter()
            .map(|f| self.quote_field(f.as_ref()))
            .collect::<Vec<_>>()
            .join(&self.delimiter.to_string())
    }

    /// Serialize a whole table, header row first
    pub fn write_table(&self, table: &ParsedTable) -> String {
        std::iter::once(&table.headers)
            .chain(table.rows.iter())
            .map(|record| self.write_record(record))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Parse text with the default comma delimiter
pub fn parse(text: &str) -> ParsedTable {
    RecordParser::default().parse(text)
}

/// Wrap a value in quotes, doubling any embedded quote
pub fn always_quote(field: &str) -> String {
    let mut quoted = String::with_capacity(field.len() + 2);
    quoted.push(QUOTE);
    for c in field.chars() {
        if c == QUOTE {
            quoted.push(QUOTE);
        }
        quoted.push(c);
    }
    quoted.push(QUOTE);
    quoted
}
