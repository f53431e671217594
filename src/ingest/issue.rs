//! Problems reported while importing a file.

use std::fmt;

/// Whether a problem concerns the file as a whole or a single row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    /// Empty input or a missing required header; always reported on line 1
    Structural,
    /// Bad year, missing brand or missing model on a data row
    Field,
}

/// A non-fatal problem found in the imported text.
///
/// `line` is 1-based over the non-blank lines of the input, so the header is
/// always line 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub line: usize,
    pub message: String,
    pub kind: IssueKind,
}

impl ParseError {
    pub fn structural(message: impl Into<String>) -> Self {
        Self {
            line: 1,
            message: message.into(),
            kind: IssueKind::Structural,
        }
    }

    pub fn field(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
            kind: IssueKind::Field,
        }
    }

    pub fn empty_file() -> Self {
        Self::structural("empty file")
    }

    pub fn missing_header(name: &str) -> Self {
        Self::structural(format!("missing header column: \"{}\"", name))
    }

    pub fn year_not_a_number(line: usize, raw: &str) -> Self {
        Self::field(line, format!("year is not a number: \"{}\"", raw))
    }

    pub fn missing_brand(line: usize) -> Self {
        Self::field(line, "missing brand")
    }

    pub fn missing_model(line: usize) -> Self {
        Self::field(line, "missing model")
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}
