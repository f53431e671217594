//! Tabular text parsing: line splitting, delimiter detection and header checks.
//!
//! The parser is deliberately simple. Fields are split on the delimiter with
//! no quoting rules, and every value is trimmed. Blank lines are dropped
//! before numbering, so line 1 is always the header.

use crate::ingest::issue::ParseError;

/// Header columns every import is expected to carry.
pub const REQUIRED_HEADERS: [&str; 5] = ["brand", "model", "year", "body", "image_url"];

/// Field separator chosen once from the header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Semicolon,
}

impl Delimiter {
    /// `;` wins if the header contains one, otherwise `,`.
    pub fn detect(header_line: &str) -> Self {
        if header_line.contains(';') {
            Delimiter::Semicolon
        } else {
            Delimiter::Comma
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Semicolon => ';',
        }
    }
}

/// A non-empty data line with its trimmed fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataLine {
    pub line_number: usize,
    pub raw_fields: Vec<String>,
}

/// Result of splitting an input text into header and data rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTable {
    /// Trimmed, lowercased header tokens
    pub header_fields: Vec<String>,
    pub data_lines: Vec<DataLine>,
    pub errors: Vec<ParseError>,
    /// `None` only for empty input
    pub delimiter: Option<Delimiter>,
}

/// Split `text` into header and data lines.
///
/// Never fails: an empty input yields one structural error and no rows, and
/// missing required headers are reported while parsing continues with the
/// headers that are present.
pub fn parse(text: &str) -> ParsedTable {
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());

    let Some(header_line) = lines.next() else {
        return ParsedTable {
            errors: vec![ParseError::empty_file()],
            ..ParsedTable::default()
        };
    };

    let delimiter = Delimiter::detect(header_line);
    let header_fields: Vec<String> = split_fields(header_line, delimiter)
        .into_iter()
        .map(|h| h.to_lowercase())
        .collect();

    let errors = REQUIRED_HEADERS
        .iter()
        .filter(|needed| !header_fields.iter().any(|h| h == *needed))
        .map(|needed| ParseError::missing_header(needed))
        .collect();

    let data_lines = lines
        .enumerate()
        .map(|(idx, line)| (idx + 2, split_fields(line, delimiter)))
        .filter(|(_, fields)| fields.iter().any(|f| !f.is_empty()))
        .map(|(line_number, raw_fields)| DataLine {
            line_number,
            raw_fields,
        })
        .collect();

    ParsedTable {
        header_fields,
        data_lines,
        errors,
        delimiter: Some(delimiter),
    }
}

fn split_fields(line: &str, delimiter: Delimiter) -> Vec<String> {
    line.split(delimiter.as_char())
        .map(|field| field.trim().to_string())
        .collect()
}
