//! Import pipeline: raw text → table → validated records.
//!
//! [`parser`] handles the file-level concerns (lines, delimiter, header),
//! [`validator`] turns each data line into a [`Record`]. Neither step can fail;
//! every problem is collected into an ordered list of [`ParseError`]s.

pub mod issue;
pub mod parser;
pub mod validator;

pub use issue::{IssueKind, ParseError};
pub use parser::{parse, DataLine, Delimiter, ParsedTable, REQUIRED_HEADERS};
pub use validator::{validate_row, RowOutcome, FIELD_ALIASES};

use crate::record::Record;

/// Records and problems produced from one input text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportOutcome {
    pub records: Vec<Record>,
    /// Structural errors first, then row errors in line order
    pub errors: Vec<ParseError>,
}

impl ImportOutcome {
    pub fn has_records(&self) -> bool {
        !self.records.is_empty()
    }
}

/// Run the full pipeline over `text`.
pub fn parse_catalog(text: &str) -> ImportOutcome {
    let table = parse(text);
    let mut errors = table.errors;
    let mut records = Vec::with_capacity(table.data_lines.len());

    for line in &table.data_lines {
        let outcome = validate_row(&table.header_fields, &line.raw_fields, line.line_number);
        errors.extend(outcome.errors);
        records.extend(outcome.record);
    }

    log::debug!(
        "parsed {} records with {} problems (delimiter {:?})",
        records.len(),
        errors.len(),
        table.delimiter
    );

    ImportOutcome { records, errors }
}
