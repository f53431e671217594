//! Per-row coercion into [`Record`] values.
//!
//! Canonical fields are resolved through a static alias table: for each field
//! the candidate header names are tried in order and the first non-empty value
//! wins.

use crate::ingest::issue::ParseError;
use crate::record::Record;
use std::collections::HashMap;

/// Canonical field → candidate header names, in priority order.
pub const FIELD_ALIASES: [(&str, &[&str]); 4] = [
    ("brand", &["brand", "marka", "make"]),
    ("model", &["model", "type"]),
    ("body", &["body", "category"]),
    ("image_url", &["image_url", "image", "url"]),
];

/// Outcome of validating one data row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowOutcome {
    /// Always present: rows with problems are kept and their problems reported
    pub record: Option<Record>,
    pub errors: Vec<ParseError>,
}

/// Map raw positional fields onto a record.
///
/// Fields past the header count are ignored and missing trailing fields are
/// empty. A repeated header takes the value of its last column.
pub fn validate_row(headers: &[String], raw_fields: &[String], line_number: usize) -> RowOutcome {
    let values: HashMap<&str, &str> = headers
        .iter()
        .enumerate()
        .map(|(idx, header)| {
            let value = raw_fields.get(idx).map(|f| f.trim()).unwrap_or("");
            (header.as_str(), value)
        })
        .collect();

    let mut errors = Vec::new();

    let year = match values.get("year").copied().unwrap_or("") {
        "" => None,
        raw => match parse_year(raw) {
            Some(year) => Some(year),
            None => {
                errors.push(ParseError::year_not_a_number(line_number, raw));
                None
            }
        },
    };

    let record = Record {
        brand: resolve(&values, "brand"),
        model: resolve(&values, "model"),
        year,
        body: resolve(&values, "body"),
        image_url: resolve(&values, "image_url"),
    };

    if record.brand.is_empty() {
        errors.push(ParseError::missing_brand(line_number));
    }
    if record.model.is_empty() {
        errors.push(ParseError::missing_model(line_number));
    }

    RowOutcome {
        record: Some(record),
        errors,
    }
}

/// First non-empty value among the aliases of `field`.
fn resolve(values: &HashMap<&str, &str>, field: &str) -> String {
    FIELD_ALIASES
        .iter()
        .find(|(canonical, _)| *canonical == field)
        .map(|(_, aliases)| *aliases)
        .unwrap_or(&[])
        .iter()
        .filter_map(|alias| values.get(alias).copied())
        .find(|value| !value.is_empty())
        .unwrap_or("")
        .to_string()
}

/// Parse a year value. Any finite number is accepted, without rounding.
///
/// Besides decimal and exponent notation, unsigned `0x`, `0b` and `0o`
/// integer literals are read in their radix.
pub fn parse_year(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    let value = match radix_literal(raw) {
        Some((radix, digits)) => parse_radix_digits(digits, radix)?,
        None => raw.parse::<f64>().ok()?,
    };
    Some(value).filter(|value| value.is_finite())
}

fn radix_literal(raw: &str) -> Option<(u32, &str)> {
    let prefix = raw.get(..2)?;
    let radix = match prefix {
        "0x" | "0X" => 16,
        "0b" | "0B" => 2,
        "0o" | "0O" => 8,
        _ => return None,
    };
    Some((radix, &raw[2..]))
}

fn parse_radix_digits(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    })
}
