//! Address scheme for deep links to single records.
//!
//! Addresses look like `car/<brand>/<model>[/<year>]` with every segment
//! percent-encoded from its lowercase form. Anything else is the home view.
//! Decoding is total: malformed addresses degrade to a partial or home route.

use crate::record::Record;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Bytes left unescaped in an address segment.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Leading segment of a record address.
pub const CAR_SEGMENT: &str = "car";

/// Decoded view of the current address.
///
/// The `Car` segments are kept exactly as they appear in the address (still
/// percent-encoded), which is what record lookup compares against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Home,
    Car {
        brand: String,
        model: String,
        year: Option<String>,
    },
}

impl Route {
    pub fn is_home(&self) -> bool {
        matches!(self, Route::Home)
    }

    /// Brand, model and year with percent-escapes resolved, for display.
    pub fn decoded_segments(&self) -> Option<(String, String, Option<String>)> {
        match self {
            Route::Home => None,
            Route::Car { brand, model, year } => Some((
                percent_decode(brand),
                percent_decode(model),
                year.as_deref().map(percent_decode),
            )),
        }
    }
}

/// Address of `record`.
///
/// The year segment is written only when the year is non-zero, so a year of
/// `0` produces the same address as a record without a year.
pub fn encode(record: &Record) -> String {
    let brand = percent_encode(&record.brand.to_lowercase());
    let model = percent_encode(&record.model.to_lowercase());
    match record.year_label() {
        Some(year) => format!("{}/{}/{}/{}", CAR_SEGMENT, brand, model, percent_encode(&year)),
        None => format!("{}/{}/{}", CAR_SEGMENT, brand, model),
    }
}

/// Parse an address into a [`Route`]. Never fails.
///
/// A leading `#` is ignored and empty segments are dropped. At least the brand
/// and model positions must be present for a `Car` route.
pub fn decode(address: &str) -> Route {
    let raw = address.strip_prefix('#').unwrap_or(address);
    let parts: Vec<&str> = raw.split('/').filter(|s| !s.is_empty()).collect();

    match parts.as_slice() {
        [head, brand, rest @ ..] if *head == CAR_SEGMENT => Route::Car {
            brand: brand.to_string(),
            model: rest.first().map(|s| s.to_string()).unwrap_or_default(),
            year: rest.get(1).map(|s| s.to_string()),
        },
        _ => Route::Home,
    }
}

/// First record whose encoded brand, model and (if the route has one) year
/// match the route's segments.
pub fn find_record<'a>(records: &'a [Record], route: &Route) -> Option<&'a Record> {
    let Route::Car { brand, model, year } = route else {
        return None;
    };

    records.iter().find(|record| {
        percent_encode(&record.brand.to_lowercase()) == *brand
            && percent_encode(&record.model.to_lowercase()) == *model
            && year
                .as_ref()
                .map_or(true, |y| record.year_label().unwrap_or_default() == *y)
    })
}

/// Percent-encode everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
pub fn percent_encode(input: &str) -> String {
    utf8_percent_encode(input, SEGMENT).to_string()
}

/// Resolve `%XX` escapes. Malformed escapes are kept literally and invalid
/// UTF-8 is replaced rather than rejected.
pub fn percent_decode(input: &str) -> String {
    percent_decode_str(input).decode_utf8_lossy().into_owned()
}
