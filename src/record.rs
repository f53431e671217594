//! Canonical vehicle record and the keys derived from it.

use std::fmt;

/// A validated vehicle entry.
///
/// `brand` and `model` may still be empty here: the validator reports missing
/// values as errors but keeps the row, so consumers decide how to treat it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    pub brand: String,
    pub model: String,
    /// Any finite number parsed from the year column, fractional values included
    pub year: Option<f64>,
    pub body: String,
    pub image_url: String,
}

impl Record {
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        year: Option<f64>,
        body: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            brand: brand.into(),
            model: model.into(),
            year,
            body: body.into(),
            image_url: image_url.into(),
        }
    }

    /// Year rendered as text, or `None` when the year is absent or zero.
    ///
    /// A year of `0` is treated like a missing year everywhere a year is
    /// rendered (favorite keys, search text, addresses, headings).
    pub fn year_label(&self) -> Option<String> {
        self.year.filter(|y| *y != 0.0).map(format_year)
    }

    /// Title used for cards and links: `brand model`.
    pub fn title(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }

    /// Detail page heading: title followed by `(year)` when a year is set.
    pub fn heading(&self) -> String {
        match self.year_label() {
            Some(year) => format!("{} ({})", self.title(), year),
            None => self.title(),
        }
    }

    pub fn favorite_key(&self) -> FavoriteKey {
        FavoriteKey::for_record(self)
    }

    /// Whether the image URL looks like a real link (more than 5 characters).
    pub fn has_image(&self) -> bool {
        self.image_url.chars().count() > 5
    }
}

/// Format a numeric year without a trailing `.0` for integral values.
pub fn format_year(year: f64) -> String {
    if year.fract() == 0.0 && year.abs() < 1e15 {
        format!("{}", year as i64)
    } else {
        format!("{}", year)
    }
}

/// Favorites identity: `lower(brand)|lower(model)|year`.
///
/// Coarser than record equality, since body and image are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FavoriteKey(String);

impl FavoriteKey {
    pub fn for_record(record: &Record) -> Self {
        Self(format!(
            "{}|{}|{}",
            record.brand.to_lowercase(),
            record.model.to_lowercase(),
            record.year_label().unwrap_or_default()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for FavoriteKey {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for FavoriteKey {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl fmt::Display for FavoriteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Records shown before the first successful import.
pub fn sample_records() -> Vec<Record> {
    vec![
        Record::new(
            "BMW",
            "M3",
            Some(2016.0),
            "sedan",
            "https://images.unsplash.com/photo-1549921296-3a6b3f19f5b9?q=80&w=1600&auto=format&fit=crop",
        ),
        Record::new(
            "Audi",
            "RS6",
            Some(2020.0),
            "wagon",
            "https://images.unsplash.com/photo-1549921298-c0a0b1b84a6a?q=80&w=1600&auto=format&fit=crop",
        ),
        Record::new(
            "Toyota",
            "Supra",
            Some(1998.0),
            "coupe",
            "https://images.unsplash.com/photo-1622737133809-d95047b9e673?q=80&w=1600&auto=format&fit=crop",
        ),
    ]
}
