//! Derived views over the record collection.
//!
//! Everything here is a pure function of the records, the [`FilterState`] and
//! the favorites membership index. Views are recomputed on demand.

pub mod filter;
pub mod stats;

pub use filter::{facet_matches, FilterState, ALL};
pub use stats::CatalogStats;

use crate::record::{FavoriteKey, Record};
use std::cmp::Ordering;
use std::collections::HashSet;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Maximum number of records returned by [`QueryEngine::similar_to`].
pub const DEFAULT_SIMILAR_LIMIT: usize = 8;

/// Anything that can answer "is this key a favorite?".
pub trait Membership {
    fn contains_key(&self, key: &FavoriteKey) -> bool;

    fn is_favorite(&self, record: &Record) -> bool {
        self.contains_key(&record.favorite_key())
    }
}

impl Membership for HashSet<FavoriteKey> {
    fn contains_key(&self, key: &FavoriteKey) -> bool {
        self.contains(key)
    }
}

/// Read-only query surface borrowed from the session state.
pub struct QueryEngine<'a> {
    records: &'a [Record],
    filter: &'a FilterState,
    favorites: &'a dyn Membership,
    similar_limit: usize,
}

impl<'a> QueryEngine<'a> {
    pub fn new(
        records: &'a [Record],
        filter: &'a FilterState,
        favorites: &'a dyn Membership,
    ) -> Self {
        Self {
            records,
            filter,
            favorites,
            similar_limit: DEFAULT_SIMILAR_LIMIT,
        }
    }

    pub fn with_similar_limit(mut self, limit: usize) -> Self {
        self.similar_limit = limit;
        self
    }

    /// `"all"` followed by every distinct trimmed brand, sorted.
    pub fn distinct_brands(&self) -> Vec<String> {
        facet_values(self.records.iter().map(|r| r.brand.as_str()))
    }

    /// `"all"` followed by every distinct trimmed body style, sorted.
    pub fn distinct_bodies(&self) -> Vec<String> {
        facet_values(self.records.iter().map(|r| r.body.as_str()))
    }

    /// Records passing the facets, the text query and the favorites toggle.
    pub fn filtered_records(&self) -> Vec<&'a Record> {
        let needle = self.filter.needle();
        self.records
            .iter()
            .filter(|record| self.passes(record, &needle))
            .collect()
    }

    /// Up to the similar limit of records sharing the brand or the body of
    /// `target`, in collection order.
    ///
    /// Searches the full collection, ignoring filters. Records with the same
    /// favorite key as `target` (the target itself included) are skipped.
    pub fn similar_to(&self, target: &Record) -> Vec<&'a Record> {
        let target_key = target.favorite_key();
        let brand = target.brand.to_lowercase();
        let body = target.body.to_lowercase();

        self.records
            .iter()
            .filter(|r| r.brand.to_lowercase() == brand || r.body.to_lowercase() == body)
            .filter(|r| r.favorite_key() != target_key)
            .take(self.similar_limit)
            .collect()
    }

    pub fn stats(&self) -> CatalogStats {
        let brands: HashSet<&str> = self
            .records
            .iter()
            .map(|r| r.brand.trim())
            .filter(|b| !b.is_empty())
            .collect();
        let models: HashSet<String> = self
            .records
            .iter()
            .map(|r| format!("{}|{}", r.brand.trim(), r.model.trim()))
            .collect();

        CatalogStats {
            brands: brands.len(),
            models: models.len(),
            images: self.records.iter().filter(|r| r.has_image()).count(),
            favorites: self
                .records
                .iter()
                .filter(|r| self.favorites.is_favorite(r))
                .count(),
            matching: self.filtered_records().len(),
        }
    }

    fn passes(&self, record: &Record, needle: &str) -> bool {
        facet_matches(&self.filter.brand_filter, &record.brand)
            && facet_matches(&self.filter.body_filter, &record.body)
            && (needle.is_empty() || search_text(record).contains(needle))
            && (!self.filter.only_favorites || self.favorites.is_favorite(record))
    }
}

/// Lowercased `brand model body year` used for free-text search.
pub fn search_text(record: &Record) -> String {
    format!(
        "{} {} {} {}",
        record.brand,
        record.model,
        record.body,
        record.year_label().unwrap_or_default()
    )
    .to_lowercase()
}

fn facet_values<'r>(values: impl Iterator<Item = &'r str>) -> Vec<String> {
    let mut distinct: Vec<&str> = values
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    distinct.sort_by(|a, b| locale_compare(a, b));

    std::iter::once(ALL.to_string())
        .chain(distinct.into_iter().map(str::to_string))
        .collect()
}

/// Collation for facet values, in three levels: base letters, then accents,
/// then case. Lowercase sorts before uppercase when nothing else differs.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(&base_letters(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}

/// Lowercased canonical decomposition with combining marks dropped.
fn base_letters(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}
