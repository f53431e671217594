//! User-controlled filter settings.

/// Sentinel value meaning "no restriction" for the brand and body facets.
pub const ALL: &str = "all";

/// Filter settings owned by the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    /// `"all"` or an exact brand (compared case-insensitively)
    pub brand_filter: String,
    /// `"all"` or an exact body style (compared case-insensitively)
    pub body_filter: String,
    pub only_favorites: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            query: String::new(),
            brand_filter: ALL.to_string(),
            body_filter: ALL.to_string(),
            only_favorites: false,
        }
    }
}

impl FilterState {
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand_filter = brand.into();
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body_filter = body.into();
        self
    }

    pub fn with_only_favorites(mut self, only_favorites: bool) -> Self {
        self.only_favorites = only_favorites;
        self
    }

    /// Normalized search needle: trimmed and lowercased.
    pub fn needle(&self) -> String {
        self.query.trim().to_lowercase()
    }
}

/// `"all"` matches everything, anything else must equal `value` ignoring case.
pub fn facet_matches(filter: &str, value: &str) -> bool {
    filter == ALL || value.to_lowercase() == filter.to_lowercase()
}
