//! Aggregate counters shown above the record list.

/// Summary counts over the current collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogStats {
    /// Distinct non-empty trimmed brands
    pub brands: usize,
    /// Distinct `brand|model` pairs (trimmed)
    pub models: usize,
    /// Records whose image URL is longer than 5 characters
    pub images: usize,
    /// Records whose favorite key is in the favorites set
    pub favorites: usize,
    /// Records passing the active filter
    pub matching: usize,
}

impl std::fmt::Display for CatalogStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "brands: {} | models: {} | images: {} | favorites: {} | matching: {}",
            self.brands, self.models, self.images, self.favorites, self.matching
        )
    }
}
