//! Session state and the operations that change it.
//!
//! [`Catalog`] owns the record collection, filter settings, favorites and the
//! active route. Every mutation replaces the affected value as a whole: an
//! import swaps the entire collection, a filter change swaps the filter state.

use crate::config::Config;
use crate::favorites::Favorites;
use crate::ingest::{parse_catalog, ParseError};
use crate::query::{CatalogStats, FilterState, QueryEngine};
use crate::record::{sample_records, Record};
use crate::router::{self, Route};

/// Discrete user or environment events the catalog reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogEvent {
    /// Text of a freshly read import file
    Import(String),
    SetQuery(String),
    SetBrandFilter(String),
    SetBodyFilter(String),
    SetOnlyFavorites(bool),
    /// Flip the favorite for the record at this address
    ToggleFavorite(String),
    /// The address changed
    Navigate(String),
    GoHome,
}

/// Outcome of an import attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportReport {
    /// True when at least one row was produced and the collection replaced
    pub accepted: bool,
    pub record_count: usize,
    pub errors: Vec<ParseError>,
}

/// Application state owned by a single controller.
#[derive(Debug)]
pub struct Catalog {
    records: Vec<Record>,
    filter: FilterState,
    favorites: Favorites,
    route: Route,
    errors: Vec<ParseError>,
    config: Config,
}

impl Catalog {
    /// Catalog seeded with the sample records.
    pub fn new(favorites: Favorites, config: Config) -> Self {
        Self::with_records(sample_records(), favorites, config)
    }

    /// Catalog with no records until the first import.
    pub fn empty(favorites: Favorites, config: Config) -> Self {
        Self::with_records(Vec::new(), favorites, config)
    }

    pub fn with_records(records: Vec<Record>, favorites: Favorites, config: Config) -> Self {
        Self {
            records,
            filter: FilterState::default(),
            favorites,
            route: Route::Home,
            errors: Vec::new(),
            config,
        }
    }

    /// Parse `text` and, if it yields any rows, replace the collection.
    ///
    /// The error list is kept for display either way. A successful import
    /// resets the query and facet filters; favorites are left untouched.
    pub fn import(&mut self, text: &str) -> ImportReport {
        let outcome = parse_catalog(text);
        let accepted = outcome.has_records();
        let record_count = outcome.records.len();

        self.errors = outcome.errors;
        if accepted {
            self.records = outcome.records;
            self.filter = FilterState {
                only_favorites: self.filter.only_favorites,
                ..FilterState::default()
            };
            log::info!(
                "imported {} records ({} problems)",
                record_count,
                self.errors.len()
            );
        } else {
            log::info!(
                "import produced no rows, keeping {} existing records",
                self.records.len()
            );
        }

        ImportReport {
            accepted,
            record_count,
            errors: self.errors.clone(),
        }
    }

    /// Apply one event. Returns the import report for `Import` events.
    pub fn apply(&mut self, event: CatalogEvent) -> Option<ImportReport> {
        match event {
            CatalogEvent::Import(text) => return Some(self.import(&text)),
            CatalogEvent::SetQuery(query) => self.set_query(query),
            CatalogEvent::SetBrandFilter(brand) => self.set_brand_filter(brand),
            CatalogEvent::SetBodyFilter(body) => self.set_body_filter(body),
            CatalogEvent::SetOnlyFavorites(only) => self.set_only_favorites(only),
            CatalogEvent::ToggleFavorite(address) => {
                if self.toggle_favorite_at(&address).is_none() {
                    log::debug!("no record at {:?} to toggle", address);
                }
            }
            CatalogEvent::Navigate(address) => self.navigate(&address),
            CatalogEvent::GoHome => self.go_home(),
        }
        None
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter = self.filter.clone().with_query(query);
    }

    pub fn set_brand_filter(&mut self, brand: impl Into<String>) {
        self.filter = self.filter.clone().with_brand(brand);
    }

    pub fn set_body_filter(&mut self, body: impl Into<String>) {
        self.filter = self.filter.clone().with_body(body);
    }

    pub fn set_only_favorites(&mut self, only_favorites: bool) {
        self.filter = self.filter.clone().with_only_favorites(only_favorites);
    }

    /// Every problem from the last import.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Problems from the last import, capped to the display limit.
    pub fn displayed_errors(&self) -> &[ParseError] {
        let limit = self.config.error_display_limit.min(self.errors.len());
        &self.errors[..limit]
    }

    pub fn query(&self) -> QueryEngine<'_> {
        QueryEngine::new(&self.records, &self.filter, &self.favorites)
            .with_similar_limit(self.config.similar_limit)
    }

    pub fn filtered_records(&self) -> Vec<&Record> {
        self.query().filtered_records()
    }

    pub fn stats(&self) -> CatalogStats {
        self.query().stats()
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    pub fn is_favorite(&self, record: &Record) -> bool {
        self.favorites.is_favorite(record)
    }

    /// Returns whether the record is a favorite after toggling.
    pub fn toggle_favorite(&mut self, record: &Record) -> bool {
        self.favorites.toggle(record)
    }

    /// Toggle the record an address points at, if any.
    pub fn toggle_favorite_at(&mut self, address: &str) -> Option<bool> {
        let route = router::decode(address);
        let record = router::find_record(&self.records, &route)?.clone();
        Some(self.favorites.toggle(&record))
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Re-read the route from an address. Safe to repeat.
    pub fn navigate(&mut self, address: &str) {
        self.route = router::decode(address);
    }

    /// Show the detail view for `record` and return its address.
    pub fn open(&mut self, record: &Record) -> String {
        let address = router::encode(record);
        self.navigate(&address);
        address
    }

    pub fn go_home(&mut self) {
        self.route = Route::Home;
    }

    /// Record the active route points at, or `None` on the home view or when
    /// no record matches.
    pub fn current_record(&self) -> Option<&Record> {
        router::find_record(&self.records, &self.route)
    }

    /// Records similar to the current one; empty when nothing is selected.
    pub fn current_similar(&self) -> Vec<&Record> {
        match self.current_record() {
            Some(record) => self.query().similar_to(record),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(Favorites::in_memory(), Config::default())
    }

    const TWO_ROWS: &str = "brand,model,year,body,image_url\nBMW,M3,2016,sedan,http://x\n,X,abc,coupe,\n";

    #[test]
    fn test_starts_with_sample_records() {
        let catalog = catalog();
        assert_eq!(catalog.records().len(), 3);
        assert!(catalog.route().is_home());
        assert!(catalog.errors().is_empty());
    }

    #[test]
    fn test_successful_import_replaces_records_and_resets_filters() {
        let mut catalog = catalog();
        catalog.set_query("supra");
        catalog.set_brand_filter("Toyota");
        catalog.set_body_filter("coupe");
        catalog.set_only_favorites(true);

        let report = catalog.import(TWO_ROWS);

        assert!(report.accepted);
        assert_eq!(report.record_count, 2);
        assert_eq!(report.errors.len(), 2);
        assert_eq!(catalog.records().len(), 2);
        assert_eq!(catalog.filter().query, "");
        assert_eq!(catalog.filter().brand_filter, "all");
        assert_eq!(catalog.filter().body_filter, "all");
        assert!(catalog.filter().only_favorites);
    }

    #[test]
    fn test_failed_import_keeps_records_but_surfaces_errors() {
        let mut catalog = catalog();
        catalog.set_query("bmw");

        let report = catalog.import("   \n");

        assert!(!report.accepted);
        assert_eq!(catalog.records().len(), 3);
        assert_eq!(catalog.errors().len(), 1);
        assert_eq!(catalog.filter().query, "bmw");
    }

    #[test]
    fn test_import_does_not_touch_favorites() {
        let mut catalog = catalog();
        let supra = catalog.records()[2].clone();
        catalog.toggle_favorite(&supra);

        catalog.import(TWO_ROWS);

        assert_eq!(catalog.favorites().len(), 1);
        assert!(catalog.is_favorite(&supra));
        assert_eq!(catalog.stats().favorites, 0);
    }

    #[test]
    fn test_displayed_errors_are_capped() {
        let mut text = String::from("brand,model,year,body,image_url\n");
        for _ in 0..15 {
            text.push_str(",,x,sedan,\n");
        }
        let mut catalog = catalog();
        catalog.import(&text);

        assert_eq!(catalog.errors().len(), 45);
        assert_eq!(catalog.displayed_errors().len(), 10);
        assert_eq!(catalog.displayed_errors()[0].line, 2);
    }

    #[test]
    fn test_open_and_lookup_round_trip() {
        let mut catalog = catalog();
        let audi = catalog.records()[1].clone();

        let address = catalog.open(&audi);

        assert_eq!(address, "car/audi/rs6/2020");
        assert_eq!(catalog.current_record(), Some(&audi));
        catalog.go_home();
        assert_eq!(catalog.current_record(), None);
    }

    #[test]
    fn test_unknown_address_resolves_to_no_record() {
        let mut catalog = catalog();
        catalog.navigate("car/lada/niva");
        assert!(!catalog.route().is_home());
        assert_eq!(catalog.current_record(), None);
        assert!(catalog.current_similar().is_empty());
    }

    #[test]
    fn test_navigate_is_idempotent() {
        let mut catalog = catalog();
        catalog.navigate("#/car/bmw/m3");
        let first = catalog.route().clone();
        catalog.navigate("#/car/bmw/m3");
        assert_eq!(catalog.route(), &first);
    }

    #[test]
    fn test_current_similar_ignores_active_filter() {
        let mut catalog = Catalog::with_records(
            vec![
                Record::new("BMW", "M3", Some(2016.0), "sedan", ""),
                Record::new("BMW", "M5", None, "sedan", ""),
                Record::new("Audi", "A4", None, "sedan", ""),
                Record::new("Audi", "TT", None, "coupe", ""),
            ],
            Favorites::in_memory(),
            Config::default(),
        );
        catalog.set_brand_filter("Audi");
        catalog.navigate("car/bmw/m3");

        let models: Vec<_> = catalog
            .current_similar()
            .into_iter()
            .map(|r| r.model.clone())
            .collect();
        assert_eq!(models, vec!["M5", "A4"]);
    }

    #[test]
    fn test_events_drive_state() {
        let mut catalog = catalog();
        assert!(catalog
            .apply(CatalogEvent::ToggleFavorite("car/bmw/m3/2016".into()))
            .is_none());
        catalog.apply(CatalogEvent::SetOnlyFavorites(true));
        let titles: Vec<_> = catalog
            .filtered_records()
            .into_iter()
            .map(Record::title)
            .collect();
        assert_eq!(titles, vec!["BMW M3"]);

        let report = catalog
            .apply(CatalogEvent::Import(TWO_ROWS.to_string()))
            .expect("import returns a report");
        assert!(report.accepted);

        catalog.apply(CatalogEvent::Navigate("car/bmw/m3".into()));
        assert!(catalog.current_record().is_some());
        catalog.apply(CatalogEvent::GoHome);
        assert!(catalog.route().is_home());
    }

    #[test]
    fn test_toggle_at_unknown_address_is_noop() {
        let mut catalog = catalog();
        assert_eq!(catalog.toggle_favorite_at("car/none/such"), None);
        assert!(catalog.favorites().is_empty());
    }
}
