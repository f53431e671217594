//! # autocatalog - Vehicle Catalog Import and Browsing
//!
//! Imports a CSV or semicolon-separated file describing vehicles, validates it
//! into canonical [`Record`]s and offers the views a catalog front end needs.
//!
//! ## Features
//!
//! - **Forgiving import**: delimiter detection, header aliases and a complete,
//!   ordered list of problems instead of a first-error abort
//! - **Faceted browsing**: brand/body facets, free-text search, favorites-only view
//! - **Deep links**: stable `car/<brand>/<model>[/<year>]` addresses
//! - **Persistent favorites**: key list stored as JSON under a fixed slot
//!
//! ## Architecture
//!
//! - [`record`] - Canonical record and favorite keys
//! - [`ingest`] - Tabular parser and row validator
//! - [`query`] - Filtering, similarity and aggregate stats
//! - [`router`] - Address encoding and decoding
//! - [`favorites`] - Favorites index and its persistence
//! - [`catalog`] - Session state controller
//! - [`config`] - Runtime settings
//! - [`input`] - Reading import files
//! - [`error`] - Error types for the I/O edges

// Core modules
pub mod error;
pub mod record;

// Pipeline and derived views
pub mod ingest;
pub mod query;
pub mod router;

// Edges and session state
pub mod catalog;
pub mod config;
pub mod favorites;
pub mod input;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};

pub use catalog::{Catalog, CatalogEvent, ImportReport};
pub use config::Config;
pub use favorites::{Favorites, FavoritesStore, JsonFileStore, MemoryStore};
pub use ingest::{parse_catalog, ImportOutcome, IssueKind, ParseError};
pub use query::{CatalogStats, FilterState, QueryEngine};
pub use record::{FavoriteKey, Record};
pub use router::Route;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
