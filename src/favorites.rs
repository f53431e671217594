//! Favorites membership index kept in sync with a persisted list.
//!
//! Keys are independent of the record collection: a key stays favorited after
//! the records that produced it are replaced by a new import.

pub mod store;

pub use store::{FavoritesStore, JsonFileStore, MemoryStore, FAVORITES_SLOT};

use crate::query::Membership;
use crate::record::{FavoriteKey, Record};
use std::collections::HashSet;

/// Session favorites: ordered key list plus a hash index for O(1) lookups.
pub struct Favorites {
    order: Vec<FavoriteKey>,
    index: HashSet<FavoriteKey>,
    store: Box<dyn FavoritesStore>,
}

impl Favorites {
    /// Seed from `store`. A failing or corrupt store yields an empty set.
    pub fn load(store: Box<dyn FavoritesStore>) -> Self {
        let keys = store.load().unwrap_or_else(|e| {
            log::warn!("ignoring stored favorites: {}", e);
            Vec::new()
        });

        let mut favorites = Self {
            order: Vec::with_capacity(keys.len()),
            index: HashSet::with_capacity(keys.len()),
            store,
        };
        for key in keys.into_iter().map(FavoriteKey::from) {
            if favorites.index.insert(key.clone()) {
                favorites.order.push(key);
            }
        }
        favorites
    }

    /// Empty favorites persisted to an in-memory slot.
    pub fn in_memory() -> Self {
        Self::load(Box::new(MemoryStore::new()))
    }

    /// Flip membership of the record's key and persist the full set.
    ///
    /// Returns whether the record is a favorite afterwards.
    pub fn toggle(&mut self, record: &Record) -> bool {
        let key = record.favorite_key();
        let now_favorite = if self.index.remove(&key) {
            self.order.retain(|k| *k != key);
            false
        } else {
            self.index.insert(key.clone());
            self.order.push(key);
            true
        };
        self.persist();
        now_favorite
    }

    pub fn is_favorite(&self, record: &Record) -> bool {
        self.index.contains(&record.favorite_key())
    }

    pub fn contains(&self, key: &FavoriteKey) -> bool {
        self.index.contains(key)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Write the whole key list. Failures are logged; the in-memory state stays.
    fn persist(&self) {
        let keys: Vec<String> = self.order.iter().map(|k| k.as_str().to_string()).collect();
        if let Err(e) = self.store.save(&keys) {
            log::warn!("failed to persist {} favorites: {}", keys.len(), e);
        }
    }
}

impl Membership for Favorites {
    fn contains_key(&self, key: &FavoriteKey) -> bool {
        self.contains(key)
    }
}

impl std::fmt::Debug for Favorites {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Favorites")
            .field("keys", &self.order)
            .finish_non_exhaustive()
    }
}
