//! Favorites store.
//!
//! Wraps an injected [`FavoritesBackend`] with the visitor-facing operations.
//! Storage failures never reach the caller: they are logged and turned into
//! a no-op or an empty/zero result, so a broken store degrades to "no
//! favorites" instead of breaking a page.

use std::collections::HashSet;
use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::favorite::{newest_first, FavoriteItem};
use crate::storage::{FavoritesBackend, LegacyFavorites};
use crate::validation::Validator;

pub struct FavoritesStore {
    backend: Arc<dyn FavoritesBackend>,
    legacy: Option<Arc<dyn LegacyFavorites>>,
    clock: Arc<dyn Clock>,
}

impl FavoritesStore {
    pub fn new(backend: Arc<dyn FavoritesBackend>) -> Self {
        Self {
            backend,
            legacy: None,
            clock: Arc::new(SystemClock),
        }
    }

    /// Attach the legacy id list consulted by [`migrate_legacy`](Self::migrate_legacy).
    pub fn with_legacy(mut self, legacy: Arc<dyn LegacyFavorites>) -> Self {
        self.legacy = Some(legacy);
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    fn accept(id: &str, title: Option<&str>) -> bool {
        if let Err(e) = Validator::validate_document_id(id) {
            tracing::warn!("Ignoring favorite with bad id {:?}: {}", id, e);
            return false;
        }
        if let Err(e) = Validator::validate_title(title) {
            tracing::warn!("Ignoring favorite {}: {}", id, e);
            return false;
        }
        true
    }

    /// Add or refresh a favorite. Re-adding replaces the title and timestamp.
    pub fn add(&self, id: &str, title: Option<&str>) {
        if !Self::accept(id, title) {
            return;
        }

        let item = FavoriteItem::new(id, title.map(str::to_string), self.clock.now());
        if let Err(e) = self.backend.put(item) {
            tracing::error!("Error adding to favorites: {}", e);
        }
    }

    /// Remove a favorite. Absent ids are ignored.
    pub fn remove(&self, id: &str) {
        if let Err(e) = self.backend.delete(id) {
            tracing::error!("Error removing from favorites: {}", e);
        }
    }

    /// Flip membership. Returns whether `id` is a favorite afterwards.
    pub fn toggle(&self, id: &str, title: Option<&str>) -> bool {
        if self.is_favorite(id) {
            self.remove(id);
        } else {
            self.add(id, title);
        }
        self.is_favorite(id)
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        match self.backend.get(id) {
            Ok(item) => item.is_some(),
            Err(e) => {
                tracing::error!("Error checking favorite {}: {}", id, e);
                false
            }
        }
    }

    /// All favorite ids, in no particular order.
    pub fn list(&self) -> Vec<String> {
        match self.backend.get_all() {
            Ok(items) => items.into_iter().map(|f| f.id).collect(),
            Err(e) => {
                tracing::error!("Error loading favorites: {}", e);
                Vec::new()
            }
        }
    }

    /// All favorite records, newest first.
    pub fn list_detailed(&self) -> Vec<FavoriteItem> {
        match self.backend.get_all() {
            Ok(mut items) => {
                newest_first(&mut items);
                items
            }
            Err(e) => {
                tracing::error!("Error getting detailed favorites: {}", e);
                Vec::new()
            }
        }
    }

    pub fn count(&self) -> usize {
        match self.backend.count() {
            Ok(n) => n,
            Err(e) => {
                tracing::error!("Error getting favorites count: {}", e);
                0
            }
        }
    }

    pub fn clear(&self) {
        if let Err(e) = self.backend.clear() {
            tracing::error!("Error clearing favorites: {}", e);
        }
    }

    /// Copy the legacy id list into an empty store, then discard it.
    ///
    /// Only runs while the store is empty, so once favorites exist this is a
    /// no-op and may be called on every startup. Legacy data is left in place
    /// when the store already has records or the list is empty.
    /// Returns the number of ids migrated.
    pub fn migrate_legacy(&self) -> usize {
        let Some(legacy) = &self.legacy else {
            return 0;
        };

        let ids = match legacy.load_ids() {
            Ok(Some(ids)) => ids,
            Ok(None) => return 0,
            Err(e) => {
                tracing::error!("Error migrating legacy favorites: {}", e);
                return 0;
            }
        };

        if ids.is_empty() {
            return 0;
        }

        match self.backend.count() {
            Ok(0) => {}
            Ok(_) => return 0,
            Err(e) => {
                tracing::error!("Error migrating legacy favorites: {}", e);
                return 0;
            }
        }

        let now = self.clock.now();
        let mut seen = HashSet::new();
        let mut migrated: Vec<&str> = Vec::new();
        for id in &ids {
            if !seen.insert(id.as_str()) {
                continue;
            }
            if Validator::validate_document_id(id).is_err() {
                tracing::warn!("Skipping legacy favorite with bad id {:?}", id);
                continue;
            }
            if let Err(e) = self.backend.put(FavoriteItem::new(id.as_str(), None, now)) {
                tracing::error!("Error migrating legacy favorites: {}", e);
                // The empty-store guard must hold again for the next attempt.
                let mut stranded = 0;
                for done in &migrated {
                    if let Err(e) = self.backend.delete(done) {
                        tracing::error!("Error rolling back migrated favorite {}: {}", done, e);
                        stranded += 1;
                    }
                }
                if stranded > 0 {
                    tracing::error!(
                        "Legacy migration left {} partial favorites; it will not be retried",
                        stranded
                    );
                }
                return 0;
            }
            migrated.push(id);
        }

        if let Err(e) = legacy.discard() {
            tracing::warn!("Migrated favorites but could not discard legacy data: {}", e);
        }

        tracing::info!("Migrated {} favorites from legacy storage", migrated.len());
        migrated.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::error::StorageError;
    use crate::storage::memory::{InMemoryFavoritesBackend, InMemoryLegacyFavorites};
    use chrono::Duration;

    struct BrokenBackend;

    impl FavoritesBackend for BrokenBackend {
        fn put(&self, _item: FavoriteItem) -> Result<(), StorageError> {
            Err(StorageError::Database("disk full".to_string()))
        }
        fn delete(&self, _id: &str) -> Result<bool, StorageError> {
            Err(StorageError::Database("disk full".to_string()))
        }
        fn get(&self, _id: &str) -> Result<Option<FavoriteItem>, StorageError> {
            Err(StorageError::Database("disk full".to_string()))
        }
        fn get_all(&self) -> Result<Vec<FavoriteItem>, StorageError> {
            Err(StorageError::Database("disk full".to_string()))
        }
        fn count(&self) -> Result<usize, StorageError> {
            Err(StorageError::Database("disk full".to_string()))
        }
        fn clear(&self) -> Result<(), StorageError> {
            Err(StorageError::Database("disk full".to_string()))
        }
    }

    /// Accepts a fixed number of writes, then fails.
    struct FlakyBackend {
        inner: InMemoryFavoritesBackend,
        writes_left: std::sync::Mutex<usize>,
        deletes_fail: bool,
    }

    impl FavoritesBackend for FlakyBackend {
        fn put(&self, item: FavoriteItem) -> Result<(), StorageError> {
            let mut left = self.writes_left.lock().unwrap();
            if *left == 0 {
                return Err(StorageError::Database("write failed".to_string()));
            }
            *left -= 1;
            self.inner.put(item)
        }
        fn delete(&self, id: &str) -> Result<bool, StorageError> {
            if self.deletes_fail {
                return Err(StorageError::Database("delete failed".to_string()));
            }
            self.inner.delete(id)
        }
        fn get(&self, id: &str) -> Result<Option<FavoriteItem>, StorageError> {
            self.inner.get(id)
        }
        fn get_all(&self) -> Result<Vec<FavoriteItem>, StorageError> {
            self.inner.get_all()
        }
        fn count(&self) -> Result<usize, StorageError> {
            self.inner.count()
        }
        fn clear(&self) -> Result<(), StorageError> {
            self.inner.clear()
        }
    }

    fn store_with_clock() -> (FavoritesStore, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::default());
        let store = FavoritesStore::new(Arc::new(InMemoryFavoritesBackend::new()))
            .with_clock(clock.clone());
        (store, clock)
    }

    #[test]
    fn test_add_list_remove() {
        let (store, _) = store_with_clock();

        store.add("a1", Some("Sunset"));
        assert_eq!(store.list(), vec!["a1".to_string()]);

        store.remove("a1");
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let (store, _) = store_with_clock();
        store.remove("missing");
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_add_is_idempotent_and_refreshes() {
        let (store, clock) = store_with_clock();

        store.add("a1", Some("First"));
        clock.advance(Duration::seconds(10));
        store.add("a1", Some("Second"));

        let items = store.list_detailed();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title.as_deref(), Some("Second"));
        assert_eq!(items[0].date_added, clock.now());
    }

    #[test]
    fn test_toggle_is_its_own_inverse() {
        let (store, _) = store_with_clock();
        store.add("keep", None);

        assert!(store.toggle("a1", Some("Sunset")));
        assert!(store.is_favorite("a1"));
        assert!(!store.toggle("a1", Some("Sunset")));
        assert!(!store.is_favorite("a1"));

        assert!(!store.toggle("keep", None));
        assert!(store.toggle("keep", None));
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_list_detailed_newest_first() {
        let (store, clock) = store_with_clock();

        store.add("old", None);
        clock.advance(Duration::seconds(1));
        store.add("mid", None);
        clock.advance(Duration::seconds(1));
        store.add("new", None);

        let ids: Vec<_> = store.list_detailed().into_iter().map(|f| f.id).collect();
        assert_eq!(ids, vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_clear() {
        let (store, _) = store_with_clock();
        store.add("a", None);
        store.add("b", None);
        assert_eq!(store.count(), 2);

        store.clear();
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_bad_ids_ignored() {
        let (store, _) = store_with_clock();
        store.add("", None);
        store.add("   ", None);
        store.add("has space", None);
        store.add("ok", Some("x".repeat(257).as_str()));
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_failures_are_swallowed() {
        let store = FavoritesStore::new(Arc::new(BrokenBackend));

        store.add("a1", Some("Sunset"));
        store.remove("a1");
        store.clear();
        assert!(!store.toggle("a1", None));
        assert!(!store.is_favorite("a1"));
        assert!(store.list().is_empty());
        assert!(store.list_detailed().is_empty());
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_migrate_legacy() {
        let legacy = Arc::new(InMemoryLegacyFavorites::with_ids(["a", "b", "c"]));
        let (store, _) = store_with_clock();
        let store = store.with_legacy(legacy.clone());

        assert_eq!(store.migrate_legacy(), 3);
        assert_eq!(store.count(), 3);
        assert!(!legacy.is_present());

        // Second run is a no-op
        assert_eq!(store.migrate_legacy(), 0);
        assert_eq!(store.count(), 3);
    }

    #[test]
    fn test_migrate_skipped_when_store_not_empty() {
        let legacy = Arc::new(InMemoryLegacyFavorites::with_ids(["a", "b"]));
        let (store, _) = store_with_clock();
        let store = store.with_legacy(legacy.clone());
        store.add("existing", None);

        assert_eq!(store.migrate_legacy(), 0);
        assert_eq!(store.list(), vec!["existing".to_string()]);
        assert!(legacy.is_present());
    }

    #[test]
    fn test_migrate_empty_legacy_left_alone() {
        let legacy = Arc::new(InMemoryLegacyFavorites::with_ids(Vec::<String>::new()));
        let (store, _) = store_with_clock();
        let store = store.with_legacy(legacy.clone());

        assert_eq!(store.migrate_legacy(), 0);
        assert!(legacy.is_present());
    }

    #[test]
    fn test_migrate_without_legacy_source() {
        let (store, _) = store_with_clock();
        assert_eq!(store.migrate_legacy(), 0);
    }

    #[test]
    fn test_migrate_keeps_legacy_on_backend_failure() {
        let legacy = Arc::new(InMemoryLegacyFavorites::with_ids(["a"]));
        let store = FavoritesStore::new(Arc::new(BrokenBackend)).with_legacy(legacy.clone());

        assert_eq!(store.migrate_legacy(), 0);
        assert!(legacy.is_present());
    }

    #[test]
    fn test_migrate_rolls_back_partial_copy() {
        let legacy = Arc::new(InMemoryLegacyFavorites::with_ids(["a", "b", "c"]));
        let backend = Arc::new(FlakyBackend {
            inner: InMemoryFavoritesBackend::new(),
            writes_left: std::sync::Mutex::new(2),
            deletes_fail: false,
        });
        let store = FavoritesStore::new(backend.clone()).with_legacy(legacy.clone());

        assert_eq!(store.migrate_legacy(), 0);
        assert_eq!(store.count(), 0);
        assert!(legacy.is_present());

        *backend.writes_left.lock().unwrap() = 10;
        assert_eq!(store.migrate_legacy(), 3);
        assert!(!legacy.is_present());
    }

    #[test]
    fn test_migrate_failed_rollback_keeps_legacy() {
        let legacy = Arc::new(InMemoryLegacyFavorites::with_ids(["a", "b", "c"]));
        let backend = Arc::new(FlakyBackend {
            inner: InMemoryFavoritesBackend::new(),
            writes_left: std::sync::Mutex::new(2),
            deletes_fail: true,
        });
        let store = FavoritesStore::new(backend).with_legacy(legacy.clone());

        assert_eq!(store.migrate_legacy(), 0);
        let mut ids = store.list();
        ids.sort();
        assert_eq!(ids, vec!["a".to_string(), "b".to_string()]);
        assert!(legacy.is_present());

        // The store is no longer empty, so later attempts leave everything alone.
        assert_eq!(store.migrate_legacy(), 0);
        assert!(legacy.is_present());
    }

    #[test]
    fn test_migrate_collapses_duplicates_and_skips_bad_ids() {
        let legacy = Arc::new(InMemoryLegacyFavorites::with_ids(["a", "a", "", "b"]));
        let (store, _) = store_with_clock();
        let store = store.with_legacy(legacy);

        assert_eq!(store.migrate_legacy(), 2);
        let mut ids = store.list();
        ids.sort();
        assert_eq!(ids, vec!["a".to_string(), "b".to_string()]);
    }
}
