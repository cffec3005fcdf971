use crate::error::StorageError;
use crate::favorite::FavoriteItem;

/// Trait for the durable favorites table, keyed by artwork id.
pub trait FavoritesBackend: Send + Sync {
    /// Insert or replace the record with this id.
    fn put(&self, item: FavoriteItem) -> Result<(), StorageError>;

    /// Delete a record. Returns Ok(false) if it was not present.
    fn delete(&self, id: &str) -> Result<bool, StorageError>;

    /// Get a record by id.
    fn get(&self, id: &str) -> Result<Option<FavoriteItem>, StorageError>;

    /// Get all records, in no particular order.
    fn get_all(&self) -> Result<Vec<FavoriteItem>, StorageError>;

    /// Number of records.
    fn count(&self) -> Result<usize, StorageError>;

    /// Delete every record.
    fn clear(&self) -> Result<(), StorageError>;
}

/// Trait for the older flat list of favorite ids.
pub trait LegacyFavorites: Send + Sync {
    /// Read the legacy ids. Returns Ok(None) if no legacy data exists.
    fn load_ids(&self) -> Result<Option<Vec<String>>, StorageError>;

    /// Remove the legacy data. Removing data that is already gone is fine.
    fn discard(&self) -> Result<(), StorageError>;
}

// In-memory implementations for testing
#[cfg(any(test, feature = "test-utils"))]
pub mod memory {
    use super::*;
    use std::collections::HashMap;
    use std::sync::RwLock;

    /// In-memory favorites backend for testing.
    #[derive(Default)]
    pub struct InMemoryFavoritesBackend {
        items: RwLock<HashMap<String, FavoriteItem>>,
    }

    impl InMemoryFavoritesBackend {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl FavoritesBackend for InMemoryFavoritesBackend {
        fn put(&self, item: FavoriteItem) -> Result<(), StorageError> {
            self.items.write().unwrap().insert(item.id.clone(), item);
            Ok(())
        }

        fn delete(&self, id: &str) -> Result<bool, StorageError> {
            Ok(self.items.write().unwrap().remove(id).is_some())
        }

        fn get(&self, id: &str) -> Result<Option<FavoriteItem>, StorageError> {
            Ok(self.items.read().unwrap().get(id).cloned())
        }

        fn get_all(&self) -> Result<Vec<FavoriteItem>, StorageError> {
            Ok(self.items.read().unwrap().values().cloned().collect())
        }

        fn count(&self) -> Result<usize, StorageError> {
            Ok(self.items.read().unwrap().len())
        }

        fn clear(&self) -> Result<(), StorageError> {
            self.items.write().unwrap().clear();
            Ok(())
        }
    }

    /// In-memory legacy id list for testing.
    #[derive(Default)]
    pub struct InMemoryLegacyFavorites {
        ids: RwLock<Option<Vec<String>>>,
    }

    impl InMemoryLegacyFavorites {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_ids<I, S>(ids: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            Self {
                ids: RwLock::new(Some(ids.into_iter().map(Into::into).collect())),
            }
        }

        /// Whether any legacy data is still present.
        pub fn is_present(&self) -> bool {
            self.ids.read().unwrap().is_some()
        }
    }

    impl LegacyFavorites for InMemoryLegacyFavorites {
        fn load_ids(&self) -> Result<Option<Vec<String>>, StorageError> {
            Ok(self.ids.read().unwrap().clone())
        }

        fn discard(&self) -> Result<(), StorageError> {
            *self.ids.write().unwrap() = None;
            Ok(())
        }
    }

}
