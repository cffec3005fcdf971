//! Atelier DB - redb and flat-file implementations of the storage traits.

pub mod favorites_store;
pub mod legacy;
pub mod tables;

pub use favorites_store::RedbFavoritesBackend;
pub use legacy::LegacyFavoritesFile;

use std::path::Path;
use std::sync::Arc;

use redb::Database;

use atelier_core::StorageError;

/// Initialize a database with all required tables.
pub fn init_database(path: impl AsRef<Path>) -> Result<Arc<Database>, StorageError> {
    let db = Database::create(path).map_err(|e| StorageError::Database(e.to_string()))?;

    RedbFavoritesBackend::init_tables(&db)?;

    Ok(Arc::new(db))
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_core::FavoritesStore;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_init_database() {
        let dir = tempdir().unwrap();
        let db = init_database(dir.path().join("test.redb")).unwrap();

        let backend = RedbFavoritesBackend::new(db);
        assert_eq!(atelier_core::FavoritesBackend::count(&backend).unwrap(), 0);
    }

    #[test]
    fn test_migrate_legacy_file_into_redb() {
        let dir = tempdir().unwrap();
        let legacy_path = dir.path().join("favorites.json");
        fs::write(&legacy_path, r#"["a1", "b2", "a1", "c3"]"#).unwrap();

        let db = init_database(dir.path().join("test.redb")).unwrap();
        let store = FavoritesStore::new(Arc::new(RedbFavoritesBackend::new(db)))
            .with_legacy(Arc::new(LegacyFavoritesFile::new(&legacy_path)));

        assert_eq!(store.migrate_legacy(), 3);
        assert_eq!(store.count(), 3);
        assert!(store.is_favorite("b2"));
        assert!(!legacy_path.exists());

        // Nothing left to migrate
        assert_eq!(store.migrate_legacy(), 0);
        assert_eq!(store.count(), 3);
    }

    #[test]
    fn test_corrupt_legacy_file_is_kept() {
        let dir = tempdir().unwrap();
        let legacy_path = dir.path().join("favorites.json");
        fs::write(&legacy_path, "not json").unwrap();

        let db = init_database(dir.path().join("test.redb")).unwrap();
        let store = FavoritesStore::new(Arc::new(RedbFavoritesBackend::new(db)))
            .with_legacy(Arc::new(LegacyFavoritesFile::new(&legacy_path)));

        assert_eq!(store.migrate_legacy(), 0);
        assert_eq!(store.count(), 0);
        assert!(legacy_path.exists());
    }
}
