use std::sync::Arc;

use redb::{Database, ReadableTable, ReadableTableMetadata};

use atelier_core::{FavoriteItem, FavoritesBackend, StorageError};

use crate::tables::FAVORITES_TABLE;

fn db_err(e: impl std::fmt::Display) -> StorageError {
    StorageError::Database(e.to_string())
}

/// redb implementation of FavoritesBackend.
pub struct RedbFavoritesBackend {
    db: Arc<Database>,
}

impl RedbFavoritesBackend {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Initialize the database tables.
    pub fn init_tables(db: &Database) -> Result<(), StorageError> {
        let write_txn = db.begin_write().map_err(db_err)?;
        {
            let _ = write_txn.open_table(FAVORITES_TABLE).map_err(db_err)?;
        }
        write_txn.commit().map_err(db_err)?;
        Ok(())
    }
}

impl FavoritesBackend for RedbFavoritesBackend {
    fn put(&self, item: FavoriteItem) -> Result<(), StorageError> {
        let write_txn = self.db.begin_write().map_err(db_err)?;

        {
            let mut table = write_txn.open_table(FAVORITES_TABLE).map_err(db_err)?;
            let value = serde_json::to_vec(&item).map_err(db_err)?;
            table
                .insert(item.id.as_str(), value.as_slice())
                .map_err(db_err)?;
        }

        write_txn.commit().map_err(db_err)?;
        Ok(())
    }

    fn delete(&self, id: &str) -> Result<bool, StorageError> {
        let write_txn = self.db.begin_write().map_err(db_err)?;

        let removed;
        {
            let mut table = write_txn.open_table(FAVORITES_TABLE).map_err(db_err)?;
            removed = table.remove(id).map_err(db_err)?.is_some();
        }

        write_txn.commit().map_err(db_err)?;
        Ok(removed)
    }

    fn get(&self, id: &str) -> Result<Option<FavoriteItem>, StorageError> {
        let read_txn = self.db.begin_read().map_err(db_err)?;
        let table = read_txn.open_table(FAVORITES_TABLE).map_err(db_err)?;

        match table.get(id).map_err(db_err)? {
            Some(value) => {
                let item: FavoriteItem = serde_json::from_slice(value.value()).map_err(db_err)?;
                Ok(Some(item))
            }
            None => Ok(None),
        }
    }

    fn get_all(&self) -> Result<Vec<FavoriteItem>, StorageError> {
        let read_txn = self.db.begin_read().map_err(db_err)?;
        let table = read_txn.open_table(FAVORITES_TABLE).map_err(db_err)?;

        let mut items = Vec::new();
        for entry in table.iter().map_err(db_err)? {
            let (_, value) = entry.map_err(db_err)?;
            let item: FavoriteItem = serde_json::from_slice(value.value()).map_err(db_err)?;
            items.push(item);
        }

        Ok(items)
    }

    fn count(&self) -> Result<usize, StorageError> {
        let read_txn = self.db.begin_read().map_err(db_err)?;
        let table = read_txn.open_table(FAVORITES_TABLE).map_err(db_err)?;
        let len = table.len().map_err(db_err)?;
        Ok(len as usize)
    }

    fn clear(&self) -> Result<(), StorageError> {
        let write_txn = self.db.begin_write().map_err(db_err)?;

        {
            let mut table = write_txn.open_table(FAVORITES_TABLE).map_err(db_err)?;
            table.retain(|_, _| false).map_err(db_err)?;
        }

        write_txn.commit().map_err(db_err)?;
        Ok(())
    }
}
