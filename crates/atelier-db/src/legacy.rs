use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use atelier_core::{LegacyFavorites, StorageError};

/// The older favorites format: a JSON array of artwork ids in a flat file.
pub struct LegacyFavoritesFile {
    path: PathBuf,
}

impl LegacyFavoritesFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LegacyFavorites for LegacyFavoritesFile {
    fn load_ids(&self) -> Result<Option<Vec<String>>, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StorageError::Io(e.to_string())),
        };

        if raw.trim().is_empty() {
            return Ok(None);
        }

        let ids: Vec<String> =
            serde_json::from_str(&raw).map_err(|e| StorageError::CorruptLegacy(e.to_string()))?;
        Ok(Some(ids))
    }

    fn discard(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(e.to_string())),
        }
    }
}
