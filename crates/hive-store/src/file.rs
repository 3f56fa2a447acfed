//! # File Storage
//!
//! One JSON file per key inside a data directory.
//!
//! ## Layout
//! ```text
//! ~/.local/share/storefront/           (Linux, via `directories`)
//! └── cart.json                        ← value stored under key "cart"
//! ```
//!
//! Writes go to a temporary sibling first and are renamed into place, so a
//! crash mid-write leaves the previous cart intact rather than a truncated one.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::debug;

use crate::error::{StorageError, StorageResult};
use crate::storage::KeyValueStorage;

/// File-backed key-value storage.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Opens (and creates if needed) a storage directory.
    pub fn new(dir: impl Into<PathBuf>) -> StorageResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        debug!(?dir, "File storage opened");
        Ok(FileStorage { dir })
    }

    /// Opens storage in the platform data directory.
    ///
    /// ## Platform-Specific Paths
    /// - **macOS**: `~/Library/Application Support/com.hive.storefront`
    /// - **Windows**: `%APPDATA%\hive\storefront\data`
    /// - **Linux**: `~/.local/share/storefront`
    pub fn open_default() -> StorageResult<Self> {
        let dir = Self::default_dir().ok_or(StorageError::NoDataDir)?;
        Self::new(dir)
    }

    /// Platform data directory, if one can be determined.
    pub fn default_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "hive", "storefront").map(|dirs| dirs.data_dir().to_path_buf())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`.
    pub fn path_for(&self, key: &str) -> StorageResult<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

/// Keys become file names, so only a conservative character set is allowed.
fn validate_key(key: &str) -> StorageResult<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.');

    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::read(key, e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        let path = self.path_for(key)?;
        let tmp = self.dir.join(format!(".{}.json.tmp", key));

        fs::write(&tmp, value).map_err(|e| StorageError::write(key, e))?;
        fs::rename(&tmp, &path).map_err(|e| StorageError::write(key, e))?;

        debug!(?path, bytes = value.len(), "Slot written");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::write(key, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path()).unwrap();

        assert_eq!(storage.get("cart").unwrap(), None);

        storage.set("cart", r#"[{"id":"beeswax"}]"#).unwrap();
        assert_eq!(
            storage.get("cart").unwrap().as_deref(),
            Some(r#"[{"id":"beeswax"}]"#)
        );
        assert!(dir.path().join("cart.json").exists());
        assert!(!dir.path().join(".cart.json.tmp").exists());

        storage.remove("cart").unwrap();
        storage.remove("cart").unwrap();
        assert_eq!(storage.get("cart").unwrap(), None);
    }

    #[test]
    fn test_file_storage_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut storage = FileStorage::new(dir.path()).unwrap();
            storage.set("cart", "[]").unwrap();
        }

        let storage = FileStorage::new(dir.path()).unwrap();
        assert_eq!(storage.get("cart").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_file_storage_creates_nested_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let storage = FileStorage::new(&nested).unwrap();
        assert_eq!(storage.dir(), nested.as_path());
        assert!(nested.is_dir());
    }

    #[test]
    fn test_invalid_keys_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path()).unwrap();

        for key in ["", "../cart", "a/b", ".hidden", "cart key"] {
            assert!(
                matches!(storage.set(key, "[]"), Err(StorageError::InvalidKey(_))),
                "key {:?} should be rejected",
                key
            );
        }
        assert!(storage.path_for("cart-v2").is_ok());
    }
}
