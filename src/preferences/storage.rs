//! Durable key-value storage behind the preference store.
//!
//! The store only ever uses a single fixed key, but the trait keeps the
//! persistence mechanism swappable: a real config-directory file on disk for
//! the application, an in-process map for tests and for sessions where no
//! config directory exists.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use super::error::PreferenceError;

/// Client-local persistent key-value storage surviving session restarts.
pub trait PreferenceStorage {
    /// Reads the stored value for `key`. A key that was never written reads
    /// as `Ok(None)`; only genuine storage failures produce an error.
    fn read_value(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    /// Writes `value` under `key`, replacing any previous value.
    fn write_value(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// One file per key under the platform config directory
/// (`<config_dir>/logai/<key>`). File contents are the raw value string.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Storage rooted at the platform config directory.
    ///
    /// Fails with `StorageUnavailable` when the platform exposes no config
    /// directory (some containers and sandboxes); callers fall back to
    /// [`MemoryStorage`] for the session.
    pub fn new() -> Result<Self, PreferenceError> {
        let base = dirs::config_dir().ok_or_else(|| {
            PreferenceError::StorageUnavailable("no platform config directory".to_string())
        })?;
        Ok(Self {
            dir: base.join("logai"),
        })
    }

    /// Storage rooted at an explicit directory. Used by tests and by the
    /// feedgen tool when writing beside a snapshot.
    pub fn with_dir(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }
}

impl PreferenceStorage for FileStorage {
    fn read_value(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        match fs::read_to_string(self.dir.join(key)) {
            Ok(contents) => Ok(Some(contents.trim().to_string())),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(PreferenceError::StorageUnavailable(err.to_string())),
        }
    }

    fn write_value(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        fs::create_dir_all(&self.dir)
            .map_err(|err| PreferenceError::StorageUnavailable(err.to_string()))?;
        fs::write(self.dir.join(key), value)
            .map_err(|err| PreferenceError::StorageUnavailable(err.to_string()))
    }
}

/// In-process storage. Holds values for the lifetime of the session only.
#[derive(Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeded storage, for tests simulating an earlier session.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.to_string(), value.to_string());
        Self { entries }
    }
}

impl PreferenceStorage for MemoryStorage {
    fn read_value(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write_value(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("logai-storage-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_file_storage_round_trip() {
        let mut storage = FileStorage::with_dir(scratch_dir("roundtrip"));

        assert_eq!(storage.read_value("logai-theme").unwrap(), None);

        storage.write_value("logai-theme", "light").unwrap();
        assert_eq!(
            storage.read_value("logai-theme").unwrap(),
            Some("light".to_string())
        );

        storage.write_value("logai-theme", "dark").unwrap();
        assert_eq!(
            storage.read_value("logai-theme").unwrap(),
            Some("dark".to_string())
        );

        let _ = fs::remove_dir_all(storage.dir());
    }

    #[test]
    fn test_file_storage_trims_trailing_newline() {
        // A hand-edited preference file may carry a trailing newline.
        let dir = scratch_dir("trim");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("logai-theme"), "dark\n").unwrap();

        let storage = FileStorage::with_dir(dir.clone());
        assert_eq!(
            storage.read_value("logai-theme").unwrap(),
            Some("dark".to_string())
        );

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_memory_storage_round_trip() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.read_value("logai-theme").unwrap(), None);

        storage.write_value("logai-theme", "light").unwrap();
        assert_eq!(
            storage.read_value("logai-theme").unwrap(),
            Some("light".to_string())
        );
    }
}
