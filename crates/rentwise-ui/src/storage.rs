//! Key/value persistence behind the preference store.
//!
//! # Design
//! - Values are plain strings so the browser copy stays readable (`theme` →
//!   `dark`, not `"dark"`).
//! - Every adapter reports failures; callers decide whether to degrade.

use std::collections::BTreeMap;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by preference storage adapters.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Backing store could not be reached (for example, browser storage
    /// disabled or quota exhausted).
    #[error("preference storage unavailable")]
    Unavailable {
        /// Operation identifier.
        operation: &'static str,
        /// Adapter-specific detail.
        detail: String,
    },
    /// File system operation failed.
    #[error("preference file operation failed")]
    Io {
        /// Operation identifier.
        operation: &'static str,
        /// File the operation targeted.
        path: PathBuf,
        /// Source IO error.
        source: io::Error,
    },
    /// Preference file did not contain a JSON object of strings.
    #[error("preference file is malformed")]
    Malformed {
        /// File that failed to parse.
        path: PathBuf,
        /// Source parse error.
        source: serde_json::Error,
    },
}

/// Port for reading and writing persisted preferences.
pub trait PreferenceStorage {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store cannot be written.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`; deleting a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Process-local storage, used for tests and headless sessions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

impl MemoryStorage {
    /// Empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with `entries`.
    #[must_use]
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        }
    }

    /// Raw stored value, for assertions.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl PreferenceStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use std::collections::BTreeMap;
    use std::fs;
    use std::io::ErrorKind;
    use std::path::{Path, PathBuf};

    use super::{PreferenceStorage, StorageError};

    /// Preferences stored as a JSON object of strings in a single file.
    ///
    /// A missing file reads as empty; writes create parent directories.
    #[derive(Clone, Debug)]
    pub struct FileStorage {
        path: PathBuf,
    }

    impl FileStorage {
        /// Storage backed by the file at `path`.
        #[must_use]
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        /// File backing this storage.
        #[must_use]
        pub fn path(&self) -> &Path {
            &self.path
        }

        fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
            let content = match fs::read_to_string(&self.path) {
                Ok(content) => content,
                Err(err) if err.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
                Err(source) => {
                    return Err(StorageError::Io {
                        operation: "preferences.read",
                        path: self.path.clone(),
                        source,
                    });
                }
            };
            if content.trim().is_empty() {
                return Ok(BTreeMap::new());
            }
            serde_json::from_str(&content).map_err(|source| StorageError::Malformed {
                path: self.path.clone(),
                source,
            })
        }

        fn store(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
            if let Some(parent) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|source| StorageError::Io {
                    operation: "preferences.create_dir",
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
            let content =
                serde_json::to_string_pretty(entries).map_err(|source| StorageError::Malformed {
                    path: self.path.clone(),
                    source,
                })?;
            fs::write(&self.path, content).map_err(|source| StorageError::Io {
                operation: "preferences.write",
                path: self.path.clone(),
                source,
            })
        }
    }

    impl PreferenceStorage for FileStorage {
        fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.load()?.remove(key))
        }

        fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            let mut entries = self.load()?;
            entries.insert(key.to_string(), value.to_string());
            self.store(&entries)
        }

        fn remove(&mut self, key: &str) -> Result<(), StorageError> {
            let mut entries = self.load()?;
            if entries.remove(key).is_some() {
                self.store(&entries)?;
            }
            Ok(())
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStorage;

#[cfg(target_arch = "wasm32")]
mod browser {
    use gloo::storage::{LocalStorage, Storage};

    use super::{PreferenceStorage, StorageError};

    /// Browser `localStorage`, storing raw strings.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct BrowserStorage;

    fn unavailable(operation: &'static str, err: &wasm_bindgen::JsValue) -> StorageError {
        StorageError::Unavailable {
            operation,
            detail: format!("{err:?}"),
        }
    }

    impl PreferenceStorage for BrowserStorage {
        fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
            LocalStorage::raw()
                .get_item(key)
                .map_err(|err| unavailable("local_storage.get", &err))
        }

        fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            LocalStorage::raw()
                .set_item(key, value)
                .map_err(|err| unavailable("local_storage.set", &err))
        }

        fn remove(&mut self, key: &str) -> Result<(), StorageError> {
            LocalStorage::raw()
                .remove_item(key)
                .map_err(|err| unavailable("local_storage.remove", &err))
        }
    }
}
