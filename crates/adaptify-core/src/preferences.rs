//! Persistent preference storage.
//!
//! The site keeps three small string preferences: appearance mode, language
//! and the cookie consent decision. Backends implement the fallible
//! [`PreferenceStore`] primitives; [`Preferences`] wraps them with the
//! contract every caller relies on: reads never fail (an unavailable backend
//! reads as "nothing stored") and writes are best effort.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Storage key for the appearance mode.
pub const THEME_KEY: &str = "adaptify-theme";

/// Storage key for the language preference.
pub const LANGUAGE_KEY: &str = "adaptify-language";

/// Storage key for the cookie consent decision.
pub const CONSENT_KEY: &str = "cookieConsent";

/// Key-value backend for string preferences.
/// This trait allows for mocking in tests.
#[cfg_attr(test, mockall::automock)]
pub trait PreferenceStore: Send + Sync {
    /// Read the value stored under `key`, `Ok(None)` if never written.
    fn try_read(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn try_write(&self, key: &str, value: &str) -> Result<()>;
}

/// Infallible view over a [`PreferenceStore`].
#[derive(Debug, Clone, Default)]
pub struct Preferences<S> {
    store: S,
}

impl<S: PreferenceStore> Preferences<S> {
    /// Wrap a backend.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Previously written value for `key`, or `None` if absent or the
    /// backend is unavailable.
    pub fn read(&self, key: &str) -> Option<String> {
        match self.store.try_read(key) {
            Ok(value) => value,
            Err(e) => {
                warn!("Preference read failed, treating as absent: {}", e);
                None
            }
        }
    }

    /// Best-effort write. Failures are logged and dropped.
    pub fn write(&self, key: &str, value: &str) {
        match self.store.try_write(key, value) {
            Ok(()) => debug!(key, value, "Stored preference"),
            Err(e) => warn!("Preference write failed, keeping in-memory value: {}", e),
        }
    }

    /// Access the underlying backend.
    pub const fn store(&self) -> &S {
        &self.store
    }
}

/// In-process store. Used for tests and as the fallback when no persistent
/// backend exists.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with entries.
    #[must_use]
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: RwLock::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn try_read(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| Error::storage(key, e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn try_write(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| Error::storage(key, e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a single JSON object file.
///
/// The whole file is rewritten on every write. Values survive process
/// restarts, which makes this the native stand-in for `localStorage`.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    lock: RwLock<()>,
}

impl JsonFileStore {
    /// Use the file at `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: RwLock::new(()),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path).map_err(|e| Error::FileSystem {
            path: self.path.clone(),
            message: format!("Failed to read preferences: {e}"),
        })?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }
}

impl PreferenceStore for JsonFileStore {
    fn try_read(&self, key: &str) -> Result<Option<String>> {
        let _guard = self
            .lock
            .read()
            .map_err(|e| Error::storage(key, e.to_string()))?;
        Ok(self.load()?.remove(key))
    }

    fn try_write(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self
            .lock
            .write()
            .map_err(|e| Error::storage(key, e.to_string()))?;
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|e| Error::FileSystem {
                path: parent.to_path_buf(),
                message: format!("Failed to create preferences directory: {e}"),
            })?;
        }

        let content = serde_json::to_string_pretty(&entries)?;
        fs::write(&self.path, content).map_err(|e| Error::FileSystem {
            path: self.path.clone(),
            message: format!("Failed to write preferences: {e}"),
        })?;
        Ok(())
    }
}
