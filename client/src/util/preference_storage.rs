//! Key-value backends for persisted UI preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! The theme store only needs two operations, `read` and `write`, and must
//! keep working when neither succeeds. `BrowserStorage` talks to
//! `localStorage` in hydrated builds and reports `Unavailable` everywhere
//! else (SSR, native tests). `MemoryStorage` backs tests and lets two stores
//! share one map the way two tabs share one origin.

#[cfg(test)]
#[path = "preference_storage_test.rs"]
mod preference_storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Failure talking to a preference backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No backend in this environment (SSR, storage disabled by the browser).
    #[error("preference storage is unavailable")]
    Unavailable,

    /// The backend exists but the read failed.
    #[error("failed to read preference {key:?}: {reason}")]
    Read { key: String, reason: String },

    /// The backend exists but the write failed (quota, private mode).
    #[error("failed to write preference {key:?}: {reason}")]
    Write { key: String, reason: String },
}

/// Minimal string key-value store.
pub trait PreferenceStorage {
    /// Read `key`. `Ok(None)` means the key has never been written.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend cannot be reached or read.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend cannot be reached or written.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

#[cfg(feature = "hydrate")]
fn js_reason(err: &wasm_bindgen::JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

impl PreferenceStorage for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|e| StorageError::Read { key: key.to_owned(), reason: js_reason(&e) })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Write { key: key.to_owned(), reason: js_reason(&e) })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }
}

#[derive(Debug, Default)]
struct MemoryInner {
    entries: HashMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
}

/// In-memory backend. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    inner: Arc<Mutex<MemoryInner>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.lock().entries.insert(key.to_owned(), value.to_owned());
        storage
    }

    /// Make every subsequent read fail.
    pub fn fail_reads(&self, fail: bool) {
        self.lock().fail_reads = fail;
    }

    /// Make every subsequent write fail.
    pub fn fail_writes(&self, fail: bool) {
        self.lock().fail_writes = fail;
    }

    /// Raw entry lookup that bypasses failure injection.
    #[must_use]
    pub fn peek(&self, key: &str) -> Option<String> {
        self.lock().entries.get(key).cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryInner> {
        // A poisoned map is still a valid map.
        self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl PreferenceStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let inner = self.lock();
        if inner.fail_reads {
            return Err(StorageError::Read { key: key.to_owned(), reason: "read disabled".to_owned() });
        }
        Ok(inner.entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut inner = self.lock();
        if inner.fail_writes {
            return Err(StorageError::Write { key: key.to_owned(), reason: "quota exceeded".to_owned() });
        }
        inner.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
