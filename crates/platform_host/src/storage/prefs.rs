//! Lightweight preference storage contracts and adapters.
//!
//! The desktop persists a single value through this contract (the display name collected by the
//! setup wizard), but the store itself is keyed JSON text so adapters stay generic.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

use serde::{de::DeserializeOwned, Serialize};

/// Object-safe boxed future used by [`PrefsStore`] async methods.
pub type PrefsStoreFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for lightweight preference values (JSON stored as text per key).
pub trait PrefsStore {
    /// Loads a raw JSON string for a preference key.
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>>;

    /// Saves a raw JSON string for a preference key.
    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op preference store for unsupported targets and baseline tests.
pub struct NoopPrefsStore;

impl PrefsStore for NoopPrefsStore {
    fn load_pref<'a>(
        &'a self,
        _key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async { Ok(None) })
    }

    fn save_pref<'a>(
        &'a self,
        _key: &'a str,
        _raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory preference store keyed by string.
///
/// Clones share the same backing map, so a test can keep a handle and inspect what the runtime
/// wrote through another clone.
pub struct MemoryPrefsStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryPrefsStore {
    /// Creates a store pre-seeded with one raw JSON entry.
    pub fn with_raw_entry(key: &str, raw_json: &str) -> Self {
        let store = Self::default();
        store
            .inner
            .borrow_mut()
            .insert(key.to_string(), raw_json.to_string());
        store
    }

    /// Returns the raw JSON currently stored for `key`.
    pub fn raw_entry(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key).cloned()
    }
}

impl PrefsStore for MemoryPrefsStore {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async move { Ok(self.raw_entry(key)) })
    }

    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.inner
                .borrow_mut()
                .insert(key.to_string(), raw_json.to_string());
            Ok(())
        })
    }
}

/// Loads and deserializes a typed preference value through a [`PrefsStore`] implementation.
///
/// # Errors
///
/// Returns an error when the store or JSON deserialization fails.
pub async fn load_pref_with<S: PrefsStore + ?Sized, T: DeserializeOwned>(
    store: &S,
    key: &str,
) -> Result<Option<T>, String> {
    let Some(raw) = store.load_pref(key).await? else {
        return Ok(None);
    };
    let value = serde_json::from_str(&raw).map_err(|e| e.to_string())?;
    Ok(Some(value))
}

/// Serializes and saves a typed preference value through a [`PrefsStore`] implementation.
///
/// # Errors
///
/// Returns an error when serialization or store save fails.
pub async fn save_pref_with<S: PrefsStore + ?Sized, T: Serialize>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<(), String> {
    let raw = serde_json::to_string(value).map_err(|e| e.to_string())?;
    store.save_pref(key, &raw).await
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    const NAME_KEY: &str = "test.display_name";

    #[test]
    fn memory_prefs_store_saves_and_overwrites_display_name() {
        let store = MemoryPrefsStore::default();
        let store_obj: &dyn PrefsStore = &store;

        block_on(store_obj.save_pref(NAME_KEY, "\"Hamza\"")).expect("save");
        assert_eq!(
            block_on(store_obj.load_pref(NAME_KEY)).expect("load"),
            Some("\"Hamza\"".to_string())
        );
        block_on(store_obj.save_pref(NAME_KEY, "\"Mona\"")).expect("overwrite");
        assert_eq!(store.raw_entry(NAME_KEY), Some("\"Mona\"".to_string()));
    }

    #[test]
    fn clones_share_backing_map() {
        let store = MemoryPrefsStore::default();
        let writer = store.clone();
        block_on(save_pref_with(&writer, NAME_KEY, &"Mona".to_string())).expect("save");
        assert_eq!(store.raw_entry(NAME_KEY), Some("\"Mona\"".to_string()));
    }

    #[test]
    fn typed_load_reads_seeded_entry_and_rejects_garbage() {
        let store = MemoryPrefsStore::with_raw_entry(NAME_KEY, "\"Hamza\"");
        let loaded: Option<String> = block_on(load_pref_with(&store, NAME_KEY)).expect("load");
        assert_eq!(loaded.as_deref(), Some("Hamza"));

        let broken = MemoryPrefsStore::with_raw_entry(NAME_KEY, "{not json");
        let result: Result<Option<String>, String> = block_on(load_pref_with(&broken, NAME_KEY));
        assert!(result.is_err());
    }

    #[test]
    fn noop_prefs_store_is_empty_and_successful() {
        let store = NoopPrefsStore;
        let store_obj: &dyn PrefsStore = &store;
        assert_eq!(block_on(store_obj.load_pref(NAME_KEY)).expect("load"), None);
        block_on(store_obj.save_pref(NAME_KEY, "\"x\"")).expect("save");
        assert_eq!(block_on(store_obj.load_pref(NAME_KEY)).expect("load"), None);
    }
}
