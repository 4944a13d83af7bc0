//! Lightweight preference storage contracts and adapters.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

/// Host service for lightweight preference values (bare string token per key).
///
/// Calls are synchronous because the browser backing store (`localStorage`) is synchronous and
/// the theme stores must never suspend.
pub trait PrefsStore {
    /// Loads the raw string stored for a preference key.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store rejects the read.
    fn load_pref(&self, key: &str) -> Result<Option<String>, String>;

    /// Saves a raw string for a preference key.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store is unavailable or the write fails (for example
    /// quota exceeded).
    fn save_pref(&self, key: &str, value: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op preference store for unsupported targets and pre-render contexts.
pub struct NoopPrefsStore;

impl PrefsStore for NoopPrefsStore {
    fn load_pref(&self, _key: &str) -> Result<Option<String>, String> {
        Ok(None)
    }

    fn save_pref(&self, _key: &str, _value: &str) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory preference store keyed by string.
///
/// Clones share the same map, so a clone kept by a test observes writes made through the store
/// handed to the runtime.
pub struct MemoryPrefsStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
    fail_writes: Rc<RefCell<Option<String>>>,
    fail_reads: Rc<RefCell<Option<String>>>,
}

impl MemoryPrefsStore {
    /// Creates a store pre-populated with `entries`.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::default();
        {
            let mut map = store.inner.borrow_mut();
            for (key, value) in entries {
                map.insert(key.to_string(), value.to_string());
            }
        }
        store
    }

    /// Returns the stored value without going through the [`PrefsStore`] error channel.
    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key).cloned()
    }

    /// Makes every subsequent write fail with `reason`, simulating a full or disabled store.
    pub fn fail_writes_with(&self, reason: impl Into<String>) {
        *self.fail_writes.borrow_mut() = Some(reason.into());
    }

    /// Makes every subsequent read fail with `reason`, simulating a store blocked by privacy
    /// settings.
    pub fn fail_reads_with(&self, reason: impl Into<String>) {
        *self.fail_reads.borrow_mut() = Some(reason.into());
    }
}

impl PrefsStore for MemoryPrefsStore {
    fn load_pref(&self, key: &str) -> Result<Option<String>, String> {
        if let Some(reason) = self.fail_reads.borrow().as_ref() {
            return Err(reason.clone());
        }
        Ok(self.get(key))
    }

    fn save_pref(&self, key: &str, value: &str) -> Result<(), String> {
        if let Some(reason) = self.fail_writes.borrow().as_ref() {
            return Err(reason.clone());
        }
        self.inner
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn memory_prefs_store_saves_and_loads() {
        let store = MemoryPrefsStore::default();
        let store_obj: &dyn PrefsStore = &store;

        store_obj.save_pref("theme", "dark").expect("save");
        assert_eq!(
            store_obj.load_pref("theme").expect("load"),
            Some("dark".to_string())
        );
        assert_eq!(store_obj.load_pref("homeMode").expect("load"), None);
    }

    #[test]
    fn memory_prefs_store_clones_share_entries() {
        let store = MemoryPrefsStore::with_entries([("homeMode", "waves")]);
        let observer = store.clone();
        store.save_pref("theme", "auto").expect("save");

        assert_eq!(observer.get("theme"), Some("auto".to_string()));
        assert_eq!(observer.get("homeMode"), Some("waves".to_string()));
    }

    #[test]
    fn failing_writes_leave_existing_entries_untouched() {
        let store = MemoryPrefsStore::with_entries([("theme", "light")]);
        store.fail_writes_with("quota exceeded");

        assert_eq!(
            store.save_pref("theme", "dark"),
            Err("quota exceeded".to_string())
        );
        assert_eq!(store.get("theme"), Some("light".to_string()));
    }

    #[test]
    fn failing_reads_report_the_reason() {
        let store = MemoryPrefsStore::with_entries([("theme", "dark")]);
        store.fail_reads_with("access denied");

        assert_eq!(store.load_pref("theme"), Err("access denied".to_string()));
        assert_eq!(store.get("theme"), Some("dark".to_string()));
    }

    #[test]
    fn noop_prefs_store_is_empty_and_successful() {
        let store = NoopPrefsStore;
        let store_obj: &dyn PrefsStore = &store;
        assert_eq!(store_obj.load_pref("k").expect("load"), None);
        store_obj.save_pref("k", "v").expect("save");
        assert_eq!(store_obj.load_pref("k").expect("load"), None);
    }
}
