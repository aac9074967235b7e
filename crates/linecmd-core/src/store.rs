//! Enabled/disabled state for named items
//!
//! Shared by the built-in commands through an `Arc`. The store only changes
//! from inside a command effect, so a rejected line leaves it untouched.

use std::{
    collections::BTreeMap,
    sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

/// State of one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ItemState {
    pub enabled: bool,
    /// Last value given to `enable`
    pub value: Option<i64>,
}

#[derive(Debug, Default)]
struct Items {
    items: BTreeMap<String, ItemState>,
    /// Result of the last `enable-all`/`disable-all`, used for unknown items
    default_enabled: bool,
}

/// Thread-safe item map.
#[derive(Debug, Default)]
pub struct ItemStore {
    inner: RwLock<Items>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    // Poisoning is ignored: the map stays usable after a panicking effect.
    fn read(&self) -> RwLockReadGuard<'_, Items> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Items> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn enable(&self, item: &str, value: i64) {
        self.write().items.insert(
            item.to_string(),
            ItemState {
                enabled: true,
                value: Some(value),
            },
        );
    }

    /// Mark `item` disabled, keeping its last value.
    pub fn disable(&self, item: &str) {
        self.write()
            .items
            .entry(item.to_string())
            .or_default()
            .enabled = false;
    }

    pub fn enable_all(&self) {
        self.set_all(true);
    }

    pub fn disable_all(&self) {
        self.set_all(false);
    }

    fn set_all(&self, enabled: bool) {
        let mut guard = self.write();
        guard.default_enabled = enabled;
        guard
            .items
            .values_mut()
            .for_each(|state| state.enabled = enabled);
    }

    pub fn get(&self, item: &str) -> Option<ItemState> {
        self.read().items.get(item).copied()
    }

    /// Whether `item` is enabled; unknown items follow the last `*-all` command.
    pub fn is_enabled(&self, item: &str) -> bool {
        let guard = self.read();
        guard
            .items
            .get(item)
            .map_or(guard.default_enabled, |state| state.enabled)
    }

    /// Copy of every known item, ordered by name.
    pub fn snapshot(&self) -> BTreeMap<String, ItemState> {
        self.read().items.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, thread};

    use super::*;

    #[test]
    fn test_enable_records_value() {
        let store = ItemStore::new();
        store.enable("thing", -10);
        assert_eq!(
            store.get("thing"),
            Some(ItemState {
                enabled: true,
                value: Some(-10)
            })
        );
        assert!(store.is_enabled("thing"));
    }

    #[test]
    fn test_disable_keeps_value() {
        let store = ItemStore::new();
        store.enable("thing", 3);
        store.disable("thing");
        assert_eq!(
            store.get("thing"),
            Some(ItemState {
                enabled: false,
                value: Some(3)
            })
        );
    }

    #[test]
    fn test_disable_unknown_item_inserts_it() {
        let store = ItemStore::new();
        store.disable("");
        assert_eq!(store.get(""), Some(ItemState::default()));
    }

    #[test]
    fn test_all_commands_flip_every_item_and_default() {
        let store = ItemStore::new();
        store.enable("a", 1);
        store.disable("b");
        assert!(!store.is_enabled("unknown"));

        store.enable_all();
        assert!(store.is_enabled("a"));
        assert!(store.is_enabled("b"));
        assert!(store.is_enabled("unknown"));

        store.disable_all();
        assert!(!store.is_enabled("a"));
        assert!(!store.is_enabled("unknown"));
        assert_eq!(store.get("a").and_then(|s| s.value), Some(1));
    }

    #[test]
    fn test_snapshot_is_ordered() {
        let store = ItemStore::new();
        store.enable("zeta", 1);
        store.enable("alpha", 2);
        let names: Vec<_> = store.snapshot().into_keys().collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_concurrent_writers() {
        let store = Arc::new(ItemStore::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                thread::spawn(move || store.enable(&format!("item-{i}"), i))
            })
            .collect();
        for handle in handles {
            assert!(handle.join().is_ok());
        }
        assert_eq!(store.snapshot().len(), 8);
    }
}
