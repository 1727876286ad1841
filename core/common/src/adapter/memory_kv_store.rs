//! プロセス内メモリのキー・バリューストア（テスト・一時利用向け）

use crate::domain::StorageKey;
use crate::error::Error;
use crate::ports::outbound::KeyValueStore;
use std::collections::BTreeMap;
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: Mutex<BTreeMap<StorageKey, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 現在のキー一覧（テストでの検証用）
    pub fn keys(&self) -> Vec<StorageKey> {
        self.entries
            .lock()
            .map(|m| m.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn with_entries<T>(
        &self,
        f: impl FnOnce(&mut BTreeMap<StorageKey, String>) -> T,
    ) -> Result<T, Error> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|_| Error::system("memory store lock poisoned"))?;
        Ok(f(&mut guard))
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &StorageKey) -> Result<Option<String>, Error> {
        self.with_entries(|m| m.get(key).cloned())
    }

    fn set(&self, key: &StorageKey, value: &str) -> Result<(), Error> {
        self.with_entries(|m| {
            m.insert(key.clone(), value.to_string());
        })
    }

    fn remove(&self, key: &StorageKey) -> Result<(), Error> {
        self.with_entries(|m| {
            m.remove(key);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryKeyValueStore::new();
        let k = StorageKey::new("k");
        assert_eq!(store.get(&k).unwrap(), None);
        store.set(&k, "v").unwrap();
        assert_eq!(store.get(&k).unwrap().as_deref(), Some("v"));
        assert_eq!(store.keys(), vec![k.clone()]);
        store.remove(&k).unwrap();
        assert!(store.keys().is_empty());
    }
}
