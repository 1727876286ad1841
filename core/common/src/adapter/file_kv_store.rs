//! JSON ファイル 1 つで保持するキー・バリューストア
//!
//! ファイルは `{ "<key>": "<value>", ... }` の JSON オブジェクト。
//! 書き込みは一時ファイルに書いてから rename するため、途中状態のファイルは観測されない。

use crate::domain::StorageKey;
use crate::error::Error;
use crate::ports::outbound::{FileSystem, KeyValueStore};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

type Entries = BTreeMap<String, String>;

/// storage.json を読み書きする KeyValueStore 実装
pub struct FileKeyValueStore {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
    // 同一プロセス内の read-modify-write を直列化する
    write_lock: Mutex<()>,
}

impl FileKeyValueStore {
    pub fn new(fs: Arc<dyn FileSystem>, path: impl AsRef<Path>) -> Self {
        Self {
            fs,
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// ファイルが無ければ空。壊れていれば Error::Json。
    fn read_entries(&self) -> Result<Entries, Error> {
        if !self.fs.is_file(&self.path) {
            return Ok(Entries::new());
        }
        let s = self.fs.read_to_string(&self.path)?;
        if s.trim().is_empty() {
            return Ok(Entries::new());
        }
        serde_json::from_str(&s)
            .map_err(|e| Error::json(format!("{}: {}", self.path.display(), e)))
    }

    /// 書き換え用の読み込み。壊れたファイルは空として扱い、次の書き込みで置き換える。
    fn read_entries_for_update(&self) -> Result<Entries, Error> {
        match self.read_entries() {
            Err(Error::Json(_)) => Ok(Entries::new()),
            other => other,
        }
    }

    fn write_entries(&self, entries: &Entries) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            self.fs.create_dir_all(parent)?;
        }
        let json =
            serde_json::to_string_pretty(entries).map_err(|e| Error::json(e.to_string()))?;
        let tmp = self.tmp_path();
        self.fs.write(&tmp, &json)?;
        self.fs.rename(&tmp, &self.path)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, ()>, Error> {
        self.write_lock
            .lock()
            .map_err(|_| Error::system("key-value store lock poisoned"))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &StorageKey) -> Result<Option<String>, Error> {
        let _guard = self.lock()?;
        Ok(self.read_entries()?.remove(key.as_str()))
    }

    fn set(&self, key: &StorageKey, value: &str) -> Result<(), Error> {
        let _guard = self.lock()?;
        let mut entries = self.read_entries_for_update()?;
        entries.insert(key.as_str().to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn remove(&self, key: &StorageKey) -> Result<(), Error> {
        let _guard = self.lock()?;
        if !self.fs.is_file(&self.path) {
            return Ok(());
        }
        let mut entries = self.read_entries_for_update()?;
        entries.remove(key.as_str());
        self.write_entries(&entries)
    }
}
