//! 履歴をキー・バリューストアの固定キーに JSON 文字列で保存するアダプタ

use std::sync::Arc;

use common::domain::StorageKey;
use common::error::Error;
use common::ports::outbound::{KeyValueStore, Log, LogLevel, LogRecord};
use serde_json::json;

use crate::domain::History;
use crate::ports::outbound::HistoryStore;

/// 履歴を保存する固定キー
pub const HISTORY_KEY: &str = "displayedJokes";

pub struct KvHistoryStore {
    kv: Arc<dyn KeyValueStore>,
    key: StorageKey,
    log: Arc<dyn Log>,
}

impl KvHistoryStore {
    pub fn new(kv: Arc<dyn KeyValueStore>, log: Arc<dyn Log>) -> Self {
        Self {
            kv,
            key: StorageKey::new(HISTORY_KEY),
            log,
        }
    }

    fn warn_unreadable(&self, reason: String) {
        let _ = self.log.log(
            &LogRecord::new(
                LogLevel::Warn,
                "adapter",
                "storage",
                "stored joke history is unreadable; starting empty",
            )
            .with_field("key", json!(self.key.as_str()))
            .with_field("reason", json!(reason)),
        );
    }
}

impl HistoryStore for KvHistoryStore {
    fn load(&self) -> Result<History, Error> {
        let value = match self.kv.get(&self.key) {
            Ok(Some(v)) => v,
            Ok(None) => return Ok(History::new()),
            Err(Error::Json(reason)) => {
                self.warn_unreadable(reason);
                return Ok(History::new());
            }
            Err(e) => return Err(e),
        };
        match History::from_json(&value) {
            Ok(history) => Ok(history),
            Err(e) => {
                self.warn_unreadable(e.to_string());
                Ok(History::new())
            }
        }
    }

    fn save(&self, history: &History) -> Result<(), Error> {
        let json = history.to_json().map_err(|e| Error::json(e.to_string()))?;
        self.kv.set(&self.key, &json)
    }

    fn clear(&self) -> Result<(), Error> {
        self.kv.remove(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Joke;
    use common::adapter::{FileKeyValueStore, MemoryKeyValueStore, NoopLog, StdFileSystem};
    use std::sync::Mutex;

    /// テスト用: 受け取ったレコードを保持する Log
    #[derive(Default)]
    struct RecordingLog {
        records: Mutex<Vec<LogRecord>>,
    }

    impl Log for RecordingLog {
        fn log(&self, record: &LogRecord) -> Result<(), Error> {
            self.records.lock().unwrap().push(record.clone());
            Ok(())
        }
    }

    fn store_over(kv: Arc<dyn KeyValueStore>) -> KvHistoryStore {
        KvHistoryStore::new(kv, Arc::new(NoopLog))
    }

    /// warn レコードが 1 件だけ、adapter / storage / key=displayedJokes で出ていること
    fn assert_single_storage_warning(log: &RecordingLog) {
        let records = log.records.lock().unwrap();
        assert_eq!(records.len(), 1);
        let rec = &records[0];
        assert_eq!(rec.level, LogLevel::Warn);
        assert_eq!(rec.layer.as_deref(), Some("adapter"));
        assert_eq!(rec.kind.as_deref(), Some("storage"));
        let fields = rec.fields.as_ref().unwrap();
        assert_eq!(fields["key"], json!(HISTORY_KEY));
        assert!(fields.contains_key("reason"));
    }

    #[test]
    fn test_load_absent_key_is_empty() {
        let store = store_over(Arc::new(MemoryKeyValueStore::new()));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_load_unparsable_value_is_empty() {
        let kv = Arc::new(MemoryKeyValueStore::new());
        kv.set(&StorageKey::new(HISTORY_KEY), "not json").unwrap();
        let store = store_over(kv.clone());
        assert!(store.load().unwrap().is_empty());
        // 読み込みだけでは値を書き換えない
        assert_eq!(
            kv.get(&StorageKey::new(HISTORY_KEY)).unwrap().as_deref(),
            Some("not json")
        );
    }

    #[test]
    fn test_load_unparsable_value_logs_warning() {
        let kv = Arc::new(MemoryKeyValueStore::new());
        kv.set(&StorageKey::new(HISTORY_KEY), r#"{"setup":"S1"}"#).unwrap();
        let log = Arc::new(RecordingLog::default());
        let store = KvHistoryStore::new(kv, log.clone());

        assert!(store.load().unwrap().is_empty());
        assert_single_storage_warning(&log);
    }

    #[test]
    fn test_load_well_formed_value_logs_nothing() {
        let kv = Arc::new(MemoryKeyValueStore::new());
        let log = Arc::new(RecordingLog::default());
        let store = KvHistoryStore::new(kv, log.clone());
        store.save(&History::from(vec![Joke::new("S1", "P1")])).unwrap();

        assert_eq!(store.load().unwrap().len(), 1);
        assert!(log.records.lock().unwrap().is_empty());
    }

    #[test]
    fn test_save_writes_plain_json_array_under_fixed_key() {
        let kv = Arc::new(MemoryKeyValueStore::new());
        let store = store_over(kv.clone());
        let history = History::from(vec![Joke::new("S1", "P1"), Joke::new("S2", "P2")]);
        store.save(&history).unwrap();
        assert_eq!(
            kv.get(&StorageKey::new(HISTORY_KEY)).unwrap().as_deref(),
            Some(r#"[{"setup":"S1","punchline":"P1"},{"setup":"S2","punchline":"P2"}]"#)
        );
        assert_eq!(store.load().unwrap(), history);
    }

    #[test]
    fn test_save_of_load_keeps_stored_value() {
        let kv = Arc::new(MemoryKeyValueStore::new());
        let store = store_over(kv.clone());
        store
            .save(&History::from(vec![
                Joke::new("Why \"quoted\"?", "Ünïcode ✓"),
                Joke::new("S2", "P2"),
            ]))
            .unwrap();
        let before = kv.get(&StorageKey::new(HISTORY_KEY)).unwrap();

        store.save(&store.load().unwrap()).unwrap();
        assert_eq!(kv.get(&StorageKey::new(HISTORY_KEY)).unwrap(), before);
    }

    #[test]
    fn test_clear_removes_key_and_is_idempotent() {
        let kv = Arc::new(MemoryKeyValueStore::new());
        let store = store_over(kv.clone());
        store.save(&History::from(vec![Joke::new("S1", "P1")])).unwrap();
        store.clear().unwrap();
        assert!(kv.keys().is_empty());
        store.clear().unwrap();
        assert!(kv.keys().is_empty());
    }

    #[test]
    fn test_corrupt_storage_file_loads_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("storage.json");
        std::fs::write(&path, "{").unwrap();
        let kv = Arc::new(FileKeyValueStore::new(Arc::new(StdFileSystem), &path));
        let log = Arc::new(RecordingLog::default());
        let store = KvHistoryStore::new(kv, log.clone());
        assert!(store.load().unwrap().is_empty());
        assert_single_storage_warning(&log);

        store.save(&History::from(vec![Joke::new("S1", "P1")])).unwrap();
        assert_eq!(store.load().unwrap().len(), 1);
    }
}
