//! JokeSession: 表示済み履歴を所有し、未表示のジョークを取得するまで取得を繰り返す
//!
//! 履歴はセッションが排他的に所有する。取得・リセットは同時に 1 つだけ実行でき、
//! 実行中の呼び出しは AcquireError::Busy で拒否する。

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use common::error::Error;
use common::ports::outbound::{Log, LogLevel, LogRecord};
use serde_json::json;

use crate::domain::{AcquireError, History, Joke};
use crate::ports::outbound::{HistoryStore, JokeSource};

/// 実行中フラグを立て、drop で下ろすガード
struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    fn try_acquire(flag: &'a AtomicBool) -> Result<Self, AcquireError> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| AcquireError::Busy)?;
        Ok(Self { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

pub struct JokeSession {
    source: Arc<dyn JokeSource>,
    store: Arc<dyn HistoryStore>,
    log: Arc<dyn Log>,
    max_attempts: u32,
    history: Mutex<History>,
    busy: AtomicBool,
}

impl JokeSession {
    /// 永続ストアから履歴を読み込んでセッションを開く
    pub fn open(
        source: Arc<dyn JokeSource>,
        store: Arc<dyn HistoryStore>,
        log: Arc<dyn Log>,
        max_attempts: u32,
    ) -> Result<Self, Error> {
        if max_attempts == 0 {
            return Err(Error::invalid_argument("max_attempts must be at least 1"));
        }
        let history = store.load()?;
        Ok(Self {
            source,
            store,
            log,
            max_attempts,
            history: Mutex::new(history),
            busy: AtomicBool::new(false),
        })
    }

    /// 現在の履歴のスナップショット
    pub fn history(&self) -> Result<History, Error> {
        Ok(self.lock_history()?.clone())
    }

    /// 履歴に無いジョークを 1 つ取得し、履歴に追加して永続化してから返す
    ///
    /// - 取得失敗は即座に AcquireError::Fetch（再試行しない）
    /// - 既出なら待たずに再取得し、max_attempts 回で AcquireError::ExhaustedRetries
    /// - 失敗時は履歴・ストアとも変更しない
    pub fn acquire(&self) -> Result<Joke, AcquireError> {
        let _busy = BusyGuard::try_acquire(&self.busy)?;
        let mut updated = self.history()?;
        let joke = self.fetch_novel(&updated)?;

        updated.push(joke.clone());
        // 永続化に成功してからメモリ上の履歴を差し替える
        self.store.save(&updated)?;
        let history_len = updated.len();
        *self.lock_history()? = updated;

        self.log_usecase(
            LogLevel::Info,
            "new joke accepted",
            json!({ "history_len": history_len }),
        );
        Ok(joke)
    }

    /// 永続ストアのキーを削除し、メモリ上の履歴を空にする（冪等）
    pub fn reset(&self) -> Result<(), AcquireError> {
        let _busy = BusyGuard::try_acquire(&self.busy)?;
        self.store.clear()?;
        self.lock_history()?.clear();
        self.log_usecase(LogLevel::Info, "history reset", json!({}));
        Ok(())
    }

    fn fetch_novel(&self, known: &History) -> Result<Joke, AcquireError> {
        for attempt in 1..=self.max_attempts {
            let joke = match self.source.fetch() {
                Ok(joke) => joke,
                Err(e) => {
                    self.log_usecase(
                        LogLevel::Warn,
                        "fetch failed",
                        json!({ "attempt": attempt, "error": e.to_string() }),
                    );
                    return Err(e);
                }
            };
            if !known.contains(&joke) {
                return Ok(joke);
            }
            self.log_usecase(
                LogLevel::Debug,
                "duplicate joke discarded",
                json!({ "attempt": attempt }),
            );
        }
        Err(AcquireError::ExhaustedRetries {
            attempts: self.max_attempts,
        })
    }

    fn lock_history(&self) -> Result<MutexGuard<'_, History>, Error> {
        self.history
            .lock()
            .map_err(|_| Error::system("joke history lock poisoned"))
    }

    fn log_usecase(&self, level: LogLevel, message: &str, fields: serde_json::Value) {
        let mut record = LogRecord::new(level, "usecase", "acquire", message);
        if let serde_json::Value::Object(map) = fields {
            for (k, v) in map {
                record = record.with_field(&k, v);
            }
        }
        let _ = self.log.log(&record);
    }
}
