//! キー・バリューストア Outbound ポート
//!
//! ブラウザの localStorage に相当する永続ストア。値は文字列で、キー単位で上書き（last-write-wins）。

use crate::domain::StorageKey;
use crate::error::Error;

/// 文字列キー → 文字列値の永続ストア
///
/// 実装は `common::adapter::FileKeyValueStore`（JSON ファイル）や `MemoryKeyValueStore`（テスト用）。
pub trait KeyValueStore: Send + Sync {
    /// キーの値を返す。キーが無ければ Ok(None)。
    fn get(&self, key: &StorageKey) -> Result<Option<String>, Error>;
    /// キーの値を上書きする
    fn set(&self, key: &StorageKey, value: &str) -> Result<(), Error>;
    /// キーを削除する。存在しないキーの削除は何もしない。
    fn remove(&self, key: &StorageKey) -> Result<(), Error>;
}
