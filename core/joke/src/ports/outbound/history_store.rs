//! 表示済み履歴の永続化 Outbound ポート
//!
//! 固定キー 1 つに履歴全体を保存する。トランザクションは無く last-write-wins。

use crate::domain::History;
use common::error::Error;

pub trait HistoryStore: Send + Sync {
    /// 保存済み履歴を読む。キーが無い・値が壊れている場合は空の履歴。
    fn load(&self) -> Result<History, Error>;
    /// 固定キーの値を履歴全体で上書きする
    fn save(&self, history: &History) -> Result<(), Error>;
    /// 固定キーを削除する
    fn clear(&self) -> Result<(), Error>;
}
