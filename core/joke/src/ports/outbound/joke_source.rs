//! ジョーク取得元 Outbound ポート
//!
//! 1 回の呼び出しで 1 つのジョークを返すか失敗する。引数・ページングは無い。

use crate::domain::{AcquireError, Joke};

pub trait JokeSource: Send + Sync {
    /// ジョークを 1 つ取得する。通信・ステータス・本文の失敗はすべて AcquireError::Fetch。
    fn fetch(&self) -> Result<Joke, AcquireError>;
}
