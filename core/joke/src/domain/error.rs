//! ジョーク取得・履歴操作のエラー（ドメイン層）

use common::error::Error;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AcquireError {
    /// 1 回の取得で通信・ステータス・本文パースのいずれかが失敗した
    #[error("Failed to fetch joke: {0}")]
    Fetch(String),
    /// 上限回数まで既出のジョークしか返らなかった
    #[error("No new joke after {attempts} attempts")]
    ExhaustedRetries { attempts: u32 },
    /// 別の取得・リセットが実行中
    #[error("Another joke request is already in progress")]
    Busy,
    /// 履歴の永続化に失敗した
    #[error("Failed to store joke history: {0}")]
    Store(Error),
}

impl AcquireError {
    /// ユーザーに固定のエラーメッセージを見せるべき失敗か
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            AcquireError::Fetch(_) | AcquireError::ExhaustedRetries { .. }
        )
    }
}

impl From<Error> for AcquireError {
    fn from(e: Error) -> Self {
        AcquireError::Store(e)
    }
}

impl From<AcquireError> for Error {
    fn from(e: AcquireError) -> Self {
        match e {
            AcquireError::Store(inner) => inner,
            AcquireError::Fetch(_) | AcquireError::ExhaustedRetries { .. } => {
                Error::http(e.to_string())
            }
            AcquireError::Busy => Error::system(e.to_string()),
        }
    }
}
