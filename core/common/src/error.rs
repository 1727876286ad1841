//! エラーハンドリング
//!
//! 全レイヤーで共有するエラー型。CLI 境界で終了コードに変換する。

/// エラー型
///
/// 各バリアントは人間向けメッセージを持ち、`exit_code()` で sysexits 相当の終了コードを返す。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// ファイル I/O の失敗
    #[error("{0}")]
    Io(String),
    /// JSON のシリアライズ・パース失敗
    #[error("JSON error: {0}")]
    Json(String),
    /// 環境変数の解決失敗
    #[error("{0}")]
    Env(String),
    /// 引数・設定値の不正
    #[error("{0}")]
    InvalidArgument(String),
    /// HTTP 通信の失敗
    #[error("HTTP error: {0}")]
    Http(String),
    /// その他の内部エラー
    #[error("{0}")]
    System(String),
}

impl Error {
    pub fn io_msg(msg: impl Into<String>) -> Self {
        Error::Io(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Error::Json(msg.into())
    }

    pub fn env(msg: impl Into<String>) -> Self {
        Error::Env(msg.into())
    }

    /// 引数不正エラー
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    pub fn http(msg: impl Into<String>) -> Self {
        Error::Http(msg.into())
    }

    /// システムエラー
    pub fn system(msg: impl Into<String>) -> Self {
        Error::System(msg.into())
    }

    /// 使い方の誤り（main で Usage を表示する）
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    /// プロセス終了コード（sysexits.h 準拠）
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidArgument(_) => 64,
            Error::Env(_) => 78,
            Error::Json(_) => 65,
            Error::Io(_) | Error::Http(_) => 74,
            Error::System(_) => 70,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_helpers() {
        let err = Error::invalid_argument("test");
        assert_eq!(err.to_string(), "test");
        assert_eq!(err.exit_code(), 64);
        assert!(err.is_usage());

        let err = Error::system("test");
        assert_eq!(err.to_string(), "test");
        assert_eq!(err.exit_code(), 70);
        assert!(!err.is_usage());
    }

    #[test]
    fn test_error_display_prefix() {
        assert_eq!(Error::json("bad").to_string(), "JSON error: bad");
        assert_eq!(Error::http("timeout").to_string(), "HTTP error: timeout");
        assert_eq!(Error::io_msg("x").exit_code(), 74);
    }
}
