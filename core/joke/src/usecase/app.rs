//! JokeUseCase: セッションの操作結果を表示ポートへ流し、終了コードを決める

use std::sync::Arc;

use common::error::Error;
use common::ports::outbound::{Log, LogLevel, LogRecord};
use serde_json::json;

use crate::ports::outbound::JokeView;
use crate::usecase::session::JokeSession;

/// 取得失敗を表示した後の終了コード（EX_IOERR）
pub const EXIT_FETCH_FAILED: i32 = 74;

pub struct JokeUseCase {
    session: JokeSession,
    log: Arc<dyn Log>,
}

impl JokeUseCase {
    pub fn new(session: JokeSession, log: Arc<dyn Log>) -> Self {
        Self { session, log }
    }

    /// 未表示のジョークを取得して表示する
    ///
    /// 取得失敗（上限到達を含む）は固定のエラー文言で表示し、Err にはしない。
    /// ローディング表示は結果にかかわらず消す。
    pub fn generate(&self, view: &mut dyn JokeView) -> Result<i32, Error> {
        view.show_loading();
        let result = self.session.acquire();
        view.hide_loading();

        match result {
            Ok(joke) => {
                view.show_joke(&joke);
                Ok(0)
            }
            Err(e) if e.is_fetch_failure() => {
                let _ = self.log.log(
                    &LogRecord::new(LogLevel::Error, "usecase", "error", e.to_string())
                        .with_field("command", json!("generate")),
                );
                view.show_error();
                Ok(EXIT_FETCH_FAILED)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// 履歴を消去して通知する
    pub fn reset(&self, view: &mut dyn JokeView) -> Result<i32, Error> {
        self.session.reset()?;
        view.acknowledge_reset();
        Ok(0)
    }

    /// 表示済みジョークを一覧する
    pub fn list(&self, view: &mut dyn JokeView) -> Result<i32, Error> {
        view.show_history(&self.session.history()?);
        Ok(0)
    }

    #[cfg(test)]
    pub fn session(&self) -> &JokeSession {
        &self.session
    }
}
