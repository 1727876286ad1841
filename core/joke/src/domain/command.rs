//! joke コマンドの enum（Command Pattern）
//!
//! CLI の解析結果を実行モードに写像し、main でディスパッチする。

/// joke の実行モード
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JokeCommand {
    /// 未表示のジョークを 1 つ取得して表示（既定）
    Generate,
    /// 履歴を消去する
    Reset,
    /// 表示済みジョークの一覧
    History,
}

impl JokeCommand {
    /// ログ用のコマンド名
    pub fn name(&self) -> &'static str {
        match self {
            JokeCommand::Generate => "generate",
            JokeCommand::Reset => "reset",
            JokeCommand::History => "history",
        }
    }
}
