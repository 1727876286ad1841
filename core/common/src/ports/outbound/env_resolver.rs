//! 環境変数解決 Outbound ポート
//!
//! 設定・状態ディレクトリを環境変数から解決する。
//! usecase / adapter はこの trait 経由でのみ環境変数にアクセスする。

use crate::domain::{Dirs, HomeDir};
use crate::error::Error;
use std::path::PathBuf;

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用のモックなど。
pub trait EnvResolver: Send + Sync {
    /// 空でない環境変数の値を返す（未設定・空文字は None）
    fn var(&self, name: &str) -> Option<String>;

    /// JOKE_HOME が設定されていればそれを返す
    fn home_dir_from_env(&self) -> Option<HomeDir> {
        self.var("JOKE_HOME").map(HomeDir::new)
    }

    /// config / state ディレクトリを解決する
    ///
    /// 優先順位:
    /// 1. JOKE_HOME（設定されていれば $JOKE_HOME/config と $JOKE_HOME/state）
    /// 2. $XDG_CONFIG_HOME/joke と $XDG_STATE_HOME/joke
    /// 3. $HOME/.config/joke と $HOME/.local/state/joke
    fn resolve_dirs(&self) -> Result<Dirs, Error> {
        if let Some(home) = self.home_dir_from_env() {
            return Ok(Dirs {
                config_dir: home.join("config"),
                state_dir: home.join("state"),
            });
        }

        let home = self.var("HOME").map(PathBuf::from);
        let config_base = self
            .var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| home.as_ref().map(|h| h.join(".config")))
            .ok_or_else(|| Error::env("HOME is not set"))?;
        let state_base = self
            .var("XDG_STATE_HOME")
            .map(PathBuf::from)
            .or_else(|| home.as_ref().map(|h| h.join(".local").join("state")))
            .ok_or_else(|| Error::env("HOME is not set"))?;

        Ok(Dirs {
            config_dir: config_base.join("joke"),
            state_dir: state_base.join("joke"),
        })
    }
}
