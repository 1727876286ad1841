//! 実行時ディレクトリ（XDG / JOKE_HOME 解決結果）
//!
//! EnvResolver::resolve_dirs() で取得し、ストレージ・ログ・設定のパス計算に使う。

use std::path::PathBuf;

const STORAGE_FILENAME: &str = "storage.json";
const CONFIG_FILENAME: &str = "config.json";
const LOG_FILENAME: &str = "joke.jsonl";

/// 解決済みの config / state ディレクトリ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dirs {
    pub config_dir: PathBuf,
    pub state_dir: PathBuf,
}

impl Dirs {
    /// キー・バリューストアのファイル（state/storage.json）
    pub fn storage_path(&self) -> PathBuf {
        self.state_dir.join(STORAGE_FILENAME)
    }

    /// 設定ファイル（config/config.json）
    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILENAME)
    }

    /// ログ格納ディレクトリ
    pub fn logs_dir(&self) -> PathBuf {
        self.state_dir.join("logs")
    }

    pub fn log_path(&self) -> PathBuf {
        self.logs_dir().join(LOG_FILENAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dirs_paths() {
        let dirs = Dirs {
            config_dir: PathBuf::from("/h/config"),
            state_dir: PathBuf::from("/h/state"),
        };
        assert_eq!(dirs.storage_path(), PathBuf::from("/h/state/storage.json"));
        assert_eq!(dirs.config_path(), PathBuf::from("/h/config/config.json"));
        assert_eq!(dirs.log_path(), PathBuf::from("/h/state/logs/joke.jsonl"));
    }
}
