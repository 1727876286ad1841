//! 実行設定（取得先エンドポイント・試行上限・タイムアウト）
//!
//! config/config.json から読み込み、環境変数で上書きする。ファイルが無ければ既定値。

use common::error::Error;
use serde::Deserialize;

pub const DEFAULT_ENDPOINT: &str = "https://official-joke-api.appspot.com/random_joke";
pub const DEFAULT_MAX_ATTEMPTS: u32 = 50;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JokeConfig {
    /// ランダムジョーク API の URL
    pub endpoint: String,
    /// 既出ジョークが続いたときの最大取得回数（1 以上）
    pub max_attempts: u32,
    /// 1 リクエストのタイムアウト秒（1 以上）
    pub timeout_secs: u64,
}

impl Default for JokeConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct JokeConfigRaw {
    endpoint: Option<String>,
    max_attempts: Option<u32>,
    timeout_secs: Option<u64>,
}

impl JokeConfig {
    /// config.json を既定値に重ねて読む
    pub fn parse_json(json: &str) -> Result<Self, serde_json::Error> {
        let raw: JokeConfigRaw = serde_json::from_str(json)?;
        let d = Self::default();
        Ok(Self {
            endpoint: raw.endpoint.unwrap_or(d.endpoint),
            max_attempts: raw.max_attempts.unwrap_or(d.max_attempts),
            timeout_secs: raw.timeout_secs.unwrap_or(d.timeout_secs),
        })
    }

    /// 環境変数 JOKE_ENDPOINT / JOKE_MAX_ATTEMPTS / JOKE_TIMEOUT_SECS で上書きする
    pub fn apply_env(mut self, var: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        if let Some(endpoint) = var("JOKE_ENDPOINT") {
            self.endpoint = endpoint;
        }
        if let Some(s) = var("JOKE_MAX_ATTEMPTS") {
            self.max_attempts = s.trim().parse().map_err(|_| {
                Error::invalid_argument(format!("JOKE_MAX_ATTEMPTS must be a positive integer: '{}'", s))
            })?;
        }
        if let Some(s) = var("JOKE_TIMEOUT_SECS") {
            self.timeout_secs = s.trim().parse().map_err(|_| {
                Error::invalid_argument(format!("JOKE_TIMEOUT_SECS must be a positive integer: '{}'", s))
            })?;
        }
        Ok(self)
    }

    pub fn validate(self) -> Result<Self, Error> {
        if self.endpoint.trim().is_empty() {
            return Err(Error::invalid_argument("endpoint must not be empty"));
        }
        if self.max_attempts == 0 {
            return Err(Error::invalid_argument("max_attempts must be at least 1"));
        }
        if self.timeout_secs == 0 {
            return Err(Error::invalid_argument("timeout_secs must be at least 1"));
        }
        Ok(self)
    }
}
