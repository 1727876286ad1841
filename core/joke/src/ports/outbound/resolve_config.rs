//! 設定解決 Outbound ポート

use crate::domain::JokeConfig;
use common::error::Error;

/// config.json と環境変数から JokeConfig を組み立てる能力
pub trait ResolveConfig: Send + Sync {
    fn resolve(&self) -> Result<JokeConfig, Error>;
}
