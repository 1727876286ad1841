//! 設定読み込みの標準アダプタ（config/config.json + 環境変数）

use std::sync::Arc;

use common::error::Error;
use common::ports::outbound::{EnvResolver, FileSystem};

use crate::domain::JokeConfig;
use crate::ports::outbound::ResolveConfig;

/// 標準実装（EnvResolver + FileSystem）
pub struct StdResolveConfig {
    env: Arc<dyn EnvResolver>,
    fs: Arc<dyn FileSystem>,
}

impl StdResolveConfig {
    pub fn new(env: Arc<dyn EnvResolver>, fs: Arc<dyn FileSystem>) -> Self {
        Self { env, fs }
    }
}

impl ResolveConfig for StdResolveConfig {
    fn resolve(&self) -> Result<JokeConfig, Error> {
        let path = self.env.resolve_dirs()?.config_path();
        let base = if self.fs.is_file(&path) {
            let contents = self.fs.read_to_string(&path)?;
            JokeConfig::parse_json(&contents)
                .map_err(|e| Error::invalid_argument(format!("{}: {}", path.display(), e)))?
        } else {
            JokeConfig::default()
        };
        base.apply_env(|name| self.env.var(name))?.validate()
    }
}
