//! 配線: 標準アダプタで UseCase を組み立てる

use std::sync::Arc;

use common::adapter::{
    CompositeLog, FileJsonLog, FileKeyValueStore, StderrLog, StdEnvResolver, StdFileSystem,
};
use common::error::Error;
use common::ports::outbound::{EnvResolver, FileSystem, KeyValueStore, Log};

use crate::adapter::{HttpJokeSource, KvHistoryStore, StdResolveConfig};
use crate::ports::outbound::{HistoryStore, JokeSource, ResolveConfig};
use crate::usecase::app::JokeUseCase;
use crate::usecase::session::JokeSession;

/// main から使う組み立て済みアプリ
pub struct App {
    pub use_case: JokeUseCase,
    pub logger: Arc<dyn Log>,
}

/// ロガーだけを組み立てる（state ディレクトリが解決できなくても使えるよう分離）
pub fn wire_logger(env: &dyn EnvResolver, fs: Arc<dyn FileSystem>, verbose: bool) -> Arc<dyn Log> {
    let mut logs: Vec<Arc<dyn Log>> = Vec::new();
    if let Ok(dirs) = env.resolve_dirs() {
        logs.push(Arc::new(FileJsonLog::new(fs, dirs.log_path())));
    }
    if verbose {
        logs.push(Arc::new(StderrLog::new()));
    }
    Arc::new(CompositeLog::new(logs))
}

/// 配線: 標準アダプタで JokeUseCase を組み立てる（ここで履歴を読み込む）
pub fn wire_joke(verbose: bool) -> Result<App, Error> {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let env: Arc<dyn EnvResolver> = Arc::new(StdEnvResolver);
    let logger = wire_logger(env.as_ref(), Arc::clone(&fs), verbose);

    let config = StdResolveConfig::new(Arc::clone(&env), Arc::clone(&fs)).resolve()?;
    let dirs = env.resolve_dirs()?;

    let kv: Arc<dyn KeyValueStore> =
        Arc::new(FileKeyValueStore::new(Arc::clone(&fs), dirs.storage_path()));
    let store: Arc<dyn HistoryStore> = Arc::new(KvHistoryStore::new(kv, Arc::clone(&logger)));
    let source: Arc<dyn JokeSource> = Arc::new(HttpJokeSource::new(&config, Arc::clone(&logger))?);

    let session = JokeSession::open(source, store, Arc::clone(&logger), config.max_attempts)?;
    Ok(App {
        use_case: JokeUseCase::new(session, Arc::clone(&logger)),
        logger,
    })
}
