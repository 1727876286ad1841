//! Outbound ポート: アプリが外界（FS・環境変数・ログ・キー・バリューストア）を使うための trait

pub mod env_resolver;
pub mod fs;
pub mod kv_store;
pub mod log;

pub use env_resolver::EnvResolver;
pub use fs::{FileMetadata, FileSystem};
pub use kv_store::KeyValueStore;
pub use log::{now_iso8601, Log, LogLevel, LogRecord};
