//! アダプター（外界の I/O を trait で抽象化）
//!
//! usecase はポートの trait 経由でのみファイル・環境変数・ログ・ストアに触れる。
//! 実装は標準実装（Std* / File*）やテスト用の実装（Memory* / Noop*）を注入する。

pub mod file_json_log;
pub mod file_kv_store;
pub mod human_log;
pub mod memory_kv_store;
pub mod std_env_resolver;
pub mod std_fs;

pub use file_json_log::{FileJsonLog, NoopLog};
pub use file_kv_store::FileKeyValueStore;
pub use human_log::{CompositeLog, StderrLog};
pub use memory_kv_store::MemoryKeyValueStore;
pub use std_env_resolver::StdEnvResolver;
pub use std_fs::StdFileSystem;
