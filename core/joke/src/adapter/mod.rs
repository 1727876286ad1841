//! 標準アダプタ（ports::outbound の実装）

pub(crate) mod http_joke_source;
pub(crate) mod kv_history_store;
pub(crate) mod recording_view;
pub(crate) mod resolve_config;
pub(crate) mod stub_joke_source;
pub(crate) mod terminal_view;

pub(crate) use http_joke_source::HttpJokeSource;
pub(crate) use kv_history_store::KvHistoryStore;
pub(crate) use resolve_config::StdResolveConfig;
pub(crate) use terminal_view::TerminalView;
