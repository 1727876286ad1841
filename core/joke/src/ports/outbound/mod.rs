//! Outbound ポート: アプリが外界を使うための trait

pub mod history_store;
pub mod joke_source;
pub mod joke_view;
pub mod resolve_config;

pub use history_store::HistoryStore;
pub use joke_source::JokeSource;
pub use joke_view::JokeView;
pub use resolve_config::ResolveConfig;
