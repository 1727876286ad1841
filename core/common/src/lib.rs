//! joke 共通ライブラリ
//!
//! `joke` コマンドが使うエラー型・ポート・標準アダプタを提供します。

/// エラーハンドリング
pub mod error;

/// ドメイン型（実行時ディレクトリなど）
pub mod domain;

/// Ports & Adapters のポート定義
pub mod ports;

/// 外界の I/O を trait で抽象化した標準実装
pub mod adapter;
