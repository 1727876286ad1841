//! Ports & Adapters のポート定義
//!
//! - inbound: ドライバ（CLI）がアプリを呼び出すインターフェース
//! - outbound: アプリが外界（ジョーク API・履歴ストア・表示・設定）を使うための trait

pub mod inbound;
pub mod outbound;
