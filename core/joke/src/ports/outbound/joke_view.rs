//! 表示 Outbound ポート
//!
//! setup / punchline の表示領域とローディング表示、リセット完了の通知を持つ UI。

use crate::domain::{History, Joke};

/// 取得失敗時に setup 領域へ出す文言
pub const ERROR_SETUP: &str = "Oops!";
/// 取得失敗時に punchline 領域へ出す文言
pub const ERROR_PUNCHLINE: &str = "Failed to fetch a joke. Please try again!";
/// リセット完了の通知
pub const RESET_ACK: &str = "Joke history reset!";

pub trait JokeView {
    fn show_loading(&mut self);
    /// 成否にかかわらず取得の後に必ず呼ばれる
    fn hide_loading(&mut self);
    fn show_joke(&mut self, joke: &Joke);
    /// setup / punchline の両方を固定のエラー文言で置き換える
    fn show_error(&mut self);
    fn acknowledge_reset(&mut self);
    fn show_history(&mut self, history: &History);
}
