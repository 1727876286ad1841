//! 端末向けの JokeView 実装
//!
//! ジョーク・エラー・通知は stdout、ローディング表示は stderr（端末のときのみ）に出す。

use std::io::Write;

use crate::domain::{History, Joke};
use crate::ports::outbound::joke_view::{ERROR_PUNCHLINE, ERROR_SETUP, RESET_ACK};
use crate::ports::outbound::JokeView;

const LOADING_TEXT: &str = "...";

pub struct TerminalView<O: Write, E: Write> {
    out: O,
    err: E,
    show_progress: bool,
    loading: bool,
}

impl TerminalView<std::io::Stdout, std::io::Stderr> {
    /// stdout / stderr へ出力する。ローディング表示は stderr が端末のときのみ。
    pub fn stdio() -> Self {
        use std::io::IsTerminal;
        let err = std::io::stderr();
        let show_progress = err.is_terminal();
        Self::new(std::io::stdout(), err, show_progress)
    }
}

impl<O: Write, E: Write> TerminalView<O, E> {
    pub fn new(out: O, err: E, show_progress: bool) -> Self {
        Self {
            out,
            err,
            show_progress,
            loading: false,
        }
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (O, E) {
        (self.out, self.err)
    }
}

impl<O: Write, E: Write> JokeView for TerminalView<O, E> {
    fn show_loading(&mut self) {
        self.loading = true;
        if self.show_progress {
            let _ = write!(self.err, "{}", LOADING_TEXT);
            let _ = self.err.flush();
        }
    }

    fn hide_loading(&mut self) {
        if self.loading && self.show_progress {
            // 行頭に戻ってローディング表示を消す
            let _ = write!(self.err, "\r\x1b[K");
            let _ = self.err.flush();
        }
        self.loading = false;
    }

    fn show_joke(&mut self, joke: &Joke) {
        let _ = writeln!(self.out, "{}", joke.setup);
        let _ = writeln!(self.out, "{}", joke.punchline);
    }

    fn show_error(&mut self) {
        let _ = writeln!(self.out, "{}", ERROR_SETUP);
        let _ = writeln!(self.out, "{}", ERROR_PUNCHLINE);
    }

    fn acknowledge_reset(&mut self) {
        let _ = writeln!(self.out, "{}", RESET_ACK);
    }

    fn show_history(&mut self, history: &History) {
        if history.is_empty() {
            let _ = writeln!(self.out, "No jokes shown yet.");
            return;
        }
        for (i, joke) in history.iter().enumerate() {
            let _ = writeln!(self.out, "{:>3}. {}", i + 1, joke.setup);
            let _ = writeln!(self.out, "     {}", joke.punchline);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(show_progress: bool) -> TerminalView<Vec<u8>, Vec<u8>> {
        TerminalView::new(Vec::new(), Vec::new(), show_progress)
    }

    fn text(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_show_joke_prints_setup_then_punchline() {
        let mut v = view(false);
        v.show_loading();
        v.hide_loading();
        v.show_joke(&Joke::new("S1", "P1"));
        let (out, err) = v.into_parts();
        assert_eq!(text(out), "S1\nP1\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_show_error_replaces_both_regions() {
        let mut v = view(false);
        v.show_error();
        let (out, _) = v.into_parts();
        assert_eq!(
            text(out),
            "Oops!\nFailed to fetch a joke. Please try again!\n"
        );
    }

    #[test]
    fn test_loading_indicator_on_terminal() {
        let mut v = view(true);
        v.show_loading();
        v.hide_loading();
        v.hide_loading();
        let (_, err) = v.into_parts();
        assert_eq!(text(err), "...\r\x1b[K");
    }

    #[test]
    fn test_history_listing() {
        let mut v = view(false);
        v.show_history(&History::new());
        v.show_history(&History::from(vec![Joke::new("S1", "P1")]));
        v.acknowledge_reset();
        let (out, _) = v.into_parts();
        assert_eq!(
            text(out),
            "No jokes shown yet.\n  1. S1\n     P1\nJoke history reset!\n"
        );
    }
}
