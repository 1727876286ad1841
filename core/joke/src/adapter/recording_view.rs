//! テスト用: 表示呼び出しを記録する JokeView 実装

#[cfg(test)]
mod recording {
    use crate::domain::{History, Joke};
    use crate::ports::outbound::JokeView;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum ViewEvent {
        Loading,
        LoadingHidden,
        Joke(Joke),
        Error,
        ResetAcknowledged,
        History(usize),
    }

    #[derive(Debug, Default)]
    pub struct RecordingView {
        pub events: Vec<ViewEvent>,
    }

    impl RecordingView {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl JokeView for RecordingView {
        fn show_loading(&mut self) {
            self.events.push(ViewEvent::Loading);
        }

        fn hide_loading(&mut self) {
            self.events.push(ViewEvent::LoadingHidden);
        }

        fn show_joke(&mut self, joke: &Joke) {
            self.events.push(ViewEvent::Joke(joke.clone()));
        }

        fn show_error(&mut self) {
            self.events.push(ViewEvent::Error);
        }

        fn acknowledge_reset(&mut self) {
            self.events.push(ViewEvent::ResetAcknowledged);
        }

        fn show_history(&mut self, history: &History) {
            self.events.push(ViewEvent::History(history.len()));
        }
    }
}

#[cfg(test)]
pub use recording::{RecordingView, ViewEvent};
