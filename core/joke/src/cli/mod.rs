//! CLI 層（引数解析と Command への写像）

pub mod args;

pub use args::{config_to_command, parse_args, print_completion, ParseOutcome};
