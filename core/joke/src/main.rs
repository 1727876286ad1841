mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::process;

use common::error::Error;
use common::ports::outbound::{LogLevel, LogRecord};
use serde_json::json;

use adapter::TerminalView;
use cli::{config_to_command, parse_args, print_completion, ParseOutcome};
use domain::JokeCommand;
use ports::inbound::UseCaseRunner;
use wiring::{wire_joke, App};

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl UseCaseRunner for Runner {
    fn run(&self, command: JokeCommand) -> Result<i32, Error> {
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "cli", "lifecycle", "command started")
                .with_field("command", json!(command.name())),
        );

        let mut view = TerminalView::stdio();
        let result = match command {
            JokeCommand::Generate => self.app.use_case.generate(&mut view),
            JokeCommand::Reset => self.app.use_case.reset(&mut view),
            JokeCommand::History => self.app.use_case.list(&mut view),
        };

        let code = match &result {
            Ok(code) => *code,
            Err(e) => e.exit_code(),
        };
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "cli", "lifecycle", "command finished")
                .with_field("command", json!(command.name()))
                .with_field("exit_code", json!(code)),
        );
        if let Err(ref e) = result {
            let _ = self
                .app
                .logger
                .log(&LogRecord::new(LogLevel::Error, "cli", "error", e.to_string()));
        }
        result
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("joke: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::Help => {
            print_help();
            return Ok(0);
        }
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    let command = config_to_command(&config);
    let runner = Runner {
        app: wire_joke(config.verbose)?,
    };
    runner.run(command)
}

fn print_usage() {
    eprintln!("Usage: joke [options] [generate|reset|history]");
}

fn print_help() {
    println!("Usage: joke [options] [generate|reset|history]");
    println!("Commands:");
    println!("  generate                      Fetch and show a joke you have not seen yet (default)");
    println!("  reset                         Forget which jokes have been shown");
    println!("  history                       List the jokes shown so far");
    println!("Options:");
    println!("  -h, --help                    Show this help message");
    println!("  -v, --verbose                 Also print log records to stderr");
    println!("  --generate <shell>            Generate shell completion script (bash, zsh, fish, ...)");
    println!();
    println!("Environment:");
    println!("  JOKE_HOME          Home directory. Config: $JOKE_HOME/config/config.json; state: $JOKE_HOME/state/");
    println!("                     If unset, $XDG_CONFIG_HOME/joke and $XDG_STATE_HOME/joke are used.");
    println!("  JOKE_ENDPOINT      Joke API URL (default: https://official-joke-api.appspot.com/random_joke)");
    println!("  JOKE_MAX_ATTEMPTS  Give up after this many already-seen jokes in a row (default: 50)");
    println!("  JOKE_TIMEOUT_SECS  Per-request timeout in seconds (default: 10)");
    println!();
    println!("Examples:");
    println!("  joke");
    println!("  joke history");
    println!("  joke reset");
}
