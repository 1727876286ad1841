use crate::domain::JokeCommand;
use clap::builder::{ArgAction, PossibleValuesParser};
use clap::value_parser;
use clap_complete::Shell;
use common::error::Error;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    /// -v / --verbose: ログを stderr にも出す
    pub verbose: bool,
    /// generate / reset / history（省略時は generate）
    pub command: Option<String>,
}

/// 解析結果: 通常の Config / ヘルプ表示 / 補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    /// -h / --help（他の引数より優先。配線せずに表示して終了）
    Help,
    GenerateCompletion(Shell),
}

pub(crate) fn build_clap_command() -> clap::Command {
    clap::Command::new("joke")
        .about("Show a random joke you have not seen yet")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Also print log records to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("command")
                .index(1)
                .help("generate (default), reset, or history")
                .value_parser(PossibleValuesParser::new(["generate", "reset", "history"]))
                .num_args(0..=1),
        )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    Config {
        verbose: matches.get_flag("verbose"),
        command: matches.get_one::<String>("command").cloned(),
    }
}

/// Config を実行モードに写像する
pub fn config_to_command(config: &Config) -> JokeCommand {
    match config.command.as_deref() {
        Some("reset") => JokeCommand::Reset,
        Some("history") => JokeCommand::History,
        _ => JokeCommand::Generate,
    }
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    let matches = build_clap_command()
        .try_get_matches()
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    Ok(outcome_from_matches(&matches))
}

fn outcome_from_matches(matches: &clap::ArgMatches) -> ParseOutcome {
    if matches.get_flag("help") {
        return ParseOutcome::Help;
    }
    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return ParseOutcome::GenerateCompletion(shell);
    }
    ParseOutcome::Config(matches_to_config(matches))
}

/// テスト用: 引数スライスから解析する
#[cfg(test)]
pub fn parse_args_from(args: &[&str]) -> Result<ParseOutcome, Error> {
    let matches = build_clap_command()
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    Ok(outcome_from_matches(&matches))
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, "joke", &mut std::io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(args: &[&str]) -> Config {
        match parse_args_from(args).unwrap() {
            ParseOutcome::Config(c) => c,
            other => panic!("expected config, got {:?}", other),
        }
    }

    #[test]
    fn test_no_args_is_generate() {
        let c = config(&["joke"]);
        assert_eq!(c, Config::default());
        assert_eq!(config_to_command(&c), JokeCommand::Generate);
    }

    #[test]
    fn test_subcommands() {
        assert_eq!(config_to_command(&config(&["joke", "generate"])), JokeCommand::Generate);
        assert_eq!(config_to_command(&config(&["joke", "reset"])), JokeCommand::Reset);
        assert_eq!(config_to_command(&config(&["joke", "history"])), JokeCommand::History);
    }

    #[test]
    fn test_help_takes_precedence() {
        assert!(matches!(
            parse_args_from(&["joke", "-h", "reset"]).unwrap(),
            ParseOutcome::Help
        ));
        assert!(matches!(
            parse_args_from(&["joke", "--help", "--generate", "zsh"]).unwrap(),
            ParseOutcome::Help
        ));
    }

    #[test]
    fn test_verbose_flag() {
        assert!(config(&["joke", "--verbose"]).verbose);
        assert!(config(&["joke", "-v", "history"]).verbose);
    }

    #[test]
    fn test_unknown_command_is_usage_error() {
        let err = parse_args_from(&["joke", "tell"]).unwrap_err();
        assert!(err.is_usage());
        assert_eq!(err.exit_code(), 64);
    }

    #[test]
    fn test_generate_completion() {
        match parse_args_from(&["joke", "--generate", "bash"]).unwrap() {
            ParseOutcome::GenerateCompletion(shell) => assert_eq!(shell, Shell::Bash),
            other => panic!("expected completion, got {:?}", other),
        }
    }
}
