//! 人間向けログ（LogRecord → stderr に要点のみ出力）と、複数 Log へのファンアウト
//!
//! -v / --verbose 指定時のみ配線される。fields の全量は出さず要点のみ（巨大化防止）。

use crate::error::Error;
use crate::ports::outbound::{Log, LogLevel, LogRecord};
use std::sync::Arc;

const FIELDS_SUMMARY_MAX: usize = 200;

/// fields の要点だけを短い文字列にする
fn fields_summary(record: &LogRecord) -> Option<String> {
    let fields = record.fields.as_ref()?;
    let s = serde_json::to_string(fields).ok()?;
    if s.chars().count() <= FIELDS_SUMMARY_MAX {
        return Some(s);
    }
    let truncated = s.chars().take(FIELDS_SUMMARY_MAX).collect::<String>();
    Some(format!("{}... (len={})", truncated, s.len()))
}

/// 1 レコードを 1 行の人間向け文字列にする
pub fn format_human(record: &LogRecord) -> String {
    let mut line = format!("[{}] {}", record.level.as_str(), record.message);
    if let Some(layer) = &record.layer {
        line.push_str(&format!(" layer={}", layer));
    }
    if let Some(summary) = fields_summary(record) {
        line.push(' ');
        line.push_str(&summary);
    }
    line
}

/// stderr に整形して出力する Log 実装
#[derive(Debug, Clone)]
pub struct StderrLog {
    min_level: LogLevel,
}

impl StderrLog {
    pub fn new() -> Self {
        Self {
            min_level: LogLevel::Debug,
        }
    }

    /// 指定レベルより詳細なレコードは出さない
    pub fn with_min_level(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    fn enabled(&self, level: LogLevel) -> bool {
        severity(level) <= severity(self.min_level)
    }
}

impl Default for StderrLog {
    fn default() -> Self {
        Self::new()
    }
}

fn severity(level: LogLevel) -> u8 {
    match level {
        LogLevel::Error => 0,
        LogLevel::Warn => 1,
        LogLevel::Info => 2,
        LogLevel::Debug => 3,
    }
}

impl Log for StderrLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        if self.enabled(record.level) {
            eprintln!("{}", format_human(record));
        }
        Ok(())
    }
}

/// 複数の Log に同じレコードを流す。1 つが失敗しても残りには書き、最初のエラーを返す。
pub struct CompositeLog {
    logs: Vec<Arc<dyn Log>>,
}

impl CompositeLog {
    pub fn new(logs: Vec<Arc<dyn Log>>) -> Self {
        Self { logs }
    }
}

impl Log for CompositeLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        let mut first_err = None;
        for log in &self.logs {
            if let Err(e) = log.log(record) {
                first_err.get_or_insert(e);
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
