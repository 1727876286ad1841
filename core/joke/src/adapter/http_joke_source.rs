//! HTTP GET でランダムジョーク API を叩く JokeSource 実装

use std::sync::Arc;
use std::time::Duration;

use common::error::Error;
use common::ports::outbound::{Log, LogLevel, LogRecord};
use serde_json::json;

use crate::domain::{AcquireError, Joke, JokeConfig};
use crate::ports::outbound::JokeSource;

/// エラーメッセージに含める本文の最大文字数
const BODY_SNIPPET_MAX: usize = 200;

pub struct HttpJokeSource {
    client: reqwest::blocking::Client,
    endpoint: String,
    log: Arc<dyn Log>,
}

impl HttpJokeSource {
    pub fn new(config: &JokeConfig, log: Arc<dyn Log>) -> Result<Self, Error> {
        let client = client_builder(config)
            .build()
            .map_err(|e| Error::http(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self::with_client(client, config.endpoint.clone(), log))
    }

    pub(crate) fn with_client(
        client: reqwest::blocking::Client,
        endpoint: String,
        log: Arc<dyn Log>,
    ) -> Self {
        Self {
            client,
            endpoint,
            log,
        }
    }
}

/// 設定のタイムアウトと User-Agent を適用した ClientBuilder
pub(crate) fn client_builder(config: &JokeConfig) -> reqwest::blocking::ClientBuilder {
    reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(concat!("joke/", env!("CARGO_PKG_VERSION")))
}

fn snippet(body: &str) -> String {
    if body.chars().count() <= BODY_SNIPPET_MAX {
        return body.to_string();
    }
    let truncated: String = body.chars().take(BODY_SNIPPET_MAX).collect();
    format!("{}...", truncated)
}

/// レスポンス本文から setup / punchline を取り出す（それ以外のフィールドは無視）
pub(crate) fn parse_joke_body(body: &str) -> Result<Joke, AcquireError> {
    serde_json::from_str::<Joke>(body).map_err(|e| {
        AcquireError::Fetch(format!("Malformed joke response ({}): {}", e, snippet(body)))
    })
}

impl JokeSource for HttpJokeSource {
    fn fetch(&self) -> Result<Joke, AcquireError> {
        let _ = self.log.log(
            &LogRecord::new(LogLevel::Debug, "adapter", "fetch", "GET joke")
                .with_field("endpoint", json!(self.endpoint)),
        );
        let response = self
            .client
            .get(&self.endpoint)
            .header("Accept", "application/json")
            .send()
            .map_err(|e| AcquireError::Fetch(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| AcquireError::Fetch(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(AcquireError::Fetch(format!(
                "HTTP {}: {}",
                status,
                snippet(&body)
            )));
        }

        parse_joke_body(&body)
    }
}
