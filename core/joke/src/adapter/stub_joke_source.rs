//! テスト用: 台本どおりの応答を返す JokeSource 実装


#[cfg(test)]
pub use stub::StubJokeSource;
