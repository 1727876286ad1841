//! 表示済みジョークの履歴（挿入順）
//!
//! コンテナ自体は一意性を強制しない。重複排除は取得ループが追加前に行う。

use crate::domain::Joke;
use serde::{Deserialize, Serialize};

/// 表示済みジョークの列
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    jokes: Vec<Joke>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// 構造的に一致するジョークが既にあるか
    pub fn contains(&self, joke: &Joke) -> bool {
        self.jokes.iter().any(|j| j == joke)
    }

    /// 末尾に追加（既存の順序は保つ）
    pub fn push(&mut self, joke: Joke) {
        self.jokes.push(joke);
    }

    pub fn clear(&mut self) {
        self.jokes.clear();
    }

    #[allow(dead_code)] // テストで使用
    pub fn jokes(&self) -> &[Joke] {
        &self.jokes
    }

    pub fn len(&self) -> usize {
        self.jokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jokes.is_empty()
    }

    #[allow(dead_code)] // テストで使用
    pub fn last(&self) -> Option<&Joke> {
        self.jokes.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Joke> {
        self.jokes.iter()
    }

    /// JSON 配列 `[{"setup":..,"punchline":..}, ...]` に直列化する
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

impl From<Vec<Joke>> for History {
    fn from(jokes: Vec<Joke>) -> Self {
        Self { jokes }
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Joke;
    type IntoIter = std::slice::Iter<'a, Joke>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_preserves_order_and_allows_duplicates() {
        let mut h = History::new();
        h.push(Joke::new("S1", "P1"));
        h.push(Joke::new("S2", "P2"));
        h.push(Joke::new("S1", "P1"));
        assert_eq!(h.len(), 3);
        assert_eq!(h.jokes()[1], Joke::new("S2", "P2"));
        assert_eq!(h.last(), Some(&Joke::new("S1", "P1")));
    }

    #[test]
    fn test_contains_is_structural() {
        let h = History::from(vec![Joke::new("S1", "P1")]);
        assert!(h.contains(&Joke::new("S1", "P1")));
        assert!(!h.contains(&Joke::new("S1", "P2")));
    }

    #[test]
    fn test_json_layout_is_plain_array() {
        let h = History::from(vec![Joke::new("S1", "P1")]);
        assert_eq!(h.to_json().unwrap(), r#"[{"setup":"S1","punchline":"P1"}]"#);
        assert_eq!(History::from_json("[]").unwrap(), History::new());
        assert!(History::from_json(r#"{"setup":"S1"}"#).is_err());
    }

    #[test]
    fn test_clear() {
        let mut h = History::from(vec![Joke::new("S1", "P1")]);
        h.clear();
        assert!(h.is_empty());
    }
}
