//! ジョーク（setup と punchline の組）
//!
//! 等価性は構造的: 両フィールドが完全一致（大文字小文字を区別）するときのみ等しい。
//! API が返す id / type は重複判定に使わないため保持しない。

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Joke {
    pub setup: String,
    pub punchline: String,
}

impl Joke {
    #[allow(dead_code)] // テストで使用
    pub fn new(setup: impl Into<String>, punchline: impl Into<String>) -> Self {
        Self {
            setup: setup.into(),
            punchline: punchline.into(),
        }
    }
}
