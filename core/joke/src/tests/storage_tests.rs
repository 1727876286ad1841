//! storage.json を介した履歴の永続化（セッションをまたぐ）のテスト

use std::path::Path;
use std::sync::Arc;

use common::adapter::{FileKeyValueStore, NoopLog, StdFileSystem};

use crate::adapter::stub_joke_source::StubJokeSource;
use crate::adapter::KvHistoryStore;
use crate::domain::Joke;
use crate::usecase::session::JokeSession;

fn open_session(storage: &Path, source: StubJokeSource) -> JokeSession {
    let kv = Arc::new(FileKeyValueStore::new(Arc::new(StdFileSystem), storage));
    JokeSession::open(
        Arc::new(source),
        Arc::new(KvHistoryStore::new(kv, Arc::new(NoopLog))),
        Arc::new(NoopLog),
        50,
    )
    .unwrap()
}

#[test]
fn test_history_survives_new_session() {
    let tmp = tempfile::tempdir().unwrap();
    let storage = tmp.path().join("state").join("storage.json");

    let first = open_session(&storage, StubJokeSource::jokes(&[("S1", "P1")]));
    first.acquire().unwrap();
    drop(first);

    let second = open_session(
        &storage,
        StubJokeSource::jokes(&[("S1", "P1"), ("S2", "P2")]),
    );
    assert_eq!(second.history().unwrap().len(), 1);
    assert_eq!(second.acquire().unwrap(), Joke::new("S2", "P2"));

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&storage).unwrap()).unwrap();
    assert_eq!(
        raw["displayedJokes"],
        r#"[{"setup":"S1","punchline":"P1"},{"setup":"S2","punchline":"P2"}]"#
    );
}

#[test]
fn test_reset_removes_key_for_next_session() {
    let tmp = tempfile::tempdir().unwrap();
    let storage = tmp.path().join("storage.json");

    let first = open_session(&storage, StubJokeSource::jokes(&[("S1", "P1")]));
    first.acquire().unwrap();
    first.reset().unwrap();
    drop(first);

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&storage).unwrap()).unwrap();
    assert!(raw.get("displayedJokes").is_none());

    let second = open_session(&storage, StubJokeSource::jokes(&[("S1", "P1")]));
    assert!(second.history().unwrap().is_empty());
    assert_eq!(second.acquire().unwrap(), Joke::new("S1", "P1"));
}
