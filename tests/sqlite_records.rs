mod common;

use common::{harness, ScriptedPrompt};
use lapwatch_lib::{
    db::Database,
    records::RecordStore,
    storage::{DEFAULT_NAMESPACE, SAVED_TIMES_KEY},
};

#[tokio::test]
async fn saved_times_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("data").join("lapwatch.sqlite3");

    {
        let db = Database::new(db_path.clone()).unwrap();
        assert_eq!(db.path(), Some(db_path.as_path()));

        let mut store = RecordStore::new(db, DEFAULT_NAMESPACE, SAVED_TIMES_KEY);
        store.load().await.unwrap();
        assert!(store.is_empty());

        store.add("Run", "04:10:250").await.unwrap();
        store.add("Run", "04:10:250").await.unwrap();
        store.add("Walk", "12:00:000").await.unwrap();
        store.remove_at(1).await.unwrap();
    }

    let db = Database::new(db_path).unwrap();
    let mut store = RecordStore::new(db, DEFAULT_NAMESPACE, SAVED_TIMES_KEY);
    store.load().await.unwrap();
    assert_eq!(store.entries(), ["Run - 04:10:250", "Walk - 12:00:000"]);
}

#[tokio::test]
async fn screen_flow_against_sqlite() {
    let db = Database::open_in_memory().unwrap();
    let prompt = ScriptedPrompt::default()
        .confirm_with(true)
        .type_text(Some("  Sprint  "));
    let mut h = harness(db.clone(), prompt);
    h.app.launch().await.unwrap();

    h.app.press_start();
    h.clock.advance(9_870);
    h.app.press_stop().await.unwrap();

    let mut reader = RecordStore::new(db, DEFAULT_NAMESPACE, SAVED_TIMES_KEY);
    reader.load().await.unwrap();
    assert_eq!(reader.entries(), ["Sprint - 00:09:870"]);
}
