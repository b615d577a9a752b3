use tempfile::tempdir;

use mindspace_tui::models::CheckinDraft;
use mindspace_tui::store::EntryStore;

fn draft(mood: u8) -> CheckinDraft {
    CheckinDraft {
        mood,
        ..CheckinDraft::default()
    }
}

#[test]
fn append_then_reload_preserves_count_and_order() {
    let tmp = tempdir().expect("tempdir");
    let db_path = tmp.path().join("entries.db");
    let db_str = db_path.to_string_lossy().to_string();

    let moods = [3u8, 9, 5, 7, 1];
    {
        let mut store = EntryStore::open(&db_str).expect("open store");
        for mood in moods {
            store.append(draft(mood)).expect("append entry");
        }
        assert_eq!(store.len(), moods.len());
    }

    // Reopen and verify the round trip kept everything in order
    let store = EntryStore::open(&db_str).expect("reopen store");
    assert_eq!(store.len(), moods.len());
    let stored_moods: Vec<u8> = store.entries().iter().map(|e| e.mood).collect();
    assert_eq!(stored_moods, moods);
}

#[test]
fn ids_are_unique_and_monotonic_for_rapid_appends() {
    let tmp = tempdir().expect("tempdir");
    let db_str = tmp.path().join("entries.db").to_string_lossy().to_string();

    let mut store = EntryStore::open(&db_str).expect("open store");
    for _ in 0..10 {
        store.append(draft(6)).expect("append entry");
    }

    let ids: Vec<i64> = store.entries().iter().map(|e| e.id).collect();
    for pair in ids.windows(2) {
        assert!(pair[1] > pair[0], "ids not monotonic: {:?}", ids);
    }
}

#[test]
fn corrupt_blob_yields_empty_collection() {
    let tmp = tempdir().expect("tempdir");
    let db_path = tmp.path().join("entries.db");
    let db_str = db_path.to_string_lossy().to_string();

    {
        let mut store = EntryStore::open(&db_str).expect("open store");
        store.append(draft(8)).expect("append entry");
    }

    // Clobber the stored blob behind the store's back
    let conn = rusqlite::Connection::open(&db_path).expect("open raw connection");
    conn.execute(
        "UPDATE store SET value = ?1 WHERE key = 'mood_entries'",
        ["this is not json"],
    )
    .expect("corrupt blob");
    drop(conn);

    // Fails open: empty collection, and appends work again afterwards
    let mut store = EntryStore::open(&db_str).expect("reopen store");
    assert!(store.is_empty());
    store.append(draft(4)).expect("append after corruption");
    assert_eq!(store.len(), 1);
}

#[test]
fn out_of_range_scores_are_rejected() {
    let tmp = tempdir().expect("tempdir");
    let db_str = tmp.path().join("entries.db").to_string_lossy().to_string();

    let mut store = EntryStore::open(&db_str).expect("open store");

    assert!(store.append(draft(0)).is_err(), "mood 0 should be rejected");
    assert!(store.append(draft(11)).is_err(), "mood 11 should be rejected");

    let bad_stress = CheckinDraft {
        mood: 5,
        stress_level: Some(11),
        ..CheckinDraft::default()
    };
    assert!(
        store.append(bad_stress).is_err(),
        "stress 11 should be rejected"
    );

    assert!(store.is_empty(), "rejected drafts must not be stored");
}

#[test]
fn blank_notes_are_stored_as_absent() {
    let tmp = tempdir().expect("tempdir");
    let db_str = tmp.path().join("entries.db").to_string_lossy().to_string();

    let mut store = EntryStore::open(&db_str).expect("open store");
    let entry = store
        .append(CheckinDraft {
            mood: 7,
            note: Some("   ".to_string()),
            ..CheckinDraft::default()
        })
        .expect("append entry");
    assert!(entry.note.is_none());

    let entry = store
        .append(CheckinDraft {
            mood: 7,
            note: Some("slept well".to_string()),
            ..CheckinDraft::default()
        })
        .expect("append entry");
    assert_eq!(entry.note.as_deref(), Some("slept well"));
}

#[test]
fn missing_database_starts_empty() {
    let tmp = tempdir().expect("tempdir");
    let db_str = tmp
        .path()
        .join("nested/dir/entries.db")
        .to_string_lossy()
        .to_string();

    // Parent directories are created on demand
    let store = EntryStore::open(&db_str).expect("open store");
    assert!(store.is_empty());
}
