use rusqlite::Connection;
use std::path::PathBuf;
use thiserror::Error;

use crate::models::{CheckinDraft, MoodEntry, SCALE_MAX, SCALE_MIN};

/// Fixed key the serialized entry collection is stored under.
const ENTRIES_KEY: &str = "mood_entries";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Failed to create data directory: {0}")]
    Directory(String),
    #[error("Failed to serialize entries: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("{0} must be between 1 and 10, got {1}")]
    ScoreOutOfRange(&'static str, u8),
}

/// Owner of the entry collection. Loads the whole collection once at
/// open and rewrites the full serialized blob on every append; callers
/// receive it by reference, never through globals.
pub struct EntryStore {
    conn: Connection,
    entries: Vec<MoodEntry>,
}

impl EntryStore {
    /// Open (or create) the backing database and load the collection.
    pub fn open(path: &str) -> Result<Self, StoreError> {
        let db_path = PathBuf::from(path);

        if let Some(parent) = db_path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| StoreError::Directory(e.to_string()))?;
            }
        }

        let conn = Connection::open(&db_path)?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS store (
                key     TEXT PRIMARY KEY,
                value   TEXT NOT NULL
            )",
            [],
        )?;

        let entries = Self::load_all(&conn)?;
        Ok(Self { conn, entries })
    }

    /// Deserialize the persisted collection. A missing row or a blob
    /// that no longer parses yields an empty collection.
    fn load_all(conn: &Connection) -> Result<Vec<MoodEntry>, StoreError> {
        let blob: Result<String, rusqlite::Error> = conn.query_row(
            "SELECT value FROM store WHERE key = ?1",
            [ENTRIES_KEY],
            |row| row.get(0),
        );

        match blob {
            Ok(json) => Ok(serde_json::from_str(&json).unwrap_or_default()),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(Vec::new()),
            Err(e) => Err(StoreError::Sqlite(e)),
        }
    }

    /// Validate a draft, stamp it with `id` and `date`, add it to the
    /// end of the collection, and persist synchronously. Returns the
    /// stored entry.
    pub fn append(&mut self, draft: CheckinDraft) -> Result<&MoodEntry, StoreError> {
        validate_score("mood", draft.mood)?;
        if let Some(v) = draft.stress_level {
            validate_score("stress level", v)?;
        }
        if let Some(v) = draft.sleep_quality {
            validate_score("sleep quality", v)?;
        }
        if let Some(v) = draft.energy {
            validate_score("energy", v)?;
        }

        let now = chrono::Utc::now();
        let entry = MoodEntry {
            id: self.next_id(now.timestamp_millis()),
            date: now.to_rfc3339(),
            mood: draft.mood,
            stress_level: draft.stress_level,
            sleep_quality: draft.sleep_quality,
            energy: draft.energy,
            note: draft.note.filter(|n| !n.trim().is_empty()),
        };

        self.entries.push(entry);
        if let Err(e) = self.persist() {
            // Keep memory consistent with disk when the write fails.
            self.entries.pop();
            return Err(e);
        }

        Ok(self.entries.last().expect("entry was just pushed"))
    }

    /// Ids follow the original scheme (millisecond timestamps) but are
    /// bumped past the previous id so rapid appends stay monotonic.
    fn next_id(&self, now_millis: i64) -> i64 {
        match self.entries.last() {
            Some(last) if last.id >= now_millis => last.id + 1,
            _ => now_millis,
        }
    }

    /// Rewrite the whole collection under the fixed key.
    fn persist(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string(&self.entries)?;
        self.conn.execute(
            "INSERT INTO store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            rusqlite::params![ENTRIES_KEY, json],
        )?;
        Ok(())
    }

    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn validate_score(field: &'static str, value: u8) -> Result<(), StoreError> {
    if (SCALE_MIN..=SCALE_MAX).contains(&value) {
        Ok(())
    } else {
        Err(StoreError::ScoreOutOfRange(field, value))
    }
}
