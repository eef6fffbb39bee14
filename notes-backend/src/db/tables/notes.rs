//! Note database operations
//!
//! Writes never treat a blank title or an unknown id as an error. They report
//! what happened through `WriteOutcome` and leave the table untouched.

use rusqlite::{params, OptionalExtension, Row};

use crate::db::{NoteStore, StoreResult};
use crate::models::Note;

/// What a write operation did to the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Applied,
    /// The note had no usable title
    SkippedInvalid,
    /// No row carried the requested id
    SkippedMissing,
}

impl WriteOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, WriteOutcome::Applied)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WriteOutcome::Applied => "applied",
            WriteOutcome::SkippedInvalid => "skipped_invalid",
            WriteOutcome::SkippedMissing => "skipped_missing",
        }
    }
}

impl NoteStore {
    /// Insert a new note stamped with the current time.
    /// On success the store-assigned id is written back into `note`.
    pub fn add(&self, note: &mut Note) -> StoreResult<WriteOutcome> {
        if !note.is_valid() {
            return Ok(WriteOutcome::SkippedInvalid);
        }

        self.with_write_conn(|conn| {
            note.stamp_now();
            conn.execute(
                "INSERT INTO notes (title, content, timestamp) VALUES (?1, ?2, ?3)",
                params![note.title, note.content, note.timestamp],
            )?;
            note.id = conn.last_insert_rowid();
            Ok(WriteOutcome::Applied)
        })
    }

    /// Get a note by id, `None` if there is no such row
    pub fn get(&self, id: i64) -> StoreResult<Option<Note>> {
        self.with_read_conn(|conn| {
            let note = conn
                .query_row(
                    "SELECT id, title, content, timestamp FROM notes WHERE id = ?1",
                    params![id],
                    Self::row_to_note,
                )
                .optional()?;
            Ok(note)
        })
    }

    /// All notes, in the order SQLite returns them
    pub fn get_all(&self) -> StoreResult<Vec<Note>> {
        self.with_read_conn(|conn| {
            let mut stmt = conn.prepare("SELECT id, title, content, timestamp FROM notes")?;
            let notes = stmt
                .query_map([], Self::row_to_note)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(notes)
        })
    }

    /// Overwrite title, content and timestamp of the row with `note.id`.
    pub fn update(&self, note: &mut Note) -> StoreResult<WriteOutcome> {
        if !note.is_valid() {
            return Ok(WriteOutcome::SkippedInvalid);
        }

        self.with_write_conn(|conn| {
            note.stamp_now();
            let changed = conn.execute(
                "UPDATE notes SET title = ?1, content = ?2, timestamp = ?3 WHERE id = ?4",
                params![note.title, note.content, note.timestamp, note.id],
            )?;
            if changed == 0 {
                Ok(WriteOutcome::SkippedMissing)
            } else {
                Ok(WriteOutcome::Applied)
            }
        })
    }

    pub fn delete(&self, id: i64) -> StoreResult<WriteOutcome> {
        self.with_write_conn(|conn| {
            let removed = conn.execute("DELETE FROM notes WHERE id = ?1", params![id])?;
            if removed == 0 {
                Ok(WriteOutcome::SkippedMissing)
            } else {
                Ok(WriteOutcome::Applied)
            }
        })
    }

    /// Delete the row backing `note`
    pub fn delete_note(&self, note: &Note) -> StoreResult<WriteOutcome> {
        if !note.is_persisted() {
            return Ok(WriteOutcome::SkippedMissing);
        }
        self.delete(note.id)
    }

    pub fn count(&self) -> StoreResult<usize> {
        self.with_read_conn(|conn| {
            let count: i64 = conn.query_row("SELECT COUNT(*) FROM notes", [], |row| row.get(0))?;
            Ok(count as usize)
        })
    }

    fn row_to_note(row: &Row<'_>) -> rusqlite::Result<Note> {
        Ok(Note::full(row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
    }
}
