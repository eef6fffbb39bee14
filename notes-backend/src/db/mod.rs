pub mod sqlite;
pub mod tables;

pub use sqlite::{DbConn, NoteStore, StoreError, StoreResult};
pub use tables::WriteOutcome;
