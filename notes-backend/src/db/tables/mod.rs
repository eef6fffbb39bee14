//! Table operations - each module contains `impl NoteStore` blocks for one table.

mod notes;

pub use notes::WriteOutcome;
