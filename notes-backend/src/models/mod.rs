mod note;

pub use note::{Note, NotePayload, UNSET_ID, UNSET_TIMESTAMP};
