pub mod entry;
#[allow(clippy::module_inception)]
pub mod journal;

pub use entry::{DraftError, Entry, EntryDraft, DEFAULT_CATEGORY};
pub use journal::ExpenseJournal;
