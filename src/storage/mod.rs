pub mod json_backend;

use crate::errors::ExpenseError;
use crate::journal::Entry;

pub type Result<T> = std::result::Result<T, ExpenseError>;

/// Abstraction over persistence backends holding the entry collection.
///
/// The whole collection travels as one blob: `save` overwrites it in full,
/// `load` reads it back. There are no partial writes and no transactions.
pub trait StorageBackend: Send + Sync {
    fn load(&self) -> Result<Vec<Entry>>;
    fn save(&self, entries: &[Entry]) -> Result<()>;
}

pub use json_backend::JsonStorage;
