use uuid::Uuid;

use crate::errors::ExpenseError;
use crate::storage::StorageBackend;

use super::Entry;

/// Authoritative in-memory entry collection, backed by a storage adapter.
///
/// Ordering is insertion order with the newest entry first; display sorting
/// by date is the render pipeline's concern, not the journal's. Every
/// mutation re-persists the whole collection.
pub struct ExpenseJournal {
    entries: Vec<Entry>,
    storage: Box<dyn StorageBackend>,
}

impl ExpenseJournal {
    /// Opens the journal, loading whatever the backend holds.
    ///
    /// A corrupt blob is logged and treated as an empty collection; the
    /// stored bytes stay untouched until the next successful save.
    pub fn open(storage: Box<dyn StorageBackend>) -> Self {
        let entries = match storage.load() {
            Ok(entries) => entries,
            Err(err) => {
                tracing::error!("Unable to load entries, starting empty: {err}");
                Vec::new()
            }
        };
        Self { entries, storage }
    }

    /// Prepends a new entry and persists the collection.
    pub fn add(&mut self, entry: Entry) -> Result<Uuid, ExpenseError> {
        let id = entry.id;
        self.entries.insert(0, entry);
        self.save()?;
        Ok(id)
    }

    /// Removes the entry with the given id, if any, and persists.
    ///
    /// An unknown id is a no-op, not an error; the save still happens.
    pub fn remove(&mut self, id: Uuid) -> Result<bool, ExpenseError> {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        let removed = self.entries.len() != before;
        self.save()?;
        Ok(removed)
    }

    /// Empties the collection and persists. Confirmation gating lives with
    /// the caller.
    pub fn clear(&mut self) -> Result<(), ExpenseError> {
        self.entries.clear();
        self.save()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct categories ever entered, in encounter order.
    pub fn distinct_categories(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for entry in &self.entries {
            if entry.category.is_empty() {
                continue;
            }
            if !seen.contains(&entry.category) {
                seen.push(entry.category.clone());
            }
        }
        seen
    }

    fn save(&self) -> Result<(), ExpenseError> {
        self.storage.save(&self.entries)
    }
}
