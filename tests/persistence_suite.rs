use chrono::NaiveDate;
use tempfile::TempDir;

use expense_core::journal::{Entry, EntryDraft, ExpenseJournal};
use expense_core::storage::{JsonStorage, StorageBackend};

fn entry(date: &str, amount: &str, category: &str) -> Entry {
    let draft = EntryDraft {
        date: date.into(),
        amount: amount.into(),
        category: category.into(),
        ..EntryDraft::default()
    };
    Entry::from_draft(&draft, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()).unwrap()
}

#[test]
fn roundtrip_preserves_order_and_fields() {
    let temp = TempDir::new().unwrap();
    let storage = JsonStorage::new(temp.path().to_path_buf()).unwrap();

    let entries = vec![
        entry("2024-02-01", "5", "Transport"),
        entry("2024-01-31", "20", "Food"),
        entry("2024-01-01", "10", "Food"),
    ];
    storage.save(&entries).unwrap();
    let loaded = storage.load().unwrap();
    assert_eq!(loaded, entries);
}

#[test]
fn deleting_then_reloading_drops_exactly_that_entry() {
    let temp = TempDir::new().unwrap();
    let storage = JsonStorage::new(temp.path().to_path_buf()).unwrap();

    let mut journal = ExpenseJournal::open(Box::new(storage.clone()));
    journal.add(entry("2024-01-01", "10", "Food")).unwrap();
    let b = journal.add(entry("2024-01-31", "20", "Food")).unwrap();
    journal.add(entry("2024-02-01", "5", "Transport")).unwrap();

    journal.remove(b).unwrap();

    let reloaded = ExpenseJournal::open(Box::new(storage));
    let categories: Vec<_> = reloaded
        .entries()
        .iter()
        .map(|e| (e.category.as_str(), e.amount))
        .collect();
    assert_eq!(categories, vec![("Transport", 5.0), ("Food", 10.0)]);
}

#[test]
fn corrupt_blob_opens_empty_and_is_left_untouched() {
    let temp = TempDir::new().unwrap();
    let storage = JsonStorage::new(temp.path().to_path_buf()).unwrap();
    std::fs::write(storage.entries_path(), "{definitely not json").unwrap();

    let journal = ExpenseJournal::open(Box::new(storage.clone()));
    assert!(journal.is_empty());

    let raw = std::fs::read_to_string(storage.entries_path()).unwrap();
    assert_eq!(raw, "{definitely not json");
}

#[test]
fn next_save_overwrites_a_corrupt_blob() {
    let temp = TempDir::new().unwrap();
    let storage = JsonStorage::new(temp.path().to_path_buf()).unwrap();
    std::fs::write(storage.entries_path(), "{definitely not json").unwrap();

    let mut journal = ExpenseJournal::open(Box::new(storage.clone()));
    journal.add(entry("2024-03-01", "7.25", "Health")).unwrap();

    let loaded = storage.load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].category, "Health");
}

#[test]
fn every_mutation_persists_the_whole_collection() {
    let temp = TempDir::new().unwrap();
    let storage = JsonStorage::new(temp.path().to_path_buf()).unwrap();

    let mut journal = ExpenseJournal::open(Box::new(storage.clone()));
    journal.add(entry("2024-01-05", "3", "Food")).unwrap();
    journal.add(entry("2024-01-06", "4", "Food")).unwrap();
    assert_eq!(storage.load().unwrap().len(), 2);

    journal.clear().unwrap();
    assert!(storage.load().unwrap().is_empty());
}
