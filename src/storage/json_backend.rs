use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::journal::Entry;
use crate::utils::{app_data_dir, ensure_dir, entries_file_in};

use super::{Result, StorageBackend};

const TMP_SUFFIX: &str = "tmp";

/// Stores the entry collection as a single JSON array in a fixed file under
/// the application data directory.
#[derive(Clone)]
pub struct JsonStorage {
    entries_file: PathBuf,
}

impl JsonStorage {
    pub fn new(root: PathBuf) -> Result<Self> {
        ensure_dir(&root)?;
        Ok(Self {
            entries_file: entries_file_in(&root),
        })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(app_data_dir())
    }

    pub fn entries_path(&self) -> &Path {
        &self.entries_file
    }
}

impl StorageBackend for JsonStorage {
    fn load(&self) -> Result<Vec<Entry>> {
        if !self.entries_file.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.entries_file)?;
        let entries: Vec<Entry> = serde_json::from_str(&data)?;
        Ok(entries)
    }

    fn save(&self, entries: &[Entry]) -> Result<()> {
        let json = serde_json::to_string_pretty(entries)?;
        let tmp = tmp_path(&self.entries_file);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.entries_file)?;
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::EntryDraft;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn storage_with_temp_dir() -> (JsonStorage, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let storage = JsonStorage::new(temp.path().to_path_buf()).expect("json storage");
        (storage, temp)
    }

    fn sample_entry(description: &str) -> Entry {
        let draft = EntryDraft {
            amount: "4.20".into(),
            description: description.into(),
            ..EntryDraft::default()
        };
        Entry::from_draft(&draft, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()).unwrap()
    }

    #[test]
    fn save_and_load_roundtrip() {
        let (storage, _guard) = storage_with_temp_dir();
        let entries = vec![sample_entry("coffee"), sample_entry("lunch")];
        storage.save(&entries).expect("save entries");
        let loaded = storage.load().expect("load entries");
        assert_eq!(loaded, entries);
    }

    #[test]
    fn missing_file_loads_empty() {
        let (storage, _guard) = storage_with_temp_dir();
        let loaded = storage.load().expect("load entries");
        assert!(loaded.is_empty());
    }

    #[test]
    fn corrupt_blob_is_a_load_error() {
        let (storage, _guard) = storage_with_temp_dir();
        fs::write(storage.entries_path(), "{not json").expect("write corrupt blob");
        assert!(storage.load().is_err());
    }

    #[test]
    fn save_leaves_no_tmp_file_behind() {
        let (storage, _guard) = storage_with_temp_dir();
        storage.save(&[sample_entry("tea")]).expect("save entries");
        assert!(!tmp_path(storage.entries_path()).exists());
    }
}
