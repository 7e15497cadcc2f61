use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{ Path, PathBuf };
use std::sync::{ PoisonError, RwLock };
use crate::client::ClientError;

/// A string key-value store kept in a JSON file, so values survive restarts.
pub struct LocalStorage {
    storage_file_path: PathBuf,
    entries: RwLock<BTreeMap<String, String>>
}

impl LocalStorage {
    /// Opens the store at `storage_file_path`. A file that doesn't exist yet is an empty store.
    pub fn open(storage_file_path: PathBuf) -> Result<LocalStorage, ClientError> {
        let entries = match fs::read_to_string(&storage_file_path) {
            Ok(existing_entries_json) => serde_json::from_str(&existing_entries_json)
                .map_err(|error| ClientError::Storage(format!("Couldn't parse \"{}\": {}", storage_file_path.display(), error)))?,
            Err(error) if error.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(ClientError::Io { path: storage_file_path.display().to_string(), source })
        };
        Ok(LocalStorage { storage_file_path, entries: RwLock::new(entries) })
    }

    pub fn storage_file_path(&self) -> &Path {
        &self.storage_file_path
    }

    pub fn get_item(&self, key: &str) -> Option<String> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).get(key).cloned()
    }

    /// Writes the whole store to disk, then updates the in-memory copy.
    pub fn set_item(&self, key: &str, value: &str) -> Result<(), ClientError> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let mut updated_entries = entries.clone();
        updated_entries.insert(key.to_string(), value.to_string());
        let entries_json = serde_json::to_string_pretty(&updated_entries)
            .map_err(|error| ClientError::Storage(format!("Couldn't serialize local storage: {}", error)))?;
        if let Some(parent) = self.storage_file_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|source| ClientError::Io { path: parent.display().to_string(), source })?;
        }
        fs::write(&self.storage_file_path, entries_json)
            .map_err(|source| ClientError::Io { path: self.storage_file_path.display().to_string(), source })?;
        *entries = updated_entries;
        Ok(())
    }
}
