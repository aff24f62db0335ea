//! Directory-of-collections storage
//!
//! One JSON file per collection under the storage path:
//! ```text
//! {storage_path}/
//! ├── maths.json      # Array of card records, array order = display order
//! └── history.json
//! ```
//! The file stem is the collection's display name.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::collection::Collection;
use crate::models::CardRecord;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("collection not found: {0}")]
    CollectionNotFound(String),

    #[error("malformed collection {name:?}: {reason}")]
    Malformed { name: String, reason: String },

    #[error("data directory not found")]
    DataDirNotFound,
}

pub type Result<T> = std::result::Result<T, StoreError>;

const COLLECTION_EXT: &str = "json";

/// Storage manager mapping collection names to files in one directory
pub struct CollectionStore {
    storage_path: PathBuf,
}

impl CollectionStore {
    /// Create a store over `storage_path`. No I/O happens until the first
    /// load or save.
    pub fn new(storage_path: impl Into<PathBuf>) -> Self {
        Self {
            storage_path: storage_path.into(),
        }
    }

    /// Conventional per-user location for collection files
    pub fn default_data_dir() -> Result<PathBuf> {
        dirs::data_local_dir()
            .map(|p| p.join("mneme").join("collections"))
            .ok_or(StoreError::DataDirNotFound)
    }

    pub fn storage_path(&self) -> &Path {
        &self.storage_path
    }

    fn collection_path(&self, name: &str) -> PathBuf {
        self.storage_path
            .join(format!("{}.{}", name, COLLECTION_EXT))
    }

    // ===== Read Operations =====

    /// Load one collection by name
    pub fn load(&self, name: &str) -> Result<Collection> {
        let path = self.collection_path(name);
        if !path.exists() {
            return Err(StoreError::CollectionNotFound(name.to_string()));
        }

        let content = fs::read_to_string(&path)?;
        parse_collection(name, &content)
    }

    /// Load every collection in the storage directory, keyed by file stem.
    ///
    /// Files that fail to parse or validate are skipped with a warning so
    /// one bad file cannot hide the rest. A missing storage directory
    /// yields an empty map.
    pub fn load_all(&self) -> Result<BTreeMap<String, Collection>> {
        let mut collections = BTreeMap::new();

        if !self.storage_path.exists() {
            return Ok(collections);
        }

        for entry in fs::read_dir(&self.storage_path)? {
            let entry = entry?;
            let path = entry.path();
            if !path
                .extension()
                .map(|e| e == COLLECTION_EXT)
                .unwrap_or(false)
            {
                continue;
            }
            let name = match path.file_stem().and_then(|s| s.to_str()) {
                Some(name) => name,
                None => continue,
            };

            let content = fs::read_to_string(&path)?;
            match parse_collection(name, &content) {
                Ok(collection) => {
                    collections.insert(name.to_string(), collection);
                }
                Err(err) => {
                    log::warn!("Skipping unparseable collection file {:?}: {}", path, err);
                }
            }
        }

        Ok(collections)
    }

    /// List collection names without loading card data, sorted
    pub fn list_names(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();

        if !self.storage_path.exists() {
            return Ok(names);
        }

        for entry in fs::read_dir(&self.storage_path)? {
            let entry = entry?;
            let path = entry.path();
            if !path
                .extension()
                .map(|e| e == COLLECTION_EXT)
                .unwrap_or(false)
            {
                continue;
            }
            if let Some(name) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(name.to_string());
            }
        }

        names.sort();
        Ok(names)
    }

    // ===== Write Operations =====

    /// Write a collection to `{storage_path}/{name}.json`, creating
    /// intermediate directories as needed and overwriting any existing file
    pub fn save(&self, name: &str, collection: &Collection) -> Result<()> {
        fs::create_dir_all(&self.storage_path)?;

        let records: Vec<CardRecord> = collection.records().collect();
        let json = serde_json::to_string_pretty(&records)?;
        fs::write(self.collection_path(name), json)?;
        Ok(())
    }

    /// Delete a collection file, if present
    pub fn delete(&self, name: &str) -> Result<()> {
        let path = self.collection_path(name);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

fn parse_collection(name: &str, content: &str) -> Result<Collection> {
    let records: Vec<CardRecord> =
        serde_json::from_str(content).map_err(|e| StoreError::Malformed {
            name: name.to_string(),
            reason: e.to_string(),
        })?;

    Collection::from_records(records).map_err(|e| StoreError::Malformed {
        name: name.to_string(),
        reason: e.to_string(),
    })
}
