// File: farmledger-core/src/storage/mod.rs
//
// Directory-backed document store: one JSON file per logical collection.
// Every mutation rewrites the affected collection wholesale; collections are
// read once at rehydration. There is no patch format and no schema version.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::fs;
use tracing::debug;

use farmledger_common::error::Error;

pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    /// Opens (creating if necessary) the storage directory.
    pub async fn open(root: impl AsRef<Path>) -> Result<Self, Error> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn document_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    /// Loads a collection document. A missing file means the collection has
    /// never been written and rehydrates as empty.
    pub async fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, Error> {
        let path = self.document_path(key);
        let bytes = match fs::read(&path).await {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("no document for '{}', rehydrating empty", key);
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        let value = serde_json::from_slice(&bytes)?;
        Ok(Some(value))
    }

    /// Serializes the full collection and replaces the document on disk.
    pub async fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), Error> {
        let bytes = serde_json::to_vec_pretty(value)?;
        fs::write(self.document_path(key), bytes).await?;
        Ok(())
    }
}
