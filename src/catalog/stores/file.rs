//! File-backed catalog store.
//!
//! Reads the same record shape as the HTTP backend from a local JSON
//! file: a top-level array of module records. Used for offline work
//! and as the fixture backend in tests.

use std::path::PathBuf;

use async_trait::async_trait;
use log::info;
use serde_json::Value;

use crate::catalog::parse::parse_records;
use crate::catalog::store::{ModuleStore, StoreError};
use crate::catalog::types::Module;

/// Local document store: one JSON file holding the full collection.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl ModuleStore for FileStore {
    fn name(&self) -> &str {
        "file"
    }

    async fn fetch_modules(&self) -> Result<Vec<Module>, StoreError> {
        info!("Reading module collection from {}", self.path.display());

        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| StoreError::Network(format!("{}: {e}", self.path.display())))?;

        let records: Vec<Value> =
            serde_json::from_str(&contents).map_err(|e| StoreError::Parse(e.to_string()))?;

        Ok(parse_records(&records))
    }
}
