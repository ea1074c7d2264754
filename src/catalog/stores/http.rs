//! HTTP document-store backend.
//!
//! Reads the full module collection in one request:
//! `GET {base_url}/{collection}` returning a JSON array of records.
//! Records are mapped field-by-field by [`crate::catalog::parse`];
//! malformed records are skipped there, never surfaced as an error.

use async_trait::async_trait;
use log::{debug, info, warn};
use serde_json::Value;

use crate::catalog::parse::parse_records;
use crate::catalog::store::{ModuleStore, StoreError};
use crate::catalog::types::Module;

/// Remote document store reached over HTTP.
pub struct HttpStore {
    base_url: String,
    collection: String,
    client: reqwest::Client,
}

impl HttpStore {
    pub fn new(base_url: Option<String>, collection: String) -> Self {
        let env_url = std::env::var("MENTOR_STORE_URL").ok();
        let final_url = base_url
            .or(env_url)
            .unwrap_or_else(|| "http://localhost:8080".to_string());

        Self {
            base_url: final_url,
            collection,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ModuleStore for HttpStore {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_modules(&self) -> Result<Vec<Module>, StoreError> {
        let url = format!("{}/{}", self.base_url, self.collection);
        info!("Fetching module collection from {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        debug!("Store response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Store error: {} - {}", status, err_body);
            return Err(StoreError::Api {
                status,
                message: err_body,
            });
        }

        let records: Vec<Value> = response
            .json()
            .await
            .map_err(|e| StoreError::Parse(e.to_string()))?;

        Ok(parse_records(&records))
    }
}
