use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use log::{info, warn};
use tokio::sync::mpsc::Sender;

use super::types::Module;

/// Errors that can occur while reading the module collection.
/// Variants carry enough info to determine retryability (future use).
#[derive(Debug)]
pub enum StoreError {
    /// Network-level failure (timeout, DNS, connection refused). Retryable.
    Network(String),
    /// The store returned an error response. Retryable if status >= 500 or 429.
    Api { status: u16, message: String },
    /// The response body was not a record collection. Not retryable.
    Parse(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Network(msg) => write!(f, "network error: {msg}"),
            StoreError::Api { status, message } => {
                write!(f, "store error (HTTP {status}): {message}")
            }
            StoreError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// The opaque fetch API over the remote document store.
///
/// One call reads the full module collection. Implementations map raw
/// records to typed modules and never surface per-record faults.
#[async_trait]
pub trait ModuleStore: Send + Sync {
    /// Returns the name of the store backend.
    fn name(&self) -> &str;

    /// Reads the full module collection, in document order.
    async fn fetch_modules(&self) -> Result<Vec<Module>, StoreError>;
}

/// Spawns the one catalog fetch as a fire-and-forget task.
///
/// On success the parsed collection is sent over `sender`, so the
/// single owner of navigation state applies it on its own task and a
/// completion can never interleave with an in-progress navigation call.
/// On failure the error is logged and nothing is sent; existing state
/// stays untouched. No timeout, no retry.
pub fn spawn_refresh(store: Arc<dyn ModuleStore>, sender: Sender<Vec<Module>>) {
    tokio::spawn(async move {
        match store.fetch_modules().await {
            Ok(modules) => {
                info!("Fetched {} modules from {} store", modules.len(), store.name());
                if sender.send(modules).await.is_err() {
                    warn!("Catalog receiver dropped before fetch completed");
                }
            }
            Err(e) => warn!("Catalog fetch failed, keeping existing modules: {e}"),
        }
    });
}
