//! Injected persistence and upload collaborators.
//!
//! Both traits are network-shaped: async, non-blocking, no cancellation and
//! no retry policy. Real implementations wrap the hosted backend; the
//! in-memory store backs tests and offline tooling.

use async_trait::async_trait;
use clipper_document::PageDocument;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;
use tokio::sync::Mutex;

/// Failure reported by a store collaborator.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("request rejected: {0}")]
    Rejected(String),

    #[error("transport failure: {0}")]
    Transport(String),
}

/// Document persistence, keyed by tenant. Exactly one document per tenant;
/// `upsert` is create-or-replace with no partial update and no concurrency
/// token.
#[async_trait]
pub trait PageStore: Send + Sync {
    /// Stored value for a tenant, in whatever shape storage holds it.
    /// `None` means the tenant has never saved a page.
    async fn fetch(&self, tenant_id: &str) -> Result<Option<Value>, StoreError>;

    /// Create-or-replace the tenant's document.
    async fn upsert(&self, tenant_id: &str, document: &PageDocument) -> Result<(), StoreError>;
}

/// Binary upload that resolves to a publicly addressable URL. The URL is
/// just a string prop value afterwards; nothing downstream knows how it was
/// produced.
#[async_trait]
pub trait ImageStore: Send + Sync {
    async fn upload(&self, data: Vec<u8>, category: &str) -> Result<String, StoreError>;
}

/// In-memory page store for tests and offline tooling.
#[derive(Default)]
pub struct MemoryPageStore {
    rows: Mutex<HashMap<String, Value>>,
}

impl MemoryPageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw stored value, bypassing the canonical shape. Lets tests
    /// exercise normalization of legacy payloads.
    pub async fn seed_raw(&self, tenant_id: impl Into<String>, value: Value) {
        self.rows.lock().await.insert(tenant_id.into(), value);
    }
}

#[async_trait]
impl PageStore for MemoryPageStore {
    async fn fetch(&self, tenant_id: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.rows.lock().await.get(tenant_id).cloned())
    }

    async fn upsert(&self, tenant_id: &str, document: &PageDocument) -> Result<(), StoreError> {
        let value = serde_json::to_value(document)
            .map_err(|e| StoreError::Rejected(e.to_string()))?;
        self.rows.lock().await.insert(tenant_id.to_string(), value);
        Ok(())
    }
}
