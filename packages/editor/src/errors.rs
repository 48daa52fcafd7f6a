//! Error types for the editor shell.

use crate::store::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("failed to persist page: {0}")]
    Persistence(#[source] StoreError),

    #[error("image upload failed: {0}")]
    Upload(#[source] StoreError),

    #[error("block index {index} out of bounds (page has {len} blocks)")]
    BlockOutOfBounds { index: usize, len: usize },
}

impl EditorError {
    /// Whether re-invoking the same action may succeed. Store failures are
    /// surfaced as one-shot notifications and retried manually by the
    /// operator; index errors indicate a host-application bug.
    pub fn is_retryable(&self) -> bool {
        matches!(self, EditorError::Persistence(_) | EditorError::Upload(_))
    }
}
