//! Memory-store error type.

use catpoint_domain::error::CatpointError;

/// Errors originating from the in-memory adapters.
#[derive(Debug, thiserror::Error)]
pub enum MemoryStoreError {
    /// A thread panicked while holding the store lock.
    #[error("in-memory store lock poisoned")]
    Poisoned,
}

impl From<MemoryStoreError> for CatpointError {
    fn from(err: MemoryStoreError) -> Self {
        Self::Storage(Box::new(err))
    }
}
