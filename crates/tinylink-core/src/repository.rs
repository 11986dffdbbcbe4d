use crate::error::StorageError;
use crate::shortcode::ShortCode;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// A persisted mapping from a short code to the URL it stands for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    /// The lookup key. Unique across the store and never reassigned.
    pub short_code: ShortCode,
    /// The original URL that was shortened.
    pub original_url: String,
}

/// A read-only view of a repository.
///
/// The uniqueness resolver only needs this half of the contract, so it
/// cannot write by construction.
#[async_trait]
pub trait ReadRepository: Send + Sync + 'static {
    /// Retrieves the link record for a given short code.
    /// Returns `None` if the code does not exist.
    async fn get(&self, code: &ShortCode) -> Result<Option<LinkRecord>>;

    /// Checks whether a short code is currently taken.
    async fn exists(&self, code: &ShortCode) -> Result<bool>;
}

#[async_trait]
pub trait Repository: ReadRepository {
    /// Inserts a new link record.
    ///
    /// The existence check and the insert must happen atomically. Returns
    /// `Err(StorageError::Conflict)` without touching the stored record if
    /// the code is already taken.
    async fn create(&self, record: LinkRecord) -> Result<()>;
}
