use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("short code already exists: {0}")]
    Conflict(String),
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
    #[error("storage query failed: {0}")]
    Query(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
}

/// Errors surfaced by the shortener to its callers.
#[derive(Debug, Clone, Error)]
pub enum ShortenerError {
    #[error("original url must not be empty")]
    EmptyInput,
    #[error("original url is {length} characters long, the limit is {max}")]
    UrlTooLong { length: usize, max: usize },
    #[error("no free short code found after {attempts} attempts")]
    GenerationExhausted { attempts: u32 },
    #[error("storage error: {0}")]
    Storage(
        #[from]
        #[source]
        StorageError,
    ),
}
