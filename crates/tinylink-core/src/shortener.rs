use crate::error::ShortenerError;
use crate::repository::LinkRecord;
use crate::shortcode::ShortCode;
use async_trait::async_trait;

type Result<T> = std::result::Result<T, ShortenerError>;

#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Assigns a fresh short code to `original_url` and persists the record.
    ///
    /// Shortening the same URL twice yields two distinct records.
    async fn shorten(&self, original_url: &str) -> Result<LinkRecord>;

    /// Resolves a short code to its stored link record.
    /// Returns `None` if the code does not exist.
    async fn resolve(&self, code: &ShortCode) -> Result<Option<LinkRecord>>;
}
