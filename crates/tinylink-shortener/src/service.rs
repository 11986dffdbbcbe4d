use std::sync::Arc;

use async_trait::async_trait;
use tinylink_core::{LinkRecord, Repository, ShortCode, Shortener, ShortenerError, StorageError};
use tinylink_encoder::Encoder;
use tracing::{info, warn};

use crate::resolver::{ResolverSettings, UniquenessResolver};

/// Longest original URL the service accepts, matching the stored column.
pub const MAX_ORIGINAL_URL_LENGTH: usize = 2048;

/// A concrete implementation of the `Shortener` trait.
///
/// This service wraps a `Repository` and a [`UniquenessResolver`] to handle:
/// - Input validation
/// - Short code resolution
/// - Persisting the record, retrying when a concurrent writer took the code
///
/// The resolver's existence probes are only a fast path. The repository's
/// atomic `create` is what guarantees uniqueness; a conflict there resumes
/// the resolver chain under the same retry budget.
#[derive(Debug)]
pub struct ShortenerService<R, E> {
    repository: Arc<R>,
    resolver: UniquenessResolver<R, E>,
}

impl<R, E> Clone for ShortenerService<R, E> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            resolver: self.resolver.clone(),
        }
    }
}

impl<R: Repository, E: Encoder> ShortenerService<R, E> {
    pub fn new(repository: R, encoder: E, settings: ResolverSettings) -> Self {
        let repository = Arc::new(repository);
        let resolver = UniquenessResolver::new(Arc::clone(&repository), encoder, settings);
        Self {
            repository,
            resolver,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    fn validate_url(url: &str) -> Result<(), ShortenerError> {
        if url.trim().is_empty() {
            return Err(ShortenerError::EmptyInput);
        }

        let length = url.chars().count();
        if length > MAX_ORIGINAL_URL_LENGTH {
            return Err(ShortenerError::UrlTooLong {
                length,
                max: MAX_ORIGINAL_URL_LENGTH,
            });
        }

        Ok(())
    }
}

#[async_trait]
impl<R: Repository, E: Encoder> Shortener for ShortenerService<R, E> {
    async fn shorten(&self, original_url: &str) -> Result<LinkRecord, ShortenerError> {
        Self::validate_url(original_url)?;

        let mut candidate = self.resolver.resolve(original_url).await?;

        loop {
            let record = LinkRecord {
                short_code: candidate.code.clone(),
                original_url: original_url.to_string(),
            };

            match self.repository.create(record.clone()).await {
                Ok(()) => {
                    info!(
                        code = %record.short_code,
                        attempt = candidate.attempt,
                        "created link record"
                    );
                    return Ok(record);
                }
                Err(StorageError::Conflict(code)) => {
                    warn!(
                        code = %code,
                        attempt = candidate.attempt,
                        "short code taken by a concurrent writer"
                    );
                    candidate = self.resolver.resolve_after(&candidate).await?;
                }
                Err(other) => return Err(other.into()),
            }
        }
    }

    async fn resolve(&self, code: &ShortCode) -> Result<Option<LinkRecord>, ShortenerError> {
        Ok(self.repository.get(code).await?)
    }
}
