use std::sync::Arc;

use tinylink_core::{ReadRepository, ShortCode, ShortenerError};
use tinylink_encoder::Encoder;
use tracing::{debug, trace, warn};
use typed_builder::TypedBuilder;

/// Default number of retries after the first candidate collides.
pub const DEFAULT_MAX_RETRIES: u32 = 2;

/// Configures a [`UniquenessResolver`].
#[derive(Debug, Clone, Copy, TypedBuilder)]
pub struct ResolverSettings {
    /// Retries allowed after the first candidate, so a resolution makes at
    /// most `max_retries + 1` attempts.
    #[builder(default = DEFAULT_MAX_RETRIES)]
    pub max_retries: u32,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// A short code the store reported free, and the attempt that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub code: ShortCode,
    pub attempt: u32,
}

/// Finds a short code that is not yet taken in the repository.
///
/// The first candidate is the encoding of the original URL with variant 0.
/// Every retry re-encodes the previous candidate with the attempt number as
/// variant, so the chain for a given URL is fixed and reproducible.
///
/// Resolution only reads. A free candidate can still be taken by a
/// concurrent writer before it is persisted; callers that lose that race
/// continue the chain with [`UniquenessResolver::resolve_after`].
#[derive(Debug)]
pub struct UniquenessResolver<R, E> {
    repository: Arc<R>,
    encoder: Arc<E>,
    max_retries: u32,
}

impl<R, E> Clone for UniquenessResolver<R, E> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            encoder: Arc::clone(&self.encoder),
            max_retries: self.max_retries,
        }
    }
}

impl<R: ReadRepository, E: Encoder> UniquenessResolver<R, E> {
    pub fn new(repository: Arc<R>, encoder: E, settings: ResolverSettings) -> Self {
        Self {
            repository,
            encoder: Arc::new(encoder),
            max_retries: settings.max_retries,
        }
    }

    pub fn encoder(&self) -> &E {
        &self.encoder
    }

    /// Resolves a free short code for `original_url`.
    pub async fn resolve(&self, original_url: &str) -> Result<Candidate, ShortenerError> {
        let code = self.encoder.encode(original_url, 0);
        self.probe(code, 0).await
    }

    /// Continues the chain after `rejected`, a candidate that turned out to
    /// be taken when it was written.
    ///
    /// The rejected candidate counts against the same retry budget as the
    /// ones [`resolve`](Self::resolve) probed.
    pub async fn resolve_after(
        &self,
        rejected: &Candidate,
    ) -> Result<Candidate, ShortenerError> {
        if rejected.attempt >= self.max_retries {
            return Err(self.exhausted(&rejected.code));
        }

        let attempt = rejected.attempt + 1;
        let code = self.encoder.encode(rejected.code.as_str(), u64::from(attempt));
        self.probe(code, attempt).await
    }

    async fn probe(
        &self,
        mut code: ShortCode,
        mut attempt: u32,
    ) -> Result<Candidate, ShortenerError> {
        loop {
            trace!(code = %code, attempt, "probing candidate");

            if !self.repository.exists(&code).await? {
                debug!(code = %code, attempt, "accepted candidate");
                return Ok(Candidate { code, attempt });
            }

            if attempt >= self.max_retries {
                return Err(self.exhausted(&code));
            }

            attempt += 1;
            code = self.encoder.encode(code.as_str(), u64::from(attempt));
        }
    }

    fn exhausted(&self, last: &ShortCode) -> ShortenerError {
        let attempts = self.max_retries + 1;
        warn!(last = %last, attempts, "short code generation exhausted");
        ShortenerError::GenerationExhausted { attempts }
    }
}
