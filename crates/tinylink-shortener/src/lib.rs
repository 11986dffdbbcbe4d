//! URL shortener service implementation.
//!
//! This crate provides the [`UniquenessResolver`], which picks a short code
//! that is not yet taken, and the [`ShortenerService`], which validates
//! input and persists the resulting link record. Core types live in
//! `tinylink_core`.

pub mod resolver;
pub mod service;

pub use resolver::{Candidate, ResolverSettings, UniquenessResolver, DEFAULT_MAX_RETRIES};
pub use service::{ShortenerService, MAX_ORIGINAL_URL_LENGTH};
