//! Core types and traits for the tinylink URL shortener.
//!
//! This crate provides the shared vocabulary used by the encoder, the
//! shortener service, the storage adapters and the HTTP gateway.

pub mod error;
pub mod repository;
pub mod shortcode;
pub mod shortener;

pub use error::{ShortenerError, StorageError};
pub use repository::{LinkRecord, ReadRepository, Repository};
pub use shortcode::{InvalidShortCode, ShortCode, ALPHABET};
pub use shortener::Shortener;
