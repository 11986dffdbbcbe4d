//! Deterministic short code encoders.
//!
//! An [`Encoder`] turns a seed string and a retry variant into a candidate
//! [`ShortCode`]. Encoders are pure: they never consult storage, the clock
//! or a random source, so a retry sequence can be replayed exactly.

pub mod base62;
pub mod hash;

pub use hash::HashEncoder;

use tinylink_core::ShortCode;

/// Trait for deriving candidate short codes.
pub trait Encoder: Send + Sync + 'static {
    /// Derives a candidate code from `seed` and `variant`.
    ///
    /// Must return the same code for the same `(seed, variant)` pair.
    fn encode(&self, seed: &str, variant: u64) -> ShortCode;
}
