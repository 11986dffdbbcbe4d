use crate::{base62, Encoder};
use tinylink_core::ShortCode;
use typed_builder::TypedBuilder;
use xxhash_rust::xxh3::xxh3_64_with_seed;

/// Default XXH3 seed, the ASCII bytes of `"tinylink"`.
pub const DEFAULT_DIGEST_SEED: u64 = 0x7469_6e79_6c69_6e6b;

/// An encoder that hashes the seed with XXH3-64 and spells the digest in base-62.
///
/// The variant is folded into the XXH3 seed, so every variant of the same
/// input string selects an independent digest. The digest is read as a
/// signed 64-bit integer and its magnitude is encoded, which keeps codes
/// between 1 and 11 symbols long.
///
/// Digests are stable across processes and platforms for a fixed
/// `digest_seed`. Changing the seed changes every code the encoder emits.
#[derive(Debug, Clone, Copy, TypedBuilder)]
pub struct HashEncoder {
    #[builder(default = DEFAULT_DIGEST_SEED)]
    digest_seed: u64,
}

impl Default for HashEncoder {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl HashEncoder {
    pub fn digest_seed(&self) -> u64 {
        self.digest_seed
    }

    /// Returns the absolute value of the signed digest of `(seed, variant)`.
    pub fn digest(&self, seed: &str, variant: u64) -> u64 {
        let raw = xxh3_64_with_seed(seed.as_bytes(), self.digest_seed.wrapping_add(variant));
        (raw as i64).unsigned_abs()
    }
}

impl Encoder for HashEncoder {
    fn encode(&self, seed: &str, variant: u64) -> ShortCode {
        ShortCode::new_unchecked(base62::encode(self.digest(seed, variant)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_input_same_code() {
        let encoder = HashEncoder::default();
        let url = "https://example.com/test-1/test-2/test-3";

        for variant in 0..4 {
            assert_eq!(encoder.encode(url, variant), encoder.encode(url, variant));
        }
    }

    #[test]
    fn default_encoder_known_values() {
        let encoder = HashEncoder::default();

        assert_eq!(
            encoder.digest("https://example.com/a", 0),
            2524118123832169456
        );
        assert_eq!(
            encoder.encode("https://example.com/a", 0).as_str(),
            "4Aps53fus03"
        );
        assert_eq!(encoder.encode("4Aps53fus03", 1).as_str(), "H6Rw6JgxNZ6");
    }

    #[test]
    fn separately_built_encoders_agree() {
        let a = HashEncoder::builder().build();
        let b = HashEncoder::builder().digest_seed(DEFAULT_DIGEST_SEED).build();

        assert_eq!(a.digest_seed(), b.digest_seed());

        assert_eq!(
            a.encode("https://example.com/a", 1),
            b.encode("https://example.com/a", 1)
        );
    }

    #[test]
    fn variants_produce_distinct_codes() {
        let encoder = HashEncoder::default();
        let url = "https://example.com/a";

        let codes: Vec<_> = (0..8).map(|variant| encoder.encode(url, variant)).collect();
        for (i, left) in codes.iter().enumerate() {
            for right in &codes[i + 1..] {
                assert_ne!(left, right);
            }
        }
    }

    #[test]
    fn digest_seed_changes_codes() {
        let default = HashEncoder::default();
        let other = HashEncoder::builder().digest_seed(42).build();

        assert_ne!(
            default.encode("https://example.com/a", 0),
            other.encode("https://example.com/a", 0)
        );
    }

    #[test]
    fn codes_stay_within_alphabet_and_length() {
        let encoder = HashEncoder::default();
        let seeds = [
            "",
            "a",
            "https://example.com/a",
            "https://example.com/test-1/test-2/test-3",
            "\u{1F980} unicode seed",
        ];

        for seed in seeds {
            for variant in 0..16 {
                let code = encoder.encode(seed, variant);
                let len = code.as_str().len();
                assert!((1..=11).contains(&len), "bad length {len} for {code}");
                assert!(code.as_str().chars().all(ShortCode::is_symbol));
                assert!(ShortCode::new(code.as_str()).is_ok());
            }
        }
    }

    #[test]
    fn code_is_base62_of_digest() {
        let encoder = HashEncoder::default();
        let digest = encoder.digest("https://example.com/a", 0);

        assert!(digest <= 1 << 63);
        assert_eq!(
            encoder.encode("https://example.com/a", 0).as_str(),
            base62::encode(digest)
        );
    }

    #[test]
    fn chained_seed_differs_from_original() {
        let encoder = HashEncoder::default();
        let first = encoder.encode("https://example.com/a", 0);
        let second = encoder.encode(first.as_str(), 1);

        assert_ne!(first, second);
    }
}
