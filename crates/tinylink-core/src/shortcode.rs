use serde::{Deserialize, Serialize};
use std::fmt::Display;
use thiserror::Error;

/// The 62 symbols a short code is drawn from, in digit order.
///
/// The position of a symbol is its base-62 digit value, so `'0'` is zero,
/// `'a'` is ten and `'Z'` is sixty-one.
pub const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

const MIN_LENGTH: usize = 1;
const MAX_LENGTH: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid short code: {0}")]
pub struct InvalidShortCode(String);

/// A short code identifying a link record.
///
/// Short codes are 1-32 characters long and contain only symbols from
/// [`ALPHABET`]. Deserialization runs the same validation as [`ShortCode::new`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShortCode(String);

impl ShortCode {
    /// Creates a new `ShortCode` after validating the input.
    pub fn new(code: impl Into<String>) -> Result<Self, InvalidShortCode> {
        let code = code.into();
        Self::validate(&code)?;
        Ok(Self(code))
    }

    /// Creates a `ShortCode` without validation.
    ///
    /// Use this only for codes produced by trusted internal sources
    /// (e.g. the encoder, which only emits alphabet symbols).
    pub fn new_unchecked(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Generates the full shortened URL based on the provided base URL.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.0)
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if `symbol` belongs to [`ALPHABET`].
    pub fn is_symbol(symbol: char) -> bool {
        symbol.is_ascii_alphanumeric()
    }

    fn validate(code: &str) -> Result<(), InvalidShortCode> {
        if code.len() < MIN_LENGTH || code.len() > MAX_LENGTH {
            return Err(InvalidShortCode(format!(
                "length must be between {} and {}, got {}",
                MIN_LENGTH,
                MAX_LENGTH,
                code.len()
            )));
        }

        if !code.chars().all(Self::is_symbol) {
            return Err(InvalidShortCode(format!(
                "must contain only ascii letters and digits: '{}'",
                code
            )));
        }

        Ok(())
    }
}

impl Display for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ShortCode {
    type Error = InvalidShortCode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ShortCode> for String {
    fn from(value: ShortCode) -> Self {
        value.0
    }
}
