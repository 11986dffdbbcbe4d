use tinylink_core::ALPHABET;

const BASE: u64 = ALPHABET.len() as u64;

/// Encodes `value` as little-endian base-62 over [`ALPHABET`].
///
/// The least significant digit comes first. Zero encodes as the single
/// symbol `"0"`. A `u64` never needs more than 11 symbols.
pub fn encode(mut value: u64) -> String {
    if value == 0 {
        return (ALPHABET[0] as char).to_string();
    }

    let mut out = String::with_capacity(11);
    while value > 0 {
        out.push(ALPHABET[(value % BASE) as usize] as char);
        value /= BASE;
    }
    out
}
