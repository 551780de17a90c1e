use crate::core::constants::{CODE_ALPHABET, ENCODING_BASE};

const INVALID: u8 = u8::MAX;

/// Digit value for every byte, `INVALID` for bytes outside the alphabet.
/// Lower-case letters map to the same value as their upper-case form.
static DIGIT_VALUES: [u8; 256] = build_lookup();

const fn build_lookup() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let alphabet = CODE_ALPHABET.as_bytes();
    let mut i = 0;
    while i < alphabet.len() {
        let upper = alphabet[i];
        table[upper as usize] = i as u8;
        table[upper.to_ascii_lowercase() as usize] = i as u8;
        i += 1;
    }
    table
}

/// Returns the value (0-19) of an alphabet byte, case-insensitively.
#[inline]
pub fn digit_value(byte: u8) -> Option<usize> {
    match DIGIT_VALUES[byte as usize] {
        INVALID => None,
        v => Some(v as usize),
    }
}

/// Returns the canonical (upper-case) alphabet character for a digit value.
///
/// Values past the end of the alphabet are clamped to the last symbol.
#[inline]
pub(crate) fn digit_char(value: usize) -> char {
    CODE_ALPHABET.as_bytes()[value.min(ENCODING_BASE - 1)] as char
}

/// Whether the byte belongs to the alphabet (either case).
#[inline]
pub fn is_alphabet_byte(byte: u8) -> bool {
    digit_value(byte).is_some()
}
