// Cipher-alphabet primitives.
//
// The cipher alphabet is the 26 lowercase ASCII letters. Every character
// that survives `filter_string` has an offset 0 ('a') through 25 ('z'),
// and the Vigenère character primitives shift those offsets mod 26.

use thiserror::Error;

/// Number of letters in the cipher alphabet.
pub const ALPHABET_LEN: u32 = 26;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AlphabetError {
    /// A character primitive received input outside the cipher alphabet.
    #[error("character {0:?} is not a lowercase ASCII letter")]
    NotLowercaseLetter(char),
}

// ---------------------------------------------------------------------------
// Offset mapping
// ---------------------------------------------------------------------------

/// Alphabet offset of a lowercase letter: 'a' -> 0 .. 'z' -> 25.
#[inline]
fn offset(c: char) -> Result<u32, AlphabetError> {
    if c.is_ascii_lowercase() {
        Ok(c as u32 - 'a' as u32)
    } else {
        Err(AlphabetError::NotLowercaseLetter(c))
    }
}

/// Letter at the given alphabet offset. Callers keep `off < ALPHABET_LEN`.
#[inline]
fn letter(off: u32) -> char {
    debug_assert!(off < ALPHABET_LEN);
    char::from(b'a' + off as u8)
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Reduce `input` to the characters the substitution cipher operates on:
/// ASCII letters, lowercased, in original order. Digits, punctuation,
/// whitespace, and non-ASCII characters are dropped.
///
/// Idempotent; empty input yields an empty string.
///
/// ```
/// use oxicipher::filter_string;
///
/// assert_eq!(filter_string("H3ll0, W0rld!"), "hllwrld");
/// ```
pub fn filter_string(input: &str) -> String {
    input
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

// ---------------------------------------------------------------------------
// Vigenère character primitives
// ---------------------------------------------------------------------------

/// Combine plaintext letter `p` with key-stream letter `s`: the output
/// offset is `(offset(p) + offset(s)) mod 26`.
///
/// ```
/// use oxicipher::encode_character;
///
/// assert_eq!(encode_character('m', 'n'), Ok('z'));
/// ```
#[inline]
pub fn encode_character(p: char, s: char) -> Result<char, AlphabetError> {
    Ok(letter((offset(p)? + offset(s)?) % ALPHABET_LEN))
}

/// Inverse of [`encode_character`] with the same argument roles: `p` is
/// the fixed letter being stripped back out, `s` the combined letter.
/// The output offset is `(offset(s) - offset(p)) mod 26`, so
/// `decode_character(p, encode_character(p, s)) == s` for all letter
/// pairs.
///
/// ```
/// use oxicipher::decode_character;
///
/// assert_eq!(decode_character('m', 'z'), Ok('n'));
/// ```
#[inline]
pub fn decode_character(p: char, s: char) -> Result<char, AlphabetError> {
    Ok(letter((offset(s)? + ALPHABET_LEN - offset(p)?) % ALPHABET_LEN))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
