// Vigenère polyalphabetic substitution cipher.
//
// Both the message and the key phrase are normalized with
// `filter_string` before any shifting, so ciphertext is always
// lowercase a-z and exactly as long as the filtered message.

use log::trace;
use thiserror::Error;

use crate::alphabet::{self, AlphabetError, filter_string};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VigenereError {
    /// The key phrase has no alphabetic characters to cycle through.
    #[error("key phrase contains no alphabetic characters")]
    EmptyPhrase,
    /// Propagated from the character primitives.
    #[error(transparent)]
    Alphabet(#[from] AlphabetError),
}

// ---------------------------------------------------------------------------
// Key stream
// ---------------------------------------------------------------------------

/// Usable key letters of `phrase`, in order.
fn key_letters(phrase: &str) -> Result<Vec<char>, VigenereError> {
    let key: Vec<char> = filter_string(phrase).chars().collect();
    if key.is_empty() {
        return Err(VigenereError::EmptyPhrase);
    }
    Ok(key)
}

// ---------------------------------------------------------------------------
// Encode
// ---------------------------------------------------------------------------

/// Encrypt `word` under the repeating key `phrase`.
///
/// `word` is filtered to lowercase letters first; the key letter for
/// position `i` is the filtered phrase at `i mod key_len`. A message
/// with no alphabetic characters encrypts to the empty string.
///
/// ```
/// use oxicipher::vigenere;
///
/// assert_eq!(vigenere::encode("hello", "key").unwrap(), "rijvs");
/// ```
pub fn encode(word: &str, phrase: &str) -> Result<String, VigenereError> {
    let key = key_letters(phrase)?;
    let plain = filter_string(word);
    trace!("vigenere encode: {} letters, key length {}", plain.len(), key.len());

    let mut out = String::with_capacity(plain.len());
    for (i, c) in plain.chars().enumerate() {
        out.push(alphabet::encode_character(c, key[i % key.len()])?);
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Decode
// ---------------------------------------------------------------------------

/// Invert [`encode`]: recover `filter_string(word)` from ciphertext
/// produced under the same `phrase`. The ciphertext letter plays the
/// varying role and the key letter the fixed role, matching
/// [`crate::alphabet::decode_character`]'s argument convention.
///
/// ```
/// use oxicipher::vigenere;
///
/// assert_eq!(vigenere::decode("rijvs", "key").unwrap(), "hello");
/// ```
pub fn decode(word: &str, phrase: &str) -> Result<String, VigenereError> {
    let key = key_letters(phrase)?;
    let cipher = filter_string(word);
    trace!("vigenere decode: {} letters, key length {}", cipher.len(), key.len());

    let mut out = String::with_capacity(cipher.len());
    for (i, c) in cipher.chars().enumerate() {
        out.push(alphabet::decode_character(key[i % key.len()], c)?);
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
