// Rail-fence (zigzag) transposition cipher.
//
// Characters are written diagonally across `rails` virtual rails, the
// row index bouncing 0 -> rails-1 -> 0 as the column advances, and the
// ciphertext is the rails read out top to bottom. The cipher permutes
// positions and never inspects character classes, so spaces and
// punctuation travel through like letters.

use log::trace;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RailFenceError {
    /// The transposition needs at least two rails.
    #[error("rail count must be at least 2, got {0}")]
    InvalidRailCount(usize),
}

// ---------------------------------------------------------------------------
// Bounce pattern
// ---------------------------------------------------------------------------

/// Rail index for the character at `pos`. The zigzag has period
/// `2 * (rails - 1)`: the first half of each period descends the rails,
/// the second half climbs back without repeating the endpoints.
#[inline]
fn rail_at(pos: usize, rails: usize) -> usize {
    let period = 2 * (rails - 1);
    let phase = pos % period;
    if phase < rails { phase } else { period - phase }
}

fn check_rails(rails: usize) -> Result<(), RailFenceError> {
    if rails < 2 {
        return Err(RailFenceError::InvalidRailCount(rails));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Encode
// ---------------------------------------------------------------------------

/// Transpose `text` across `rails` rails.
///
/// Works on `char` boundaries, so any UTF-8 input round-trips through
/// [`decode`]. A rail count of at least the text length degenerates to
/// the identity permutation.
///
/// ```
/// use oxicipher::railfence;
///
/// assert_eq!(railfence::encode("HELLO_WORLD", 4).unwrap(), "HWE_OLORDLL");
/// ```
pub fn encode(text: &str, rails: usize) -> Result<String, RailFenceError> {
    check_rails(rails)?;
    trace!("rail fence encode: {} rails", rails);

    let mut fence: Vec<String> = vec![String::new(); rails];
    for (pos, c) in text.chars().enumerate() {
        fence[rail_at(pos, rails)].push(c);
    }
    Ok(fence.concat())
}

// ---------------------------------------------------------------------------
// Decode
// ---------------------------------------------------------------------------

/// Invert [`encode`]: rebuild the bounce pattern for the ciphertext
/// length, then replay the ciphertext into each rail's positions in the
/// order the rails were read out.
///
/// ```
/// use oxicipher::railfence;
///
/// assert_eq!(railfence::decode("HWE_OLORDLL", 4).unwrap(), "HELLO_WORLD");
/// ```
pub fn decode(text: &str, rails: usize) -> Result<String, RailFenceError> {
    check_rails(rails)?;
    trace!("rail fence decode: {} rails", rails);

    let chars: Vec<char> = text.chars().collect();
    let pattern: Vec<usize> = (0..chars.len()).map(|pos| rail_at(pos, rails)).collect();

    let mut out = vec!['\0'; chars.len()];
    let mut next = 0;
    for rail in 0..rails {
        for (pos, &r) in pattern.iter().enumerate() {
            if r == rail {
                out[pos] = chars[next];
                next += 1;
            }
        }
    }
    Ok(out.into_iter().collect())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(text: &str, rails: usize) {
        let encoded = encode(text, rails).expect("encode failed");
        let decoded = decode(&encoded, rails).expect("decode failed");
        assert_eq!(
            decoded, text,
            "roundtrip mismatch (rails={rails}, encoded={encoded:?})"
        );
    }

    #[test]
    fn encode_vectors() {
        let cases: &[(&str, usize, &str)] = &[
            ("HELLO", 3, "HOELL"),
            ("ABCD", 2, "ACBD"),
            ("HELLO", 5, "HELLO"),
            ("SECRET", 3, "SEERTC"),
            ("HELLO_WORLD", 4, "HWE_OLORDLL"),
            ("", 3, ""),
            ("A B C D", 3, "AC   BD"),
        ];
        for &(text, rails, expected) in cases {
            assert_eq!(
                encode(text, rails).unwrap(),
                expected,
                "encode({text:?}, {rails})"
            );
        }
    }

    #[test]
    fn decode_vectors() {
        let cases: &[(&str, usize, &str)] = &[
            ("HOELL", 3, "HELLO"),
            ("ACBD", 2, "ABCD"),
            ("HELLO", 5, "HELLO"),
            ("SEERTC", 3, "SECRET"),
            ("HWE_OLORDLL", 4, "HELLO_WORLD"),
            ("", 3, ""),
            ("AB  CD", 3, "A D BC"),
        ];
        for &(text, rails, expected) in cases {
            assert_eq!(
                decode(text, rails).unwrap(),
                expected,
                "decode({text:?}, {rails})"
            );
        }
    }

    #[test]
    fn roundtrip_mixed_content() {
        roundtrip("The quick brown fox jumps over the lazy dog.", 3);
        roundtrip("HELLO_WORLD", 4);
        roundtrip("A B C D", 3);
        roundtrip("line one\nline two\ttabbed", 5);
    }

    #[test]
    fn roundtrip_rails_exceed_length() {
        // Degenerates to the identity permutation.
        assert_eq!(encode("abc", 7).unwrap(), "abc");
        roundtrip("abc", 7);
    }

    #[test]
    fn roundtrip_multibyte_chars() {
        roundtrip("ünïcödé tëxt", 3);
        roundtrip("日本語のテキスト", 4);
    }

    #[test]
    fn roundtrip_all_small_rail_counts() {
        let text = "WEAREDISCOVEREDFLEEATONCE";
        for rails in 2..=text.len() + 2 {
            roundtrip(text, rails);
        }
    }

    #[test]
    fn rejects_degenerate_rail_counts() {
        for rails in [0, 1] {
            assert_eq!(
                encode("HELLO", rails),
                Err(RailFenceError::InvalidRailCount(rails))
            );
            assert_eq!(
                decode("HELLO", rails),
                Err(RailFenceError::InvalidRailCount(rails))
            );
        }
    }

    #[test]
    fn empty_input_any_rail_count() {
        for rails in [2, 3, 100] {
            assert_eq!(encode("", rails).unwrap(), "");
            assert_eq!(decode("", rails).unwrap(), "");
        }
    }
}
