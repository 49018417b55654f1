//! Oxicipher: classical text ciphers in Rust.
//!
//! The crate provides:
//! - Rail-fence (zigzag) transposition over raw text (`railfence`)
//! - Vigenère polyalphabetic substitution over normalized text (`vigenere`)
//! - The shared cipher-alphabet primitives and normalization (`alphabet`)
//!
//! # Quick Start
//!
//! ```
//! use oxicipher::{filter_string, railfence, vigenere};
//!
//! let fenced = railfence::encode("HELLO", 3).unwrap();
//! assert_eq!(fenced, "HOELL");
//! assert_eq!(railfence::decode(&fenced, 3).unwrap(), "HELLO");
//!
//! let secret = vigenere::encode("Hello, world!", "key").unwrap();
//! assert_eq!(secret, "rijvsuyvjn");
//! let recovered = vigenere::decode(&secret, "key").unwrap();
//! assert_eq!(recovered, filter_string("Hello, world!"));
//! ```

pub mod alphabet;
pub mod railfence;
pub mod vigenere;

// Re-export the character-level primitives for convenience.
pub use alphabet::{AlphabetError, decode_character, encode_character, filter_string};
