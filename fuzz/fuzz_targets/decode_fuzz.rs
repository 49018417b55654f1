#![no_main]
use libfuzzer_sys::fuzz_target;
use oxicipher::{railfence, vigenere};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // Unvalidated rail counts (including 0 and 1) and arbitrary phrases:
    // the decoders must reject or decode, never panic.
    let rails = usize::from(data[0]);
    let Ok(text) = std::str::from_utf8(&data[1..]) else {
        return;
    };

    let _ = railfence::decode(text, rails);
    let _ = vigenere::decode(text, "key");
    let _ = vigenere::decode(text, text);
});
