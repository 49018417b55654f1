#![no_main]
use libfuzzer_sys::fuzz_target;
use oxicipher::{filter_string, railfence, vigenere};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    // First byte steers the rail count; the rest is the message.
    let rails = 2 + usize::from(data[0] % 15);
    let Ok(text) = std::str::from_utf8(&data[1..]) else {
        return;
    };

    let encoded = railfence::encode(text, rails).unwrap();
    assert_eq!(railfence::decode(&encoded, rails).unwrap(), text);

    let secret = vigenere::encode(text, "fuzzphrase").unwrap();
    assert_eq!(
        vigenere::decode(&secret, "fuzzphrase").unwrap(),
        filter_string(text)
    );
});
