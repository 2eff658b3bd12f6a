#![no_main]

use libfuzzer_sys::fuzz_target;
use splice_drum::{from_bytes, to_bytes};

fuzz_target!(|data: &[u8]| {
    // Decoding arbitrary input must never panic.
    let Ok(pattern) = from_bytes(data) else {
        return;
    };

    // Decoded names may grow through UTF-8 replacement and no longer fit.
    let Ok(bytes) = to_bytes(&pattern) else {
        return;
    };

    let again = from_bytes(&bytes).expect("canonical encoding must decode");
    assert_eq!(again.version, pattern.version);
    assert_eq!(again.bpm.to_bits(), pattern.bpm.to_bits());
    assert_eq!(again.tracks, pattern.tracks);
    assert_eq!(to_bytes(&again).expect("re-encode"), bytes);
});
