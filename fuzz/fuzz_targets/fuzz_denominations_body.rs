//! Fuzz target: JSON decoding of a `POST /rest/Change` body.
//!
//! Decoded keys must be re-emitted byte-for-byte.

#![no_main]

use libfuzzer_sys::fuzz_target;
use vend_core::Denominations;

fuzz_target!(|data: &[u8]| {
    let Ok(map) = serde_json::from_slice::<Denominations>(data) else {
        return;
    };
    for (denomination, _) in map.iter() {
        assert!(denomination.value().is_finite());
        assert!(denomination.value() >= 0.0);
    }
    let encoded = serde_json::to_vec(&map).expect("decoded denominations must re-encode");
    let again: Denominations =
        serde_json::from_slice(&encoded).expect("re-encoded denominations must decode");
    assert_eq!(map, again);
});
