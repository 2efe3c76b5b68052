//! Fuzz target: JSON decoding of a `PUT /rest/vendItem` body.

#![no_main]

use libfuzzer_sys::fuzz_target;
use vend_core::VendItemRequest;

fuzz_target!(|data: &[u8]| {
    if let Ok(reqs) = serde_json::from_slice::<Vec<VendItemRequest>>(data) {
        // Whatever decodes must encode again.
        let _ = serde_json::to_vec(&reqs).expect("decoded vend requests must re-encode");
    }
});
