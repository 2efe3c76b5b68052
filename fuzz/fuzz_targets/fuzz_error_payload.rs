//! Fuzz target: classification of backend error bodies.
//!
//! Any recognised kind must fall in exactly one response class.

#![no_main]

use libfuzzer_sys::fuzz_target;
use vend_core::DomainErrorKind;

fuzz_target!(|data: &[u8]| {
    if let Some(kind) = DomainErrorKind::from_payload(data) {
        assert_ne!(
            kind.is_not_found_class(),
            kind.is_balance_class(),
            "{kind:?} must be in exactly one class"
        );
    }
});
