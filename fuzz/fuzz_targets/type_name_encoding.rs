#![no_main]

use libfuzzer_sys::fuzz_target;
use sigtext::{TypeSignature, create_type_signature};

fuzz_target!(|data: &str| {
    for resolved in [true, false] {
        if let Ok(sig) = create_type_signature(data, resolved) {
            assert!(sig.parse::<TypeSignature>().is_ok(), "{sig}");
        }
    }
});
