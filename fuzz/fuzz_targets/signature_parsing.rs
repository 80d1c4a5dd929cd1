#![no_main]

use libfuzzer_sys::fuzz_target;
use sigtext::{MethodSignature, RenderFlags, TypeSignature};

fuzz_target!(|data: &str| {
    if let Ok(sig) = data.parse::<TypeSignature>() {
        assert_eq!(sig.to_string(), data);
        let _ = sig.render(RenderFlags::FULLY_QUALIFIED);
        let erased = sig.erasure().to_string();
        assert!(erased.parse::<TypeSignature>().is_ok());
    }
    if let Ok(method) = data.parse::<MethodSignature>() {
        assert_eq!(method.to_string(), data);
    }
});
