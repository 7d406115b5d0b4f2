//! Fuzz target: facelet string validation.
//!
//! Arbitrary input must be rejected cleanly or accepted as exactly 54 face
//! letters that display back unchanged.
#![no_main]

use libfuzzer_sys::fuzz_target;
use rubik_core::FaceletString;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(facelets) = text.parse::<FaceletString>() {
        assert_eq!(facelets.to_string(), text);
    }
});
