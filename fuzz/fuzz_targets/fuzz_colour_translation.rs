//! Fuzz target: colour-to-facelet translation.
//!
//! Builds a cube from arbitrary JSON colour maps and translates it. The
//! translator may reject the cube but must never panic, and a successful
//! translation is always 54 face letters.
#![no_main]

use libfuzzer_sys::fuzz_target;
use rubik_core::{to_facelets, ColourMap, Cube};

fuzz_target!(|data: &[u8]| {
    let Ok(map) = serde_json::from_slice::<ColourMap>(data) else {
        return;
    };
    let Ok(cube) = Cube::from_colour_map(&map) else {
        return;
    };
    if let Ok(facelets) = to_facelets(&cube) {
        assert_eq!(facelets.to_string().len(), 54);
    }
});
