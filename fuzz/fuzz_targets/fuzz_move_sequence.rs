//! Fuzz target: scramble notation parser.
//!
//! Parsing arbitrary text must never panic, and anything that parses must
//! print back to text that parses to the same sequence.
#![no_main]

use libfuzzer_sys::fuzz_target;
use rubik_core::{Cube, MoveSequence};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(seq) = text.parse::<MoveSequence>() else {
        return;
    };
    let reparsed: MoveSequence = seq.to_string().parse().expect("printed notation must parse");
    assert_eq!(reparsed, seq);

    let mut cube = Cube::solved();
    cube.apply_all(&seq);
    cube.apply_all(&seq.inverse());
    assert!(cube.is_solved(), "sequence followed by its inverse must restore the cube");
});
