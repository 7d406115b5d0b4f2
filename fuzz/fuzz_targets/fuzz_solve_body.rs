//! Fuzz target: `/solve` request body decoding.
//!
//! Verifies that arbitrary byte sequences fed to the body parser never
//! cause panics. Errors are expected and fine.
#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = rubik_gateway::routes::parse_solve_body(data);
});
