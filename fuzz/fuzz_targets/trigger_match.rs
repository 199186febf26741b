//! Fuzz target for the trigger matcher.
//!
//! This fuzzer feeds arbitrary byte sequences through the same buffer and
//! matcher the CLI uses. Reaching the trigger literal crashes the process,
//! which is the finding this target exists to produce.

#![no_main]

use libfuzzer_sys::fuzz_target;
use fuzztest::fuzz_entry;

fuzz_target!(|data: &[u8]| {
    fuzz_entry(data);
});
