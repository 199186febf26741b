//! The matcher and its deliberate crash.
//!
//! A buffer whose first eight bytes spell [`TRIGGER_LITERAL`] makes
//! [`fuzz_test`] write through a null pointer. This is the finding a fuzzer
//! is expected to discover; it is not an error path.

use std::ptr;

use crate::input::{InputBuffer, PAYLOAD_LEN};

/// The byte sequence that triggers the crash.
pub const TRIGGER_LITERAL: [u8; PAYLOAD_LEN] = *b"Fuzztest";

/// Number of leading positions that agree with [`TRIGGER_LITERAL`].
///
/// Comparison stops at the first mismatch.
pub fn matched_prefix_len(buffer: &InputBuffer) -> usize {
    buffer
        .as_bytes()
        .iter()
        .zip(TRIGGER_LITERAL.iter())
        .take_while(|(got, want)| got == want)
        .count()
}

/// Whether all eight positions match the trigger literal.
pub fn matches_trigger(buffer: &InputBuffer) -> bool {
    matched_prefix_len(buffer) == TRIGGER_LITERAL.len()
}

/// Crash if `buffer` holds the trigger literal, otherwise return.
///
/// A buffer whose NUL-terminated length is below eight has a zero byte
/// inside the payload, so it can never match.
pub fn fuzz_test(buffer: &InputBuffer) {
    if buffer.len() < TRIGGER_LITERAL.len() {
        return;
    }
    if matches_trigger(buffer) {
        crash();
    }
}

/// Write through a null pointer.
///
/// Terminates the process with a memory-access violation (SIGSEGV on unix)
/// in both debug and release builds.
#[inline(never)]
pub fn crash() -> ! {
    // SAFETY: intentionally unsound; this write must fault.
    unsafe {
        ptr::write_volatile(ptr::null_mut::<u8>(), 77);
    }
    // Only reached if the write did not fault.
    std::process::abort()
}
