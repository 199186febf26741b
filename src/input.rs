//! Input loading for the crash target.
//!
//! The whole input model is a fixed 9-byte stack buffer: at most
//! [`PAYLOAD_LEN`] bytes are read from the file and the final byte stays zero
//! as a terminator.

use std::ffi::CStr;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::FuzztestError;

/// Maximum number of bytes taken from the input.
pub const PAYLOAD_LEN: usize = 8;

/// Fixed-capacity, zero-initialized input buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputBuffer {
    bytes: [u8; PAYLOAD_LEN + 1],
}

impl InputBuffer {
    /// Create an all-zero buffer.
    pub fn new() -> Self {
        Self {
            bytes: [0; PAYLOAD_LEN + 1],
        }
    }

    /// Build a buffer from the leading bytes of `data`.
    ///
    /// Anything past the first [`PAYLOAD_LEN`] bytes is ignored.
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut buffer = Self::new();
        let n = data.len().min(PAYLOAD_LEN);
        buffer.bytes[..n].copy_from_slice(&data[..n]);
        buffer
    }

    /// The payload positions, excluding the terminator.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..PAYLOAD_LEN]
    }

    /// Length up to the first NUL byte.
    pub fn len(&self) -> usize {
        CStr::from_bytes_until_nul(&self.bytes)
            .map(|s| s.to_bytes().len())
            .unwrap_or(PAYLOAD_LEN)
    }

    pub fn is_empty(&self) -> bool {
        self.bytes[0] == 0
    }

    fn payload_mut(&mut self) -> &mut [u8] {
        &mut self.bytes[..PAYLOAD_LEN]
    }
}

impl Default for InputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Open `path` and read up to [`PAYLOAD_LEN`] bytes from it.
///
/// Returns `Ok(None)` when the read itself fails: the caller skips matching
/// and exits normally. The file handle is closed before returning in every
/// case.
pub fn load_input(path: &Path) -> Result<Option<InputBuffer>, FuzztestError> {
    let mut file = File::open(path).map_err(|source| FuzztestError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut buffer = InputBuffer::new();
    let read = file.read(buffer.payload_mut());
    drop(file);

    match read {
        Ok(_) => Ok(Some(buffer)),
        Err(_) => Ok(None),
    }
}
