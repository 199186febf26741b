use std::path::PathBuf;
use thiserror::Error;

/// The main error type for fuzztest operations.
#[derive(Debug, Error)]
pub enum FuzztestError {
    /// Anything other than exactly one positional argument.
    #[error("Invalid arguments: expected exactly one input file")]
    Usage(#[source] clap::Error),

    #[error("Failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FuzztestError {
    /// Process exit status for this error.
    ///
    /// An open failure reports 255, the status byte a `-1` return truncates
    /// to on POSIX systems.
    pub fn exit_code(&self) -> u8 {
        match self {
            FuzztestError::Usage(_) => 1,
            FuzztestError::Open { .. } => 255,
        }
    }

    /// The usage line printed to stdout before exiting.
    pub fn usage_message(&self, program: &str) -> String {
        match self {
            FuzztestError::Usage(_) => format!("USAGE: {} <input_file>", program),
            FuzztestError::Open { .. } => format!("USAGE: {} INPUT_FILE", program),
        }
    }
}
