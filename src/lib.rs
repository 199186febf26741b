//! Fuzztest: a minimal crash target for fuzzers.
//!
//! The binary reads up to eight bytes from the file named on its command
//! line. If they spell `Fuzztest`, it writes through a null pointer and
//! dies; otherwise it exits normally. The crash is trivially reachable on
//! purpose, giving a fuzzer something concrete to find.
//!
//! # Modules
//!
//! - [`input`]: Fixed-size input buffer and the file loader
//! - [`trigger`]: Trigger literal matching and the deliberate crash
//! - [`error`]: Error types and their exit codes

pub mod error;
pub mod input;
pub mod trigger;

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

pub use error::FuzztestError;

/// The fuzztest CLI application.
///
/// Help and version flags are disabled: every argument is a path, even one
/// that looks like a flag.
#[derive(Parser)]
#[command(name = "fuzztest")]
#[command(version, about)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// File whose first eight bytes are checked against the trigger.
    #[arg(value_name = "INPUT_FILE", allow_hyphen_values = true)]
    inputs: Vec<PathBuf>,
}

/// Run the fuzztest CLI against the process arguments.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), FuzztestError> {
    run_from(std::env::args_os())
}

/// Run the CLI against an explicit argument list (program name first).
///
/// Anything other than exactly one argument becomes
/// [`FuzztestError::Usage`] without touching the filesystem.
pub fn run_from<I, T>(args: I) -> Result<(), FuzztestError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut args = args.into_iter().map(Into::<OsString>::into);
    let program = args.next().unwrap_or_else(|| OsString::from("fuzztest"));

    // The escape makes clap take `--`, `-x` and friends as plain values.
    let argv = [program, OsString::from("--")].into_iter().chain(args);
    let cli = Cli::try_parse_from(argv).map_err(FuzztestError::Usage)?;

    let [input] = cli.inputs.as_slice() else {
        return Err(FuzztestError::Usage(Cli::command().error(
            ErrorKind::WrongNumberOfValues,
            format!("expected exactly one input file, got {}", cli.inputs.len()),
        )));
    };

    if let Some(buffer) = input::load_input(input)? {
        trigger::fuzz_test(&buffer);
    }

    Ok(())
}

/// The program name to show in usage messages.
pub fn program_name() -> String {
    std::env::args_os()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| "fuzztest".to_string())
}

/// Fuzz-only entrypoint: match `data` as if it were the input file.
#[cfg(feature = "fuzzing")]
pub fn fuzz_entry(data: &[u8]) {
    trigger::fuzz_test(&input::InputBuffer::from_bytes(data));
}
