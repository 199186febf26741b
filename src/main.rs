use std::process::ExitCode;

fn main() -> ExitCode {
    match fuzztest::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("{}", err.usage_message(&fuzztest::program_name()));
            ExitCode::from(err.exit_code())
        }
    }
}
