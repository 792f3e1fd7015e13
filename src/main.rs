//! Binary entrypoint for the `shelver` tool.

use std::process::ExitCode;

fn main() -> ExitCode {
    match shelver::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
