//! govanity binary entry point.

use std::process::ExitCode;

fn main() -> ExitCode {
    match govanity::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            govanity::ui::output::error(format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
