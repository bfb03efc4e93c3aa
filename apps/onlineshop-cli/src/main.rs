//! # Online Shop Entry Point
//!
//! ```bash
//! # interactive
//! onlineshop
//!
//! # scripted, JSON output
//! ONLINESHOP_OUTPUT=json onlineshop commands.txt
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match onlineshop_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
