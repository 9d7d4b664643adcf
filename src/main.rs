//! stockroom CLI entry point
//!
//! Argument parsing, command dispatch, and the serve loop all live in the
//! CLI module; main only reports failures to stderr and sets the exit code.

use stockroom::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
