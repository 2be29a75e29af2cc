//! # Tillbook Terminal Entry Point
//!
//! ```text
//! $ printf 'add 1\nadd 3\ncomplete\n' | tillbook-terminal
//! {"status":"ok","data":{"lines":[...],"totals":{"totalDisplay":"$3.50",...}}}
//! ...
//! ```
//!
//! The actual setup is in lib.rs for better testability.

use std::process::ExitCode;

fn main() -> ExitCode {
    match tillbook_terminal_lib::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "Tillbook POS screen failed");
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
