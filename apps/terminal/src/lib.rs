//! # Tillbook Terminal Library
//!
//! The POS screen as a line-oriented terminal program: one command per line
//! on stdin, one JSON reply per line on stdout, logs on stderr.
//!
//! ## Module Organization
//! ```text
//! tillbook_terminal_lib/
//! ├── lib.rs          ◄─── You are here (startup & session loop)
//! ├── state/
//! │   ├── mod.rs      ◄─── AppState and state type exports
//! │   ├── cart.rs     ◄─── Cart state and cart replies
//! │   ├── catalog.rs  ◄─── Catalog, customers, insights (read-only)
//! │   ├── orders.rs   ◄─── Receipt log (order sink)
//! │   ├── settings.rs ◄─── AI model settings
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/       ◄─── Parsing and one module per screen area
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;

use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use commands::{Command, Reply};
use error::ApiError;
use state::{AppState, CatalogState, ConfigState};

/// Runs the POS screen on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging ── tracing-subscriber, EnvFilter, stderr         │
/// │  2. Load Configuration ── TILLBOOK_* environment variables              │
/// │  3. Load Catalog ──────── TILLBOOK_CATALOG_PATH or sample menu          │
/// │  4. Initialize State ──── empty cart, empty receipt log                 │
/// │  5. Session Loop ──────── until `quit` or end of input                  │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), ApiError> {
    init_tracing();

    let config = ConfigState::from_env();
    info!(store = %config.store_name, "Starting Tillbook POS screen");

    let catalog = CatalogState::load(&config)?;
    let state = AppState::new(catalog, config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&state, stdin.lock(), stdout.lock())?;

    Ok(())
}

/// Reads commands from `input` until `quit` or end of input, writing one
/// reply per command to `output`.
///
/// Blank lines and lines starting with `#` are skipped. A line that is not
/// valid UTF-8 is answered with `INVALID_COMMAND`. The cart is discarded
/// when the session ends, including when reading or writing fails.
pub fn run_session<R, W>(state: &AppState, input: R, output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let result = serve_commands(state, input, output);

    // Screen unmount: the in-progress order does not outlive the session
    match state.cart.with_cart_mut(|c| {
        let discarded = c.len();
        c.clear();
        discarded
    }) {
        Ok(0) => {}
        Ok(discarded) => info!(discarded, "Session ended with an open order, cart discarded"),
        Err(err) => warn!(%err, "could not reset cart at session end"),
    }
    debug!("session closed");

    result
}

fn serve_commands<R, W>(state: &AppState, mut input: R, mut output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(());
        }

        let (result, quit) = match std::str::from_utf8(&buf) {
            Ok(text) => {
                let line = text.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                let parsed = line.parse::<Command>();
                let quit = matches!(parsed, Ok(Command::Quit));
                let result = parsed.and_then(|command| commands::dispatch(state, command));
                if let Err(err) = &result {
                    warn!(line, code = ?err.code, message = %err.message, "command failed");
                }
                (result, quit)
            }
            Err(err) => {
                warn!(bytes = buf.len(), %err, "input line is not valid UTF-8");
                (
                    Err(ApiError::invalid_command("input line is not valid UTF-8")),
                    false,
                )
            }
        };

        let reply = serde_json::to_string(&Reply::from(result)).map_err(io::Error::other)?;
        writeln!(output, "{}", reply)?;
        output.flush()?;

        if quit {
            return Ok(());
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=tillbook=trace` - Show trace for tillbook crates only
/// - Default: INFO, DEBUG for tillbook crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tillbook=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
