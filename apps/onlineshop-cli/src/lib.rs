//! # onlineshop-cli
//!
//! Line-oriented front end for the online shop registry.
//!
//! ## Module Organization
//! ```text
//! onlineshop_cli/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── config.rs       ◄─── Environment configuration
//! ├── command.rs      ◄─── Input line → Command
//! ├── engine.rs       ◄─── Command → Registry → output
//! └── error.rs        ◄─── CliError + error codes
//! ```
//!
//! ## Startup Sequence
//! 1. Load configuration from the environment
//! 2. Initialize tracing (stderr, so stdout carries only results)
//! 3. Open the input (file argument or stdin)
//! 4. Run the session until EOF or `Close`

pub mod command;
pub mod config;
pub mod engine;
pub mod error;

use std::fs::File;
use std::io::{self, BufReader};

use tracing::info;
use tracing_subscriber::EnvFilter;

pub use command::{Command, ParseError};
pub use config::{OutputFormat, ShopConfig};
pub use engine::{Engine, Reply, SessionStats};
pub use error::{CliError, CliResult, ErrorCode};

/// Runs one shop session.
///
/// Reads commands from the file named by the first argument, or from stdin
/// when there is none.
pub fn run() -> CliResult<()> {
    let config = ShopConfig::load()?;
    init_tracing(&config);

    let input = std::env::args().nth(1);
    info!(
        output = %config.output,
        stop_on_error = config.stop_on_error,
        input = input.as_deref().unwrap_or("<stdin>"),
        "starting shop session"
    );

    let mut engine = Engine::new();
    let stdout = io::stdout();
    let stats = match input {
        Some(path) => {
            let file = File::open(&path)?;
            engine.run(BufReader::new(file), stdout.lock(), &config)?
        }
        None => engine.run(io::stdin().lock(), stdout.lock(), &config)?,
    };

    info!(
        executed = stats.executed,
        failed = stats.failed,
        computers = engine.registry().computer_count(),
        "shop session finished"
    );
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every executed command
/// - `ONLINESHOP_LOG=...` - Used when `RUST_LOG` is not set
/// - Default: `warn,onlineshop=info`
fn init_tracing(config: &ShopConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
