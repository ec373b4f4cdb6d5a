//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use citymatch_cli::CliError;
use tracing_subscriber::EnvFilter;

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr before exiting"
)]
fn main() {
    init_logging();
    match citymatch_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) if !err.use_stderr() => err.exit(),
        Err(err) => {
            eprintln!("citymatch: {err}");
            std::process::exit(1);
        }
    }
}

/// Route `log` records from the library crates to stderr, filtered by
/// `RUST_LOG` and defaulting to warnings.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
