//! Encrypt a private key with bip-0038 standard and do the reverse.

use seal38::cli::{handle_arguments, init_clap};
use tracing_subscriber::EnvFilter;

/// Whirlpool of the project.
fn main() {
    // stdout carries the results, diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn"))
        )
        .with_writer(std::io::stderr)
        .init();

    handle_arguments(&init_clap().get_matches()).unwrap_or_else(|err| {
        eprintln!("\x1b[31m\x1b[1merror\x1b[m: {}", err);
        std::process::exit(err.status());
    });
}
