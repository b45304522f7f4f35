//! pspdump - extracts PSP-side hex dumps from wireless plugin trace logs.
//!
//! Reads `log.txt` from the working directory and writes every captured
//! dump block to `pspside.txt`. Takes no arguments; any argv content is
//! ignored.

use anyhow::Result;

mod commands;

fn main() -> Result<()> {
    // Progress and errors go to stderr; the dump file is the only artifact.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    commands::dissect::handle()
}
