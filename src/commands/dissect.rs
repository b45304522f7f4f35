//! Dissect command handler.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use pspdump::dissect::extract_log;

/// Log file the wireless bridge writes its trace output to.
const LOG_FILE_NAME: &str = "log.txt";

/// Destination for the concatenated PSP-side hex dumps.
const OUTPUT_FILE_NAME: &str = "pspside.txt";

/// Extract the PSP-side dump blocks from `log.txt` into `pspside.txt`,
/// both resolved against the current working directory.
pub fn handle() -> Result<()> {
    let stats = extract_log(Path::new(LOG_FILE_NAME), Path::new(OUTPUT_FILE_NAME))
        .context("Failed to dissect trace log")?;

    info!(
        lines = stats.lines_scanned,
        markers = stats.triggers_seen,
        rows = stats.rows_captured,
        "wrote {}",
        OUTPUT_FILE_NAME
    );

    Ok(())
}
