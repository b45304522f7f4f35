//! Two-state capture scan over a trace log.
//!
//! The scan walks the log once, line by line, with a single `capturing`
//! flag. A transfer marker opens a capture window; every consecutive dump
//! row inside the window is collected; the first non-row line closes the
//! window again. The closing line is discarded without being re-examined as
//! a marker, so a fresh window can only open on a later line.

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use super::error::DissectError;
use super::patterns::TracePatterns;

/// Counters reported after a scan.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanStats {
    /// Total lines examined.
    pub lines_scanned: usize,
    /// Transfer markers that opened a capture window.
    pub triggers_seen: usize,
    /// Hex-dump rows collected into the output.
    pub rows_captured: usize,
}

/// Collects hex-dump rows that follow `Sent:`/`Received:` transfer markers.
///
/// Feed lines in file order with [`push_line`](Self::push_line); the
/// concatenated rows come back from [`finish`](Self::finish). A marker line
/// itself is never collected, even if it would also match the dump-row
/// shape.
#[derive(Debug)]
pub struct DumpExtractor {
    patterns: TracePatterns,
    capturing: bool,
    collected: String,
    stats: ScanStats,
}

impl DumpExtractor {
    pub fn new() -> Result<Self, DissectError> {
        Ok(Self {
            patterns: TracePatterns::compile()?,
            capturing: false,
            collected: String::new(),
            stats: ScanStats::default(),
        })
    }

    /// Examine one line, without its trailing newline.
    pub fn push_line(&mut self, line: &str) {
        self.stats.lines_scanned += 1;

        if self.capturing {
            if self.patterns.is_dump_row(line) {
                self.collected.push_str(line);
                self.collected.push('\n');
                self.stats.rows_captured += 1;
            } else {
                // Closes the window. The line is not re-tested as a marker;
                // the next line starts from idle.
                self.capturing = false;
            }
        } else if self.patterns.is_trigger(line) {
            debug!(line = self.stats.lines_scanned, "capture window opened");
            self.capturing = true;
            self.stats.triggers_seen += 1;
        }
    }

    /// Counters for the lines examined so far.
    pub fn stats(&self) -> ScanStats {
        self.stats
    }

    /// Consume the extractor, returning the collected rows.
    ///
    /// A window still open at end of input keeps whatever it collected.
    pub fn finish(self) -> String {
        self.collected
    }
}

/// Filter an in-memory sequence of lines, returning the collected rows.
pub fn filter_lines<'a, I>(lines: I) -> Result<String, DissectError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut extractor = DumpExtractor::new()?;
    for line in lines {
        extractor.push_line(line);
    }
    Ok(extractor.finish())
}

/// Extract every dump block from the trace log at `input` into `output`.
///
/// The input is read line by line; the output is written exactly once after
/// the full scan, truncating any previous content. The written file may be
/// empty when the log contains no capturable rows.
pub fn extract_log(input: &Path, output: &Path) -> Result<ScanStats, DissectError> {
    let read_err = |source| DissectError::ReadInput {
        path: input.to_path_buf(),
        source,
    };

    let file = File::open(input).map_err(read_err)?;
    let mut extractor = DumpExtractor::new()?;

    for line in BufReader::new(file).lines() {
        let line = line.map_err(read_err)?;
        extractor.push_line(&line);
    }

    let stats = extractor.stats();
    fs::write(output, extractor.finish()).map_err(|source| DissectError::WriteOutput {
        path: output.to_path_buf(),
        source,
    })?;

    Ok(stats)
}
