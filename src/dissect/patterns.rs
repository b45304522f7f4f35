//! Line classification for wireless plugin trace logs.

use regex::Regex;

use super::error::DissectError;

/// Compiled classifiers for the line shapes the capture scan cares about.
///
/// Marker matching is case-sensitive and unanchored: the marker may sit
/// anywhere in the line, after the logger's timestamp and level prefix. Dump
/// row matching is anchored at the start of the line.
#[derive(Debug)]
pub struct TracePatterns {
    sent: Regex,
    received: Regex,
    dump_row: Regex,
}

impl TracePatterns {
    /// Compile the classifiers.
    pub fn compile() -> Result<Self, DissectError> {
        Ok(Self {
            sent: Regex::new(r"WirelessPSPPluginDevice\.cpp:\d*:Sent:")?,
            received: Regex::new(r"WirelessPSPPluginDevice\.cpp:\d*:Received:")?,
            // The plugin pads dump offsets to six digits but renders them in
            // hex; a row whose offset contains a letter never matches.
            dump_row: Regex::new(r"^\d{6} ")?,
        })
    }

    /// True when `line` carries a `Sent:` or `Received:` transfer marker.
    pub fn is_trigger(&self, line: &str) -> bool {
        self.sent.is_match(line) || self.received.is_match(line)
    }

    /// True when `line` is a hex-dump row: exactly six decimal digits, one
    /// space, then arbitrary (possibly empty) content.
    pub fn is_dump_row(&self, line: &str) -> bool {
        self.dump_row.is_match(line)
    }
}
