//! Hex-dump extraction from wireless plugin trace logs.
//!
//! The plugin logs each transfer as a trace marker line
//! (`WirelessPSPPluginDevice.cpp:<line>:Sent:` or `:Received:`) followed by
//! the payload rendered as hex-dump rows, one row per 64 octets, each row
//! prefixed with a six-digit zero-padded offset. The extraction is a single
//! forward pass: a marker opens a capture window, consecutive dump rows are
//! collected, and the first non-row line closes the window.
//!
//! # Module Structure
//!
//! - [`patterns`] - compiled line classifiers
//! - [`scan`] - the capture scan and file-to-file operation
//! - [`error`] - typed errors for the module

mod error;
mod patterns;
mod scan;

pub use error::DissectError;
pub use patterns::TracePatterns;
pub use scan::{extract_log, filter_lines, DumpExtractor, ScanStats};
