//! Extraction of PSP-side hex dumps from wireless plugin trace logs.
//!
//! The wireless bridge traces every transfer to and from the PSP plugin as a
//! `Sent:`/`Received:` marker line followed by the payload as offset-prefixed
//! hex-dump rows. This crate pulls those rows back out of a raw `log.txt`,
//! concatenating every dump block into a single `pspside.txt` suitable for
//! offline inspection.

pub mod dissect;

pub use dissect::{extract_log, filter_lines, DissectError, DumpExtractor, ScanStats};
