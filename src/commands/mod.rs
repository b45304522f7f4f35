//! Command handlers for the pspdump binary.

pub mod dissect;
