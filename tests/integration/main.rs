//! Integration test harness.

mod helpers;
