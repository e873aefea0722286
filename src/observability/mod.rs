//! Observability module
//!
//! Diagnostic logging for `fwguard`. Findings go to stdout through the
//! reporter; everything here goes to stderr.

pub mod logging;

pub use logging::{LogFormat, init_logging};
