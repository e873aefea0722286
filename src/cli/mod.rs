//! Command-line interface
//!
//! Argument parsing and command handlers for the `fwguard` binary.

pub mod args;
pub mod commands;
