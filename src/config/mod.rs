//! Configuration module
//!
//! Turns a firmware configuration header into the flat name → raw value
//! mapping the validation rules consume.

pub mod loader;
pub mod schema;

pub use loader::{HeaderLimits, HeaderLoader, LoaderOptions, parse_header};
pub use schema::ConfigurationSet;
