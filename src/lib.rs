//! Offshore winch drum spooling calculator.
//!
//! The calculation core lives in [`winch`]; settings, the named
//! configuration store and the command line sit around it.

pub mod app;
pub mod config;
pub mod conversion;
pub mod presets;
pub mod quantity;
pub mod store;
pub mod ui_cli;
pub mod units;
pub mod winch;
