//! Operator command-line interface

pub mod commands;

pub use commands::{AppState, CliResult};
