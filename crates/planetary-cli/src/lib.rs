//! CLI library for the planetary record service.
//!
//! The binary in `main.rs` is the composition root; everything reusable
//! (argument parsing, context bootstrap, command handlers) lives here.

#![deny(unsafe_code)]

pub mod bootstrap;
pub mod commands;
pub mod handlers;
pub mod parser;

pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::Commands;
pub use parser::Cli;
