//! Command handlers for the realmdex CLI
//!
//! Each subcommand has its own module with handler functions.

pub mod catalog;
pub mod configure;
pub mod generate;
