//! CLI module for toolhub - command-line interface and subcommands.
//!
//! Each subcommand drives one controller operation against a live server
//! and prints the resulting page fragment.

pub mod commands;

pub use commands::Cli;
