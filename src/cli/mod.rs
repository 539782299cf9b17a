//! Command-line entry point: global configuration flags and subcommands

pub mod commands;

pub use commands::{Cli, Commands, GlobalOptions, RecentAction, run};
