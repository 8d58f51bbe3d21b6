//! CLI module
//!
//! Command-line interface for paging through line-oriented input.
//!
//! # Commands
//!
//! - `page` - Print one logical page
//! - `walk` - Print every logical page in order

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat, StrategyArg};
pub use runner::Runner;
