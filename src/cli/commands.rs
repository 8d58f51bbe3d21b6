//! CLI commands and argument parsing

use crate::pager::OutOfBoundsStrategy;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Offset pagination over line-oriented result sets
#[derive(Parser, Debug)]
#[command(name = "offset-pager")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Pager configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Out of bounds strategy (overrides the config file)
    #[arg(short, long, global = true)]
    pub strategy: Option<StrategyArg>,

    /// Elements per logical page (overrides the config file)
    #[arg(long, global = true)]
    pub page_size: Option<usize>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print one logical page
    Page {
        /// Page number, starting at 1
        #[arg(short, long)]
        page: usize,

        /// Input file, one element per line (stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Elements per protocol page in async mode (overrides the config file)
        #[arg(long)]
        fetch_size: Option<usize>,

        /// Read through the chunked async pager instead of the blocking one
        #[arg(long = "async")]
        use_async: bool,
    },

    /// Print every logical page in order
    Walk {
        /// Input file, one element per line (stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Elements per protocol page (overrides the config file)
        #[arg(long)]
        fetch_size: Option<usize>,
    },
}

/// Out of bounds strategy as a command-line value
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StrategyArg {
    /// Fail when the page is past the end
    Fail,
    /// Return the last page instead
    ReturnLastPage,
    /// Return an empty page with the requested number
    ReturnEmptyPage,
}

impl From<StrategyArg> for OutOfBoundsStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Fail => OutOfBoundsStrategy::Fail,
            StrategyArg::ReturnLastPage => OutOfBoundsStrategy::ReturnLastPage,
            StrategyArg::ReturnEmptyPage => OutOfBoundsStrategy::ReturnEmptyPage,
        }
    }
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one page per line)
    Json,
    /// Human-readable output
    Pretty,
}
