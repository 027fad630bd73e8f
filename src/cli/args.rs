//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint};

/// Expression optimizer client: tokens, per-line AST trees, steps and variables
#[derive(Parser, Debug)]
#[command(name = "exprlens")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Optimizer base URL (overrides config)
    #[arg(long, global = true, value_hint = ValueHint::Url)]
    pub server: Option<String>,

    /// Request timeout in seconds (overrides config)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Directory with a local .exprlens.toml (default: cwd)
    #[arg(short = 'C', long, global = true, value_hint = ValueHint::DirPath)]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Optimize expressions and show tokens, trees, steps and variables
    Optimize {
        #[command(flatten)]
        input: InputArgs,

        /// Write one SVG per tree into this directory
        #[arg(long, value_hint = ValueHint::DirPath)]
        svg_dir: Option<PathBuf>,

        /// Write an HTML report
        #[arg(long, value_hint = ValueHint::FilePath)]
        html: Option<PathBuf>,

        /// Exit non-zero when the optimization fails
        #[arg(long)]
        fail_on_error: bool,
    },

    /// Show display tokens without contacting the optimizer
    Tokenize {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Where the expression comes from.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Expression lines; reads stdin when absent or `-`
    pub expressions: Vec<String>,

    /// Read the expression from a file
    #[arg(short, long, value_hint = ValueHint::FilePath, conflicts_with = "expressions")]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print effective settings as TOML
    Show,
    /// Print config file locations
    Path,
}
