//! Command-line interface definitions.
//!
//! This module contains only clap struct definitions - no business logic.
//! All command implementations are in the `commands` module.

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// kata - classic data-structure and algorithm exercises
#[derive(Parser, Debug)]
#[command(name = "kata", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check whether a number is prime
    Prime(PrimeArgs),

    /// Run a dynamic-array script
    Array(ScriptArgs),

    /// Run a linked-list script
    List(ScriptArgs),

    /// Replay the demonstration scripts
    Demo(DemoArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `prime` command.
#[derive(Args, Debug)]
pub struct PrimeArgs {
    /// Number to test
    #[arg(allow_negative_numbers = true)]
    pub number: i64,
}

/// Arguments for the `array` and `list` commands.
#[derive(Args, Debug)]
pub struct ScriptArgs {
    /// JSON script, e.g. '["Array", 1, "pushback", 2, "getSize"]'
    pub script: String,

    /// Treat SCRIPT as a file path (use '-' for stdin)
    #[arg(long, short)]
    pub file: bool,

    /// Pretty-print the JSON outputs
    #[arg(long)]
    pub pretty: bool,
}

/// Arguments for the `demo` command.
#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Which demonstration to replay
    #[arg(default_value = "all")]
    pub target: DemoTarget,
}

/// Demonstration scripts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum DemoTarget {
    /// Dynamic array
    Array,
    /// Linked list
    List,
    /// Both, array first
    #[default]
    All,
}

/// Arguments for the `completions` command.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
