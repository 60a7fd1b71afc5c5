//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::bench::{DEFAULT_ITERATIONS, DEFAULT_WARMUP};

/// has-flag - Check whether a command-line flag is present.
#[derive(Debug, Parser)]
#[command(name = "has-flag")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check whether a flag is present in an argument list
    Check(CheckArgs),

    /// Time the baseline and short-circuit checks against each other
    Bench(BenchArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Flag name, with or without leading dashes
    #[arg(allow_hyphen_values = true)]
    pub flag: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Argument list to inspect, taken verbatim after `--`
    #[arg(last = true)]
    pub args: Vec<String>,
}

/// Arguments for the `bench` command.
#[derive(Debug, Clone, clap::Args)]
pub struct BenchArgs {
    /// Timed calls per scenario and variant
    #[arg(
        short = 'n',
        long,
        env = "HAS_FLAG_BENCH_ITERATIONS",
        default_value_t = DEFAULT_ITERATIONS
    )]
    pub iterations: usize,

    /// Untimed warmup calls per scenario and variant
    #[arg(long, env = "HAS_FLAG_BENCH_WARMUP", default_value_t = DEFAULT_WARMUP)]
    pub warmup: usize,

    /// Only run scenarios whose name contains this text (repeatable)
    #[arg(short, long = "scenario")]
    pub scenarios: Vec<String>,

    /// List scenarios without running them
    #[arg(long)]
    pub list: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl Default for BenchArgs {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            warmup: DEFAULT_WARMUP,
            scenarios: Vec::new(),
            list: false,
            json: false,
        }
    }
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn check_takes_args_after_separator() {
        let cli = Cli::parse_from([
            "has-flag",
            "check",
            "unicorn",
            "--",
            "--foo",
            "--",
            "--unicorn",
        ]);
        let Commands::Check(args) = cli.command else {
            panic!("Expected Check command");
        };
        assert_eq!(args.flag, "unicorn");
        assert_eq!(args.args, ["--foo", "--", "--unicorn"]);
    }

    #[test]
    fn check_accepts_dashed_flag() {
        let cli = Cli::parse_from(["has-flag", "check", "--unicorn", "--", "--unicorn"]);
        let Commands::Check(args) = cli.command else {
            panic!("Expected Check command");
        };
        assert_eq!(args.flag, "--unicorn");
    }

    #[test]
    fn check_without_args_is_empty() {
        let cli = Cli::parse_from(["has-flag", "check", "x"]);
        let Commands::Check(args) = cli.command else {
            panic!("Expected Check command");
        };
        assert!(args.args.is_empty());
    }

    #[test]
    fn bench_parses_iterations_and_scenarios() {
        let cli = Cli::parse_from([
            "has-flag",
            "bench",
            "-n",
            "100",
            "--scenario",
            "large",
            "--scenario",
            "short",
        ]);
        let Commands::Bench(args) = cli.command else {
            panic!("Expected Bench command");
        };
        assert_eq!(args.iterations, 100);
        assert_eq!(args.scenarios, ["large", "short"]);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["has-flag", "bench", "--quiet", "--debug"]);
        assert!(cli.quiet);
        assert!(cli.debug);
    }
}
