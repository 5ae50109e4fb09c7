// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::types::LayoutStrategy;

/// Command-line arguments for `meshwork`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "meshwork",
    version,
    about = "Check, level and lay out task dependency graphs.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the task snapshot (a JSON array of tasks).
    #[arg(long, value_name = "PATH")]
    pub tasks: PathBuf,

    /// Path to the layout config file (TOML).
    ///
    /// Default: `meshwork.toml` in the current working directory if it
    /// exists, otherwise built-in defaults.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `MESHWORK_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Validate every record and the graph as a whole.
    Check,

    /// Print the topological level of every task.
    Levels,

    /// Print a position for every task.
    Layout {
        /// hierarchical, force or smart. Defaults to `[layout].strategy`.
        #[arg(long, value_name = "STRATEGY")]
        strategy: Option<LayoutStrategy>,

        /// Seed for the force simulation's starting positions.
        ///
        /// Defaults to one derived from the system clock.
        #[arg(long, value_name = "N")]
        seed: Option<u64>,

        /// Override `[force].iterations`.
        #[arg(long, value_name = "N")]
        iterations: Option<usize>,
    },

    /// Ask whether DEPENDENT may start depending on DEPENDENCY.
    Edge {
        #[arg(long, value_name = "ID")]
        dependency: String,

        #[arg(long, value_name = "ID")]
        dependent: String,
    },

    /// Print all transitive dependencies of a task.
    Closure { id: String },

    /// Print the tasks that directly depend on a task.
    Dependents { id: String },

    /// Ask whether a task may move to STATUS.
    Transition { id: String, status: String },

    /// Print status, user and tag statistics.
    Stats,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
