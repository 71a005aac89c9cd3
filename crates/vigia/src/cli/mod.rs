//! Command-line interface for vigia.
//!
//! This module provides the CLI structure for the `vigiactl` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    ConfigCommand, InspectionsCommand, OutputFormat, RosterCommand, ScopeArgs, TalksCommand,
};

/// vigiactl - Inspect rosters, inspections, and safety talks from the terminal
///
/// Ad-hoc inspection of dashboard datasets: order personnel by rank, restrict
/// inspections and safety talks to a station scope, and manage configuration.
#[derive(Debug, Parser)]
#[command(name = "vigiactl")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Work with the personnel roster
    #[command(subcommand)]
    Roster(RosterCommand),

    /// Work with equipment inspections
    #[command(subcommand)]
    Inspections(InspectionsCommand),

    /// Work with scheduled safety talks
    #[command(subcommand)]
    Talks(TalksCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}
