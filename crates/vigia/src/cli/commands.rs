//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::scope::AccessScope;

/// Station scope arguments shared by listing commands.
///
/// Without `--station` or `--all` the resulting scope is restricted and
/// stationless, which sees nothing: visibility is never widened by default.
#[derive(Debug, Clone, Args)]
pub struct ScopeArgs {
    /// Restrict to a single station (use "todas" or "all" for every station)
    #[arg(short, long, conflicts_with = "all")]
    pub station: Option<String>,

    /// View records from every station
    #[arg(short = 'a', long)]
    pub all: bool,
}

impl ScopeArgs {
    /// Build the access scope described by these arguments.
    #[must_use]
    pub fn to_scope(&self) -> AccessScope {
        AccessScope {
            station: self.station.clone(),
            view_all: self.all,
        }
    }
}

/// Roster commands.
#[derive(Debug, Subcommand)]
pub enum RosterCommand {
    /// Order personnel by inferred rank, most senior first
    Sort {
        /// Dataset file to read
        #[arg(short, long, value_name = "FILE")]
        file: PathBuf,

        /// Maximum number of rows to show
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output format
        #[arg(short = 'o', long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
}

/// Inspection commands.
#[derive(Debug, Subcommand)]
pub enum InspectionsCommand {
    /// List inspections visible under a station scope
    List {
        /// Dataset file to read
        #[arg(short, long, value_name = "FILE")]
        file: PathBuf,

        /// Station scope restriction
        #[command(flatten)]
        scope: ScopeArgs,

        /// Output format
        #[arg(short = 'o', long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
}

/// Safety talk commands.
#[derive(Debug, Subcommand)]
pub enum TalksCommand {
    /// List scheduled safety talks visible under a station scope
    List {
        /// Dataset file to read
        #[arg(short, long, value_name = "FILE")]
        file: PathBuf,

        /// Station scope restriction
        #[command(flatten)]
        scope: ScopeArgs,

        /// Only show talks scheduled within the next N days
        #[arg(long, value_name = "DAYS")]
        within_days: Option<i64>,

        /// Output format
        #[arg(short = 'o', long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Output format for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    Plain,
    /// Formatted table
    #[default]
    Table,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_args_to_scope_station() {
        let args = ScopeArgs {
            station: Some("Lima".to_string()),
            all: false,
        };
        let scope = args.to_scope();
        assert_eq!(scope.station.as_deref(), Some("Lima"));
        assert!(!scope.view_all);
    }

    #[test]
    fn test_scope_args_to_scope_all() {
        let args = ScopeArgs {
            station: None,
            all: true,
        };
        assert!(args.to_scope().view_all);
    }

    #[test]
    fn test_scope_args_default_is_restricted() {
        let args = ScopeArgs {
            station: None,
            all: false,
        };
        let scope = args.to_scope();
        assert!(!scope.view_all);
        assert!(scope.station.is_none());
    }

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Table);
    }
}
