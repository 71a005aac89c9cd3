//! `vigiactl` - CLI for vigia
//!
//! Ad-hoc inspection of dashboard datasets: roster ordering, scope-filtered
//! inspection and safety-talk listings, and configuration management.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::path::Path;

use anyhow::Context;
use chrono::Utc;
use clap::Parser;

use vigia::cli::{
    Cli, Command, ConfigCommand, InspectionsCommand, OutputFormat, RosterCommand, ScopeArgs,
    TalksCommand,
};
use vigia::source::{JsonSource, RecordSource};
use vigia::{guard, init_logging, Config, Error};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    // Execute the command
    match cli.command {
        Command::Roster(RosterCommand::Sort {
            file,
            limit,
            format,
        }) => roster_sort(&config, &file, limit, format).await,
        Command::Inspections(InspectionsCommand::List {
            file,
            scope,
            format,
        }) => inspections_list(&config, &file, &scope, format).await,
        Command::Talks(TalksCommand::List {
            file,
            scope,
            within_days,
            format,
        }) => talks_list(&config, &file, &scope, within_days, format).await,
        Command::Config(config_cmd) => handle_config(&config, config_cmd),
    }
}

/// Load one dataset section through the deadline guard, surfacing an elapsed
/// deadline as a timeout error at this boundary.
async fn load_guarded<T>(
    config: &Config,
    source: &JsonSource,
    op: impl std::future::Future<Output = vigia::Result<Vec<T>>>,
    what: &str,
) -> anyhow::Result<Vec<T>> {
    guard::try_with_deadline(op, config.deadline())
        .await
        .with_context(|| format!("loading {what}"))?
        .ok_or_else(|| Error::timeout(format!("loading {what} from {}", source.describe())))
        .map_err(Into::into)
}

async fn roster_sort(
    config: &Config,
    file: &Path,
    limit: Option<usize>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let source = JsonSource::new(file);
    let employees = load_guarded(config, &source, source.employees(), "roster").await?;

    let table = config.rank_table();
    let mut sorted = table.sorted(&employees);
    if let Some(limit) = limit {
        sorted.truncate(limit);
    }

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&sorted)?),
        OutputFormat::Plain => {
            for employee in &sorted {
                println!("{}", employee.full_name);
            }
        }
        OutputFormat::Table => {
            if sorted.is_empty() {
                println!("No personnel records in {}", source.describe());
                return Ok(());
            }
            println!("{:<6}{:<28}{}", "RANK", "NAME", "POSITION");
            for employee in &sorted {
                println!(
                    "{:<6}{:<28}{}",
                    table.rank_of_employee(employee),
                    employee.full_name,
                    employee.position.as_deref().unwrap_or("-"),
                );
            }
        }
    }
    Ok(())
}

async fn inspections_list(
    config: &Config,
    file: &Path,
    scope_args: &ScopeArgs,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let source = JsonSource::new(file);
    let inspections = load_guarded(config, &source, source.inspections(), "inspections").await?;

    let scope = scope_args.to_scope();
    let visible = config.scope_filter().filter(&scope, &inspections);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&visible)?),
        OutputFormat::Plain => {
            for inspection in &visible {
                println!("{}", inspection.equipment);
            }
        }
        OutputFormat::Table => {
            if visible.is_empty() {
                println!("No inspections visible under this scope.");
                return Ok(());
            }
            println!(
                "{:<12}{:<28}{:<10}{}",
                "STATION", "EQUIPMENT", "STATUS", "DATE"
            );
            for inspection in &visible {
                println!(
                    "{:<12}{:<28}{:<10}{}",
                    inspection.station.as_deref().unwrap_or("-"),
                    inspection.equipment,
                    inspection.status,
                    inspection.inspected_at.format("%Y-%m-%d"),
                );
            }
        }
    }
    Ok(())
}

async fn talks_list(
    config: &Config,
    file: &Path,
    scope_args: &ScopeArgs,
    within_days: Option<i64>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let source = JsonSource::new(file);
    let talks = load_guarded(config, &source, source.talks(), "safety talks").await?;

    let scope = scope_args.to_scope();
    let mut visible = config.scope_filter().filter(&scope, &talks);

    if let Some(days) = within_days {
        let now = Utc::now();
        let horizon = now + chrono::Duration::days(days);
        visible.retain(|t| t.scheduled_for >= now && t.scheduled_for <= horizon);
    }

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&visible)?),
        OutputFormat::Plain => {
            for talk in &visible {
                println!("{}", talk.topic);
            }
        }
        OutputFormat::Table => {
            if visible.is_empty() {
                println!("No safety talks visible under this scope.");
                return Ok(());
            }
            println!("{:<12}{:<36}{}", "STATION", "TOPIC", "SCHEDULED");
            for talk in &visible {
                println!(
                    "{:<12}{:<36}{}",
                    talk.station.as_deref().unwrap_or("-"),
                    talk.topic,
                    talk.scheduled_for.format("%Y-%m-%d %H:%M"),
                );
            }
        }
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Roster]");
                if config.roster.rank_overrides.is_empty() {
                    println!("  Rank table:        built-in");
                } else {
                    println!(
                        "  Rank overrides:    {} entries",
                        config.roster.rank_overrides.len()
                    );
                }
                println!();
                println!("[Scope]");
                println!(
                    "  Global aliases:    {}",
                    config.scope.global_aliases.join(", ")
                );
                println!();
                println!("[Fetch]");
                println!("  Deadline (ms):     {}", config.fetch.deadline_ms);
                println!();
                println!("[Data]");
                println!("  Dataset dir:       {}", config.dataset_dir().display());
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
