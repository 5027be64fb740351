//! NanoSeed - workspace seeding CLI

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use tracing::{debug, info};

use nanoseed::cli::{Cli, Command};
use nanoseed::config::Config;
use nanoseed::{PathState, TemplateResolver, WorkspaceSeeder, inspect_workspace};

fn parse_level(level: Option<&str>) -> tracing::Level {
    match level.map(|s| s.to_uppercase()) {
        None => tracing::Level::INFO,
        Some(s) => match s.as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", s);
                tracing::Level::INFO
            }
        },
    }
}

// Logs go to stderr; stdout carries command output.
fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    let level = parse_level(cli_log_level.or(config_log_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .try_init()
        .map_err(|e| eyre::eyre!("{}", e))?;

    debug!("Logging initialized (level: {:?})", level);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Priority: CLI > config > INFO
    let config_log_level = Config::load_log_level(cli.config.as_ref());
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    let resolver = TemplateResolver::from_config(&config.templates);

    debug!(command = ?cli.command, "main: dispatching command");
    match cli.command {
        Command::Seed {
            workspace,
            template_dir,
        } => {
            let workspace = workspace.unwrap_or_else(|| config.workspace_path());
            info!("Seeding workspace {}", workspace.display());

            let created = WorkspaceSeeder::new(resolver).seed(&workspace, template_dir.as_deref());
            if created.is_empty() && !workspace.is_dir() {
                println!(
                    "{} Workspace not seeded, cannot create {}",
                    "✗".red(),
                    workspace.display().to_string().cyan()
                );
            } else if created.is_empty() {
                println!("Workspace already seeded: {}", workspace.display().to_string().cyan());
            } else {
                for path in &created {
                    println!("{} {}", "✓".green(), path);
                }
            }
        }
        Command::Resolve => match resolver.resolve() {
            Some(dir) => println!("{}", dir.display()),
            None => println!("none"),
        },
        Command::Status { workspace } => {
            let workspace = workspace.unwrap_or_else(|| config.workspace_path());
            let status = inspect_workspace(&workspace);

            println!("Workspace: {}", status.workspace.display().to_string().cyan());
            for (path, state) in &status.files {
                print_state(path, *state);
            }
            print_state("skills/", status.skills_dir);
        }
    }

    Ok(())
}

fn print_state(path: &str, state: PathState) {
    match state {
        PathState::Present => println!("  {} {}", "✓".green(), path),
        PathState::Missing => println!("  {} {} {}", "✗".red(), path, "(missing)".dimmed()),
    }
}
