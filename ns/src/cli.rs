//! CLI argument parsing for nanoseed

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ns")]
#[command(author, version, about = "Seed agent workspace files from templates", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create any missing workspace files (never overwrites)
    Seed {
        /// Workspace root (default from config)
        #[arg(short, long)]
        workspace: Option<PathBuf>,

        /// Use this template directory instead of searching
        #[arg(short, long)]
        template_dir: Option<PathBuf>,
    },

    /// Print the template directory that seeding would use
    Resolve,

    /// Show which workspace files exist
    Status {
        /// Workspace root (default from config)
        #[arg(short, long)]
        workspace: Option<PathBuf>,
    },
}
