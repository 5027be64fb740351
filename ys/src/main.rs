//! summarize-yt - print a markdown summary of a YouTube video

use std::sync::Arc;

use clap::Parser;
use eyre::{Context, Result};
use log::info;

use ytsummary::cli::{Cli, error_line};
use ytsummary::config::Config;
use ytsummary::{OpenRouterClient, RULE_WIDTH, Summarizer, TranscriptClient, extract_video_id};

fn setup_logging() {
    // RUST_LOG overrides the default
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    if let Some(model) = cli.model {
        config.llm.model = model;
    }
    if let Some(language) = cli.language {
        config.transcript.language = language;
    }

    // Fail on a missing key before any network traffic
    let llm = OpenRouterClient::from_config(&config.llm)?;
    info!("summarize-yt starting (model: {})", llm.model());

    let video_id = extract_video_id(&cli.url)?;
    eprintln!("Fetching transcript for video ID: {}...", video_id);
    let transcript = TranscriptClient::from_config(&config.transcript)?
        .fetch(&video_id)
        .await?;

    eprintln!("Generating summary...");
    let summary = Summarizer::new(Arc::new(llm)).summarize(&transcript).await?;

    let rule = "=".repeat(RULE_WIDTH);
    println!("\n{}\n", rule);
    println!("{}", summary);
    println!("\n{}\n", rule);
    Ok(())
}

#[tokio::main]
async fn main() {
    setup_logging();
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("{}", error_line(&e));
        std::process::exit(1);
    }
}
