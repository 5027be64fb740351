//! CLI argument parsing for summarize-yt

use clap::Parser;
use std::path::PathBuf;

use crate::llm::LlmError;
use crate::transcript::TranscriptError;

#[derive(Parser, Debug)]
#[command(name = "summarize-yt")]
#[command(author, version, about = "Summarize YouTube videos using OpenRouter API.", long_about = None)]
#[command(after_help = "The API key is read from OPENROUTER_API_KEY (or the configured api-key-env).")]
pub struct Cli {
    /// The YouTube video URL to summarize
    pub url: String,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Model to use instead of the configured one
    #[arg(short, long)]
    pub model: Option<String>,

    /// Preferred transcript language code
    #[arg(short, long)]
    pub language: Option<String>,
}

/// The line printed to stderr when a run fails
///
/// Transport failures already read "Error fetching transcript: ..." or
/// "Error communicating with OpenRouter API: ..." and are printed as is.
pub fn error_line(report: &eyre::Report) -> String {
    let transport = report.downcast_ref::<TranscriptError>().is_some_and(TranscriptError::is_transport)
        || report.downcast_ref::<LlmError>().is_some_and(LlmError::is_transport);

    if transport {
        report.to_string()
    } else {
        format!("Error: {:#}", report)
    }
}
