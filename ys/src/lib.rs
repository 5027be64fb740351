//! ytsummary - YouTube transcript summarizer
//!
//! Fetches a video's caption transcript and asks an OpenRouter-hosted chat
//! model for a structured markdown summary.
//!
//! # Example
//!
//! ```ignore
//! use ytsummary::{Config, OpenRouterClient, Summarizer, TranscriptClient, extract_video_id};
//!
//! let config = Config::load(None)?;
//! let id = extract_video_id("https://youtu.be/dQw4w9WgXcQ")?;
//! let transcript = TranscriptClient::from_config(&config.transcript)?.fetch(&id).await?;
//! let llm = Arc::new(OpenRouterClient::from_config(&config.llm)?);
//! let summary = Summarizer::new(llm).summarize(&transcript).await?;
//! ```

pub mod cli;
pub mod config;
pub mod llm;
mod summarize;
mod transcript;
mod video;

pub use config::{Config, LlmConfig, TranscriptConfig};
pub use llm::{LlmClient, LlmError, OpenRouterClient};
pub use summarize::{Summarizer, summary_prompt};
pub use transcript::{
    CaptionTrack, TranscriptClient, TranscriptError, caption_tracks, parse_timed_text, select_track,
};
pub use video::{VideoIdError, extract_video_id};

/// Rule printed above and below the summary
pub const RULE_WIDTH: usize = 40;
