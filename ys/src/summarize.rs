//! Transcript summarization

use std::sync::Arc;

use log::debug;

use crate::llm::{CompletionRequest, LlmClient, LlmError, Message};

const SYSTEM_PROMPT: &str = "You are a helpful assistant that summarizes video transcripts.";

const INSTRUCTIONS: &str = "Please provide a comprehensive and structured summary of the following video transcript. \
Use markdown formatting with headers and bullet points. \
Focus on the main ideas, key arguments, and any actionable takeaways.";

/// Build the user prompt for a transcript
pub fn summary_prompt(transcript: &str) -> String {
    format!("{}\n\nTranscript:\n{}", INSTRUCTIONS, transcript)
}

/// Turns transcripts into markdown summaries via an LLM
pub struct Summarizer {
    llm: Arc<dyn LlmClient>,
}

impl Summarizer {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    pub async fn summarize(&self, transcript: &str) -> Result<String, LlmError> {
        debug!("Summarizer::summarize: transcript_len={}", transcript.len());
        let request = CompletionRequest {
            messages: vec![Message::system(SYSTEM_PROMPT), Message::user(summary_prompt(transcript))],
            max_tokens: None,
        };

        let response = self.llm.complete(request).await?;
        debug!(
            "Summarizer::summarize: tokens in={} out={}",
            response.usage.input_tokens, response.usage.output_tokens
        );
        Ok(response.content)
    }
}
