//! Transcript download
//!
//! The watch page embeds a player response JSON document listing caption
//! tracks. Each track's `baseUrl` serves a timed-text XML file whose `<text>`
//! cues make up the transcript.

use std::time::Duration;

use log::debug;
use regex::Regex;
use reqwest::Client;
use scraper::{Html, Selector};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::config::TranscriptConfig;

#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("Transcripts are disabled for this video.")]
    Disabled,

    #[error("No transcript found for this video.")]
    NotFound,

    #[error("Error fetching transcript: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Error fetching transcript: {0}")]
    InvalidResponse(String),

    #[error("Error fetching transcript: {0}")]
    Pattern(#[from] regex::Error),
}

impl TranscriptError {
    /// True when the message already names the failing step
    pub fn is_transport(&self) -> bool {
        !matches!(self, TranscriptError::Disabled | TranscriptError::NotFound)
    }
}

/// One caption track advertised by the player response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CaptionTrack {
    #[serde(rename = "baseUrl")]
    pub base_url: String,
    #[serde(rename = "languageCode", default)]
    pub language_code: String,
    /// `asr` for auto-generated captions
    #[serde(default)]
    pub kind: Option<String>,
}

impl CaptionTrack {
    pub fn is_generated(&self) -> bool {
        self.kind.as_deref() == Some("asr")
    }
}

/// Downloads transcripts over HTTP
pub struct TranscriptClient {
    http: Client,
    base_url: String,
    language: String,
}

impl TranscriptClient {
    pub fn from_config(config: &TranscriptConfig) -> Result<Self, TranscriptError> {
        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent("Mozilla/5.0 (X11; Linux x86_64) ytsummary")
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            language: config.language.clone(),
        })
    }

    /// Fetch the full transcript text for a video, cues joined by spaces
    pub async fn fetch(&self, video_id: &str) -> Result<String, TranscriptError> {
        let watch_url = format!("{}/watch?v={}", self.base_url, video_id);
        debug!("TranscriptClient::fetch: loading {watch_url}");

        let page = self
            .http
            .get(&watch_url)
            .header("Accept-Language", format!("{},en;q=0.8", self.language))
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let tracks = caption_tracks(&page)?;
        let track = select_track(&tracks, &self.language).ok_or(TranscriptError::NotFound)?;
        debug!(
            "TranscriptClient::fetch: using {} track (generated: {})",
            track.language_code,
            track.is_generated()
        );

        let xml = self
            .http
            .get(&track.base_url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let text = parse_timed_text(&xml)?;
        if text.trim().is_empty() {
            return Err(TranscriptError::NotFound);
        }
        Ok(text)
    }
}

/// Pull the embedded player response object out of a watch page
pub fn extract_player_response(html: &str) -> Result<Option<Value>, TranscriptError> {
    let re = Regex::new(r"ytInitialPlayerResponse\s*=\s*\{")?;
    let Some(m) = re.find(html) else {
        return Ok(None);
    };

    // The object is followed by script text; only the first value is parsed
    let json = &html[m.end() - 1..];
    let value = serde_json::Deserializer::from_str(json)
        .into_iter::<Value>()
        .next()
        .and_then(|v| v.ok());
    Ok(value)
}

/// Caption tracks listed on a watch page
pub fn caption_tracks(html: &str) -> Result<Vec<CaptionTrack>, TranscriptError> {
    let player = extract_player_response(html)?
        .ok_or_else(|| TranscriptError::InvalidResponse("player response not found on video page".to_string()))?;

    if let Some(status) = player["playabilityStatus"]["status"].as_str()
        && status != "OK"
    {
        let reason = player["playabilityStatus"]["reason"].as_str().unwrap_or(status);
        return Err(TranscriptError::InvalidResponse(format!("video unavailable: {}", reason)));
    }

    let Some(renderer) = player["captions"].get("playerCaptionsTracklistRenderer") else {
        return Err(TranscriptError::Disabled);
    };

    let tracks: Vec<CaptionTrack> = match renderer.get("captionTracks") {
        Some(list) => serde_json::from_value(list.clone())
            .map_err(|e| TranscriptError::InvalidResponse(format!("malformed caption tracks: {}", e)))?,
        None => Vec::new(),
    };

    if tracks.is_empty() {
        return Err(TranscriptError::NotFound);
    }
    Ok(tracks)
}

/// Pick a track: manual in `language`, then generated in `language`, then the first listed
pub fn select_track<'a>(tracks: &'a [CaptionTrack], language: &str) -> Option<&'a CaptionTrack> {
    let matches_language = |t: &&CaptionTrack| t.language_code == language;
    tracks
        .iter()
        .filter(matches_language)
        .find(|t| !t.is_generated())
        .or_else(|| tracks.iter().find(matches_language))
        .or_else(|| tracks.first())
}

/// Join the cue texts of a timed-text document
///
/// Cue bodies are HTML carried inside XML: `it&amp;#39;s` is the XML form of
/// the HTML `it&#39;s`, and formatting arrives as escaped `<font>` tags. The
/// document is parsed once to get each body, then each body is parsed once
/// as an HTML fragment. Every layer is decoded exactly once, so escapes
/// present in the caption text itself survive.
pub fn parse_timed_text(xml: &str) -> Result<String, TranscriptError> {
    let cue = Selector::parse("text")
        .map_err(|e| TranscriptError::InvalidResponse(format!("invalid cue selector: {:?}", e)))?;
    let document = Html::parse_fragment(xml);

    let parts: Vec<String> = document
        .select(&cue)
        .map(|element| cue_text(&element.text().collect::<String>()))
        .filter(|t| !t.trim().is_empty())
        .collect();

    Ok(parts.join(" "))
}

/// Plain text of one cue body
fn cue_text(body: &str) -> String {
    Html::parse_fragment(body).root_element().text().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(player: &str) -> String {
        format!(
            "<html><script>var ytInitialPlayerResponse = {};var meta = document.createElement('meta');</script></html>",
            player
        )
    }

    #[test]
    fn test_caption_tracks_parsed() {
        let html = page(
            r#"{"playabilityStatus":{"status":"OK"},"captions":{"playerCaptionsTracklistRenderer":{"captionTracks":[
                {"baseUrl":"https://example.com/tt?lang=de","languageCode":"de"},
                {"baseUrl":"https://example.com/tt?lang=en&kind=asr","languageCode":"en","kind":"asr"}
            ]}}}"#,
        );

        let tracks = caption_tracks(&html).unwrap();
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].language_code, "de");
        assert!(tracks[1].is_generated());
    }

    #[test]
    fn test_no_captions_means_disabled() {
        let html = page(r#"{"playabilityStatus":{"status":"OK"},"videoDetails":{"title":"x; y"}}"#);
        assert!(matches!(caption_tracks(&html), Err(TranscriptError::Disabled)));
    }

    #[test]
    fn test_empty_track_list_means_not_found() {
        let html = page(r#"{"captions":{"playerCaptionsTracklistRenderer":{"captionTracks":[]}}}"#);
        assert!(matches!(caption_tracks(&html), Err(TranscriptError::NotFound)));
    }

    #[test]
    fn test_unplayable_video() {
        let html = page(r#"{"playabilityStatus":{"status":"ERROR","reason":"Video unavailable"}}"#);
        let err = caption_tracks(&html).unwrap_err();
        assert_eq!(err.to_string(), "Error fetching transcript: video unavailable: Video unavailable");
    }

    #[test]
    fn test_missing_player_response() {
        assert!(extract_player_response("<html></html>").unwrap().is_none());
        assert!(matches!(
            caption_tracks("<html></html>"),
            Err(TranscriptError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_select_track_preference() {
        let manual_de = CaptionTrack {
            base_url: "de".to_string(),
            language_code: "de".to_string(),
            kind: None,
        };
        let auto_en = CaptionTrack {
            base_url: "en-asr".to_string(),
            language_code: "en".to_string(),
            kind: Some("asr".to_string()),
        };
        let manual_en = CaptionTrack {
            base_url: "en".to_string(),
            language_code: "en".to_string(),
            kind: None,
        };

        let all = vec![manual_de.clone(), auto_en.clone(), manual_en.clone()];
        assert_eq!(select_track(&all, "en"), Some(&manual_en));

        let no_manual = vec![manual_de.clone(), auto_en.clone()];
        assert_eq!(select_track(&no_manual, "en"), Some(&auto_en));

        assert_eq!(select_track(&no_manual, "fr"), Some(&manual_de));
        assert_eq!(select_track(&[], "en"), None);
    }

    #[test]
    fn test_parse_timed_text() {
        let xml = r##"<?xml version="1.0" encoding="utf-8" ?><transcript>
            <text start="0.5" dur="1.2">Hello &amp;amp; welcome</text>
            <text start="1.7" dur="2.0">it&amp;#39;s <font color="#fff">great</font></text>
            <text start="3.7" dur="0.5">   </text>
            <text start="4.2" dur="1.0">bye &lt;3</text>
        </transcript>"##;

        assert_eq!(parse_timed_text(xml).unwrap(), "Hello & welcome it's great bye <3");
    }

    #[test]
    fn test_parse_timed_text_named_entities() {
        let xml = r#"<transcript><text start="0" dur="1">caf&amp;eacute; na&amp;iuml;ve &amp;mdash; ok</text></transcript>"#;
        assert_eq!(parse_timed_text(xml).unwrap(), "café naïve — ok");
    }

    #[test]
    fn test_parse_timed_text_escaped_formatting() {
        let xml = r##"<transcript><text start="0" dur="1">&lt;font color=&quot;#E5E5E5&quot;&gt;loud&lt;/font&gt; noises</text></transcript>"##;
        assert_eq!(parse_timed_text(xml).unwrap(), "loud noises");
    }

    #[test]
    fn test_parse_timed_text_decodes_each_layer_once() {
        // Angle brackets spoken in the caption, and an escape typed literally
        let xml = r#"<transcript>
            <text start="0" dur="1">a &amp;lt;b&amp;gt; c</text>
            <text start="1" dur="1">write &amp;amp;lt; for less-than</text>
        </transcript>"#;
        assert_eq!(parse_timed_text(xml).unwrap(), "a <b> c write &lt; for less-than");
    }

    #[test]
    fn test_parse_timed_text_empty() {
        assert_eq!(parse_timed_text("<transcript></transcript>").unwrap(), "");
    }
}
