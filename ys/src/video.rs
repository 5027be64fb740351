//! Video URL handling

use regex::Regex;
use thiserror::Error;

/// Matches watch, embed, `/v/`, `/e/`, channel-style and short-link URLs
const VIDEO_URL_PATTERN: &str = r"(?:https?://)?(?:www\.)?(?:youtube\.com/(?:[^/\n\s]+/\S+/|(?:v|e(?:mbed)?)/|\S*?[?&]v=)|youtu\.be/)([a-zA-Z0-9_-]{11})";

#[derive(Debug, Error)]
pub enum VideoIdError {
    #[error("Invalid YouTube URL")]
    InvalidUrl,

    #[error("Invalid video URL pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Extract the 11-character video ID from a YouTube URL
pub fn extract_video_id(url: &str) -> Result<String, VideoIdError> {
    let re = Regex::new(VIDEO_URL_PATTERN)?;
    re.captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or(VideoIdError::InvalidUrl)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_urls() {
        assert_eq!(extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ").unwrap(), "dQw4w9WgXcQ");
        assert_eq!(
            extract_video_id("https://youtube.com/watch?feature=share&v=dQw4w9WgXcQ&t=42").unwrap(),
            "dQw4w9WgXcQ"
        );
        assert_eq!(extract_video_id("youtube.com/watch?v=a_b-c1234XY").unwrap(), "a_b-c1234XY");
    }

    #[test]
    fn test_short_and_embed_urls() {
        assert_eq!(extract_video_id("https://youtu.be/dQw4w9WgXcQ?si=abc").unwrap(), "dQw4w9WgXcQ");
        assert_eq!(extract_video_id("https://www.youtube.com/embed/dQw4w9WgXcQ").unwrap(), "dQw4w9WgXcQ");
        assert_eq!(extract_video_id("https://www.youtube.com/v/dQw4w9WgXcQ").unwrap(), "dQw4w9WgXcQ");
        assert_eq!(extract_video_id("http://youtube.com/e/dQw4w9WgXcQ").unwrap(), "dQw4w9WgXcQ");
    }

    #[test]
    fn test_invalid_urls() {
        for url in ["https://example.com/watch?v=dQw4w9WgXcQ", "https://youtu.be/short", "not a url", ""] {
            let err = extract_video_id(url).unwrap_err();
            assert!(matches!(err, VideoIdError::InvalidUrl), "{url}");
            assert_eq!(err.to_string(), "Invalid YouTube URL");
        }
    }
}
