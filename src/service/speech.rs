//! Speech synthesis client
//!
//! Fetches MP3 audio for an excuse from an external HTTP TTS backend.
//! The client only exists when `TTS_BASE_URL` is configured; without it
//! the voice endpoint reports the feature as unavailable.

use reqwest::Client;

use crate::model::Language;

#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("speech backend returned status {0}")]
    Status(u16),
}

/// Client for an HTTP text-to-speech backend.
#[derive(Clone)]
pub struct SpeechClient {
    client: Client,
    base_url: String,
}

impl SpeechClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Synthesize speech for the text, returning raw MP3 bytes.
    pub async fn synthesize(
        &self,
        text: &str,
        language: Language,
    ) -> Result<Vec<u8>, SpeechError> {
        let url = format!("{}/api/tts", self.base_url);

        tracing::debug!(language = %language, chars = text.len(), "Requesting speech synthesis");

        let response = self
            .client
            .get(&url)
            .query(&[("lang", language.as_str()), ("text", text)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SpeechError::Status(response.status().as_u16()));
        }

        let bytes = response.bytes().await?;

        tracing::debug!(bytes = bytes.len(), "Received synthesized audio");

        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_normalized() {
        let client = SpeechClient::new("http://localhost:5002/".to_string());
        assert_eq!(client.base_url, "http://localhost:5002");
    }

    #[tokio::test]
    #[ignore] // Requires a running TTS backend
    async fn synthesize_against_live_backend() {
        let client = SpeechClient::new("http://localhost:5002".to_string());
        let audio = client
            .synthesize("I am not feeling well today.", Language::En)
            .await
            .unwrap();
        assert!(!audio.is_empty());
    }
}
