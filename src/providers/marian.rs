use std::time::Duration;

use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::errors::ProviderError;
use crate::providers::{Direction, TranslationProvider};

/// Client for a Marian/OPUS-MT style translation server.
///
/// The server is expected to host one model per direction (e.g. the
/// Helsinki-NLP opus-mt pair for Hebrew and English) and expose a single
/// JSON endpoint that accepts a text and a beam width and returns a ranked
/// list of candidate translations.
#[derive(Debug)]
pub struct MarianServer {
    /// Base URL of the translation server
    base_url: String,
    /// Model name used for forward (source→target) requests
    forward_model: String,
    /// Model name used for reverse (target→source) requests
    reverse_model: String,
    /// HTTP client for making requests
    client: Client,
}

/// Translation request for the server API
#[derive(Debug, Serialize)]
pub struct TranslateRequest {
    /// Model name to run the request against
    model: String,
    /// Text to translate
    text: String,
    /// Beam width for decoding
    num_beams: u32,
    /// How many ranked candidates to return
    num_return_sequences: u32,
}

/// Translation response from the server API
#[derive(Debug, Deserialize)]
pub struct TranslateResponse {
    /// Candidate translations, most likely first
    pub translations: Vec<String>,
}

impl MarianServer {
    /// Create a new client for a translation server.
    pub fn new(
        base_url: impl Into<String>,
        forward_model: impl Into<String>,
        reverse_model: impl Into<String>,
        timeout_secs: u64,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            forward_model: forward_model.into(),
            reverse_model: reverse_model.into(),
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
        }
    }

    /// Model name the given direction maps to.
    fn model_for(&self, direction: Direction) -> &str {
        match direction {
            Direction::Forward => &self.forward_model,
            Direction::Reverse => &self.reverse_model,
        }
    }

    /// Endpoint URL for translation requests.
    fn translate_url(&self) -> String {
        format!("{}/translate", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl TranslationProvider for MarianServer {
    async fn translate(
        &self,
        text: &str,
        direction: Direction,
        effort: u32,
    ) -> Result<Vec<String>, ProviderError> {
        let request = TranslateRequest {
            model: self.model_for(direction).to_string(),
            text: text.to_string(),
            num_beams: effort.max(1),
            num_return_sequences: 1,
        };

        let response = self.client
            .post(self.translate_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    ProviderError::ConnectionError(e.to_string())
                } else {
                    ProviderError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Translation server error ({}): {}", status, error_text);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        let parsed = response.json::<TranslateResponse>().await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        if parsed.translations.is_empty() {
            return Err(ProviderError::EmptyResponse);
        }

        Ok(parsed.translations)
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        // A minimal 1-beam request against the forward model; any successful
        // round trip means both the server and the model are loaded.
        self.translate("test", Direction::Forward, 1).await?;
        Ok(())
    }
}
