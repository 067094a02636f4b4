/*!
 * Failure-absorbing adapter over a translation provider.
 *
 * The adapter is the only place that sees provider errors. Callers always
 * receive a candidate list; a failed request yields the single-empty-string
 * sentinel, which callers check with [`TranslationAdapter::is_failure`] and
 * handle explicitly. A single bad request must never halt document
 * processing.
 */

use std::sync::Arc;

use log::error;

use crate::providers::{Direction, TranslationProvider};

/// Uniform request/response wrapper around a forward and a reverse
/// translation capability.
#[derive(Debug, Clone)]
pub struct TranslationAdapter {
    provider: Arc<dyn TranslationProvider>,
}

impl TranslationAdapter {
    /// Create an adapter around a provider instance.
    pub fn new(provider: Arc<dyn TranslationProvider>) -> Self {
        Self { provider }
    }

    /// Translate a text in the given direction at the given effort.
    ///
    /// On provider failure the underlying cause is logged and the sentinel
    /// `vec![String::new()]` is returned; this call never fails.
    pub async fn translate(&self, text: &str, direction: Direction, effort: u32) -> Vec<String> {
        match self.provider.translate(text, direction, effort).await {
            Ok(candidates) if !candidates.is_empty() => candidates,
            Ok(_) => {
                error!("Translation returned no candidates ({}, effort {})", direction, effort);
                vec![String::new()]
            }
            Err(e) => {
                error!("Translation error ({}, effort {}): {}", direction, effort, e);
                vec![String::new()]
            }
        }
    }

    /// Translate and keep only the highest-ranked candidate.
    pub async fn translate_best(&self, text: &str, direction: Direction, effort: u32) -> String {
        self.translate(text, direction, effort)
            .await
            .into_iter()
            .next()
            .unwrap_or_default()
    }

    /// Whether a candidate list is the failure sentinel.
    pub fn is_failure(candidates: &[String]) -> bool {
        candidates.len() == 1 && candidates[0].is_empty()
    }

    /// Check the underlying provider connection.
    pub async fn test_connection(&self) -> Result<(), crate::errors::ProviderError> {
        self.provider.test_connection().await
    }
}
