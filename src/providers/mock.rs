/*!
 * Mock provider implementation for testing.
 *
 * This module provides a deterministic provider that simulates different
 * behaviors:
 * - `MockTranslator::scripted()` - Answers from a scripted response table
 * - `MockTranslator::failing()` - Always fails with an error
 * - `MockTranslator::failing_forward()` - Forward requests fail, reverse works
 *
 * Call counters are shared across clones so tests can assert on how many
 * requests the verifier and pipeline actually issued.
 */

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::errors::ProviderError;
use crate::providers::{Direction, TranslationProvider};

/// Behavior mode for the mock translator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Answer from the scripted table, echoing unscripted requests
    Scripted,
    /// Always fail with an error
    Failing,
    /// Fail forward requests only (simulated outage of one model)
    FailingForward,
}

/// Deterministic mock provider for testing verification behavior
#[derive(Debug)]
pub struct MockTranslator {
    /// Behavior mode
    behavior: MockBehavior,
    /// Scripted responses keyed by (direction, text)
    responses: HashMap<(Direction, String), String>,
    /// Scripted responses keyed by (direction, text, effort), checked first
    effort_responses: HashMap<(Direction, String, u32), String>,
    /// Count of forward requests served (shared across clones)
    forward_count: Arc<AtomicUsize>,
    /// Count of reverse requests served (shared across clones)
    reverse_count: Arc<AtomicUsize>,
}

impl MockTranslator {
    /// Create a new mock translator with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            responses: HashMap::new(),
            effort_responses: HashMap::new(),
            forward_count: Arc::new(AtomicUsize::new(0)),
            reverse_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a scripted mock translator
    pub fn scripted() -> Self {
        Self::new(MockBehavior::Scripted)
    }

    /// Create a failing mock translator that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock whose forward model is down but whose reverse model works
    pub fn failing_forward() -> Self {
        Self::new(MockBehavior::FailingForward)
    }

    /// Script a response for a (direction, text) pair at any effort
    pub fn with_response(
        mut self,
        direction: Direction,
        text: impl Into<String>,
        response: impl Into<String>,
    ) -> Self {
        self.responses.insert((direction, text.into()), response.into());
        self
    }

    /// Script a response for a (direction, text) pair at one specific effort,
    /// taking precedence over the effort-independent script
    pub fn with_effort_response(
        mut self,
        direction: Direction,
        text: impl Into<String>,
        effort: u32,
        response: impl Into<String>,
    ) -> Self {
        self.effort_responses
            .insert((direction, text.into(), effort), response.into());
        self
    }

    /// Number of forward requests served so far
    pub fn forward_calls(&self) -> usize {
        self.forward_count.load(Ordering::SeqCst)
    }

    /// Number of reverse requests served so far
    pub fn reverse_calls(&self) -> usize {
        self.reverse_count.load(Ordering::SeqCst)
    }

    /// Look up the scripted answer, falling back to a tagged echo
    fn respond(&self, text: &str, direction: Direction, effort: u32) -> String {
        if let Some(scripted) = self
            .effort_responses
            .get(&(direction, text.to_string(), effort))
        {
            return scripted.clone();
        }
        if let Some(scripted) = self.responses.get(&(direction, text.to_string())) {
            return scripted.clone();
        }
        format!("[{} b{}] {}", direction, effort, text)
    }
}

impl Clone for MockTranslator {
    fn clone(&self) -> Self {
        Self {
            behavior: self.behavior,
            responses: self.responses.clone(),
            effort_responses: self.effort_responses.clone(),
            forward_count: Arc::clone(&self.forward_count),
            reverse_count: Arc::clone(&self.reverse_count),
        }
    }
}

#[async_trait]
impl TranslationProvider for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        direction: Direction,
        effort: u32,
    ) -> Result<Vec<String>, ProviderError> {
        match direction {
            Direction::Forward => self.forward_count.fetch_add(1, Ordering::SeqCst),
            Direction::Reverse => self.reverse_count.fetch_add(1, Ordering::SeqCst),
        };

        match self.behavior {
            MockBehavior::Failing => Err(ProviderError::ApiError {
                status_code: 500,
                message: "Simulated provider failure".to_string(),
            }),
            MockBehavior::FailingForward if direction == Direction::Forward => {
                Err(ProviderError::ApiError {
                    status_code: 503,
                    message: "Simulated forward model outage".to_string(),
                })
            }
            _ => Ok(vec![self.respond(text, direction, effort)]),
        }
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        match self.behavior {
            MockBehavior::Failing => Err(ProviderError::ConnectionError(
                "Simulated connection failure".to_string(),
            )),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scriptedTranslator_shouldReturnScriptedResponse() {
        let provider = MockTranslator::scripted()
            .with_response(Direction::Forward, "שלום", "hello");

        let candidates = provider
            .translate("שלום", Direction::Forward, 5)
            .await
            .unwrap();
        assert_eq!(candidates, vec!["hello".to_string()]);
    }

    #[tokio::test]
    async fn test_effortResponse_shouldTakePrecedence() {
        let provider = MockTranslator::scripted()
            .with_response(Direction::Forward, "שלום", "hello")
            .with_effort_response(Direction::Forward, "שלום", 10, "greetings");

        let baseline = provider
            .translate("שלום", Direction::Forward, 5)
            .await
            .unwrap();
        let escalated = provider
            .translate("שלום", Direction::Forward, 10)
            .await
            .unwrap();

        assert_eq!(baseline[0], "hello");
        assert_eq!(escalated[0], "greetings");
    }

    #[tokio::test]
    async fn test_unscriptedRequest_shouldEchoWithTag() {
        let provider = MockTranslator::scripted();

        let candidates = provider
            .translate("anything", Direction::Reverse, 1)
            .await
            .unwrap();
        assert_eq!(candidates[0], "[reverse b1] anything");
    }

    #[tokio::test]
    async fn test_failingTranslator_shouldReturnError() {
        let provider = MockTranslator::failing();

        let result = provider.translate("text", Direction::Forward, 5).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_failingForward_shouldStillServeReverse() {
        let provider = MockTranslator::failing_forward();

        assert!(provider.translate("x", Direction::Forward, 5).await.is_err());
        assert!(provider.translate("x", Direction::Reverse, 1).await.is_ok());
    }

    #[tokio::test]
    async fn test_clonedTranslator_shouldShareCallCounters() {
        let provider = MockTranslator::scripted();
        let cloned = provider.clone();

        provider.translate("a", Direction::Forward, 5).await.unwrap();
        cloned.translate("b", Direction::Forward, 5).await.unwrap();
        cloned.translate("c", Direction::Reverse, 1).await.unwrap();

        assert_eq!(provider.forward_calls(), 2);
        assert_eq!(provider.reverse_calls(), 1);
    }
}
