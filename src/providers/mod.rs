/*!
 * Provider implementations for translation backends.
 *
 * This module contains client implementations for translation services:
 * - Marian: HTTP client for a Marian/OPUS-MT translation server
 * - Mock: deterministic in-memory provider for testing
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Direction of a translation request.
///
/// The two directions are fixed at construction time (source→target and
/// target→source); a provider maps each direction to its own model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Source language to target language
    Forward,
    /// Target language back to source language
    Reverse,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Forward => write!(f, "forward"),
            Direction::Reverse => write!(f, "reverse"),
        }
    }
}

/// Common trait for all translation providers
///
/// This trait defines the interface that all provider implementations must
/// follow, allowing the verification/escalation logic to run against a live
/// server or a deterministic mock interchangeably.
#[async_trait]
pub trait TranslationProvider: Send + Sync + Debug {
    /// Translate a text in the given direction.
    ///
    /// # Arguments
    /// * `text` - The text to translate
    /// * `direction` - Which of the two fixed directions to query
    /// * `effort` - Decoding breadth (beam width); must be >= 1. Higher effort
    ///   trades latency for quality but never changes which vocabulary the
    ///   direction uses, only which candidate is ranked most likely.
    ///
    /// # Returns
    /// * `Result<Vec<String>, ProviderError>` - One or more candidate
    ///   translations, most likely first, or an error
    async fn translate(
        &self,
        text: &str,
        direction: Direction,
        effort: u32,
    ) -> Result<Vec<String>, ProviderError>;

    /// Test the connection to the provider
    ///
    /// # Returns
    /// * `Result<(), ProviderError>` - Ok if the connection is usable, or an error
    async fn test_connection(&self) -> Result<(), ProviderError>;
}

pub mod marian;
pub mod mock;
