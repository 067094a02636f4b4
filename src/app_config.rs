use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Source language code (ISO)
    #[serde(default = "default_source_language")]
    pub source_language: String,

    /// Target language code (ISO)
    #[serde(default = "default_target_language")]
    pub target_language: String,

    /// Words per chunk
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Translation config
    #[serde(default)]
    pub translation: TranslationConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Translation server configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationConfig {
    /// Translation server URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Model name for source→target requests
    #[serde(default = "default_forward_model")]
    pub forward_model: String,

    /// Model name for target→source requests
    #[serde(default = "default_reverse_model")]
    pub reverse_model: String,

    /// Beam width of the first translation attempt
    #[serde(default = "default_baseline_effort")]
    pub baseline_effort: u32,

    /// Beam width of the single retry on verification failure
    #[serde(default = "default_escalated_effort")]
    pub escalated_effort: u32,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            forward_model: default_forward_model(),
            reverse_model: default_reverse_model(),
            baseline_effort: default_baseline_effort(),
            escalated_effort: default_escalated_effort(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_source_language() -> String {
    "he".to_string()
}

fn default_target_language() -> String {
    "en".to_string()
}

fn default_chunk_size() -> usize {
    5
}

fn default_endpoint() -> String {
    "http://localhost:8000".to_string()
}

fn default_forward_model() -> String {
    "Helsinki-NLP/opus-mt-tc-big-he-en".to_string()
}

fn default_reverse_model() -> String {
    "Helsinki-NLP/opus-mt-en-he".to_string()
}

fn default_baseline_effort() -> u32 {
    5
}

fn default_escalated_effort() -> u32 {
    10
}

fn default_timeout_secs() -> u64 {
    30
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(anyhow!("Chunk size must be at least 1"));
        }
        if self.translation.baseline_effort == 0 {
            return Err(anyhow!("Baseline effort must be at least 1"));
        }
        if self.translation.escalated_effort <= self.translation.baseline_effort {
            return Err(anyhow!(
                "Escalated effort ({}) must be strictly higher than baseline effort ({})",
                self.translation.escalated_effort,
                self.translation.baseline_effort
            ));
        }
        if self.translation.endpoint.is_empty() {
            return Err(anyhow!("Translation server endpoint is required"));
        }
        if self.translation.forward_model.is_empty() || self.translation.reverse_model.is_empty() {
            return Err(anyhow!("Both forward and reverse model names are required"));
        }
        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            source_language: default_source_language(),
            target_language: default_target_language(),
            chunk_size: default_chunk_size(),
            translation: TranslationConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaultConfig_shouldValidate() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zeroChunkSize_shouldFail() {
        let config = Config { chunk_size: 0, ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_nonEscalatingEffort_shouldFail() {
        let mut config = Config::default();
        config.translation.escalated_effort = config.translation.baseline_effort;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserialize_partialJson_shouldFillDefaults() {
        let config: Config = serde_json::from_str(r#"{ "chunk_size": 7 }"#).unwrap();

        assert_eq!(config.chunk_size, 7);
        assert_eq!(config.source_language, "he");
        assert_eq!(config.translation.baseline_effort, 5);
        assert_eq!(config.translation.escalated_effort, 10);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_serialize_roundTrip_shouldPreserveValues() {
        let mut config = Config::default();
        config.translation.endpoint = "http://translation.local:9000".to_string();

        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.translation.endpoint, "http://translation.local:9000");
    }
}
