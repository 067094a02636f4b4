use anyhow::{anyhow, Result};
use log::info;
use std::path::Path;
use std::sync::Arc;

use crate::app_config::Config;
use crate::file_utils::FileManager;
use crate::providers::marian::MarianServer;
use crate::providers::TranslationProvider;
use crate::translation::{EscalatingPipeline, PipelineConfig, TranslationAdapter};

// @module: Application controller for document translation

/// Main application controller: reads the source document, runs the
/// escalating pipeline over it and writes the line-ordered transcript.
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Verified translation pipeline
    pipeline: EscalatingPipeline,
}

impl Controller {
    // @method: Create a controller backed by the configured translation server
    pub fn with_config(config: Config) -> Result<Self> {
        let provider = MarianServer::new(
            &config.translation.endpoint,
            &config.translation.forward_model,
            &config.translation.reverse_model,
            config.translation.timeout_secs,
        );
        Self::with_provider(config, Arc::new(provider))
    }

    /// Create a controller over an explicit provider instance.
    ///
    /// The provider is an injected dependency so tests can substitute a
    /// deterministic mock for the live translation server.
    pub fn with_provider(config: Config, provider: Arc<dyn TranslationProvider>) -> Result<Self> {
        config.validate()?;

        let adapter = TranslationAdapter::new(provider);
        let pipeline_config = PipelineConfig {
            chunk_size: config.chunk_size,
            baseline_effort: config.translation.baseline_effort,
            escalated_effort: config.translation.escalated_effort,
        };
        let pipeline = EscalatingPipeline::new(adapter, pipeline_config)?;

        Ok(Self { config, pipeline })
    }

    /// Translate one document file into a line-ordered transcript file.
    pub async fn run<P1: AsRef<Path>, P2: AsRef<Path>>(
        &self,
        input_file: P1,
        output_file: P2,
    ) -> Result<()> {
        let input_file = input_file.as_ref();
        if !FileManager::file_exists(input_file) {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }

        let text = FileManager::read_to_string(input_file)?;
        if text.split_whitespace().next().is_none() {
            return Err(anyhow!("Input document is empty: {:?}", input_file));
        }

        info!(
            "Translating {:?} ({} -> {}), chunk size {}",
            input_file, self.config.source_language, self.config.target_language, self.config.chunk_size
        );

        let lines = self.pipeline.run(&text).await?;

        let mut content = lines.join("\n");
        if !content.is_empty() {
            content.push('\n');
        }
        FileManager::write_to_file(&output_file, &content)?;

        info!(
            "Wrote {} result line(s) to {:?}",
            lines.len(),
            output_file.as_ref()
        );
        Ok(())
    }
}
