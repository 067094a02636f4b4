/*!
 * Escalating translation pipeline.
 *
 * Each chunk moves through an explicit state machine:
 *
 * `Pending → Translated → Verifying → { Accepted | Retrying → ReVerifying →
 * { Accepted | Rejected } }`
 *
 * A chunk whose baseline translation fails outright goes straight to
 * `RejectedSkip` and contributes no output line. Escalation is exactly one
 * additional forward translation at a strictly higher effort; there is no
 * retry loop.
 */

use anyhow::Result;
use log::{debug, info, warn};

use crate::errors::AppError;
use crate::providers::Direction;
use crate::text::{chunk_words, normalize, Chunk};
use crate::translation::adapter::TranslationAdapter;
use crate::translation::verifier::{BackTranslationVerifier, VerificationOutcome};

/// Construction-time parameters of the pipeline.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Words per chunk
    pub chunk_size: usize,

    /// Beam width of the first forward translation attempt
    pub baseline_effort: u32,

    /// Beam width of the single retry; must be strictly higher than baseline
    pub escalated_effort: u32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            chunk_size: 5,
            baseline_effort: 5,
            escalated_effort: 10,
        }
    }
}

impl PipelineConfig {
    /// Validate the configuration for consistency.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.chunk_size == 0 {
            return Err(AppError::Config("chunk size must be at least 1".to_string()));
        }
        if self.baseline_effort == 0 {
            return Err(AppError::Config("baseline effort must be at least 1".to_string()));
        }
        if self.escalated_effort <= self.baseline_effort {
            return Err(AppError::Config(format!(
                "escalated effort ({}) must be strictly higher than baseline effort ({})",
                self.escalated_effort, self.baseline_effort
            )));
        }
        Ok(())
    }
}

/// States a chunk passes through while being processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkState {
    /// Not yet translated
    Pending,
    /// Baseline forward translation obtained
    Translated,
    /// Baseline translation under verification
    Verifying,
    /// Translation verified, emitted verbatim
    Accepted,
    /// Baseline mismatched, escalated translation requested
    Retrying,
    /// Escalated translation under verification
    ReVerifying,
    /// Both attempts mismatched, emitted with diagnostic annotation
    Rejected,
    /// Translation service failed, chunk contributes no output line
    RejectedSkip,
}

/// Final result for one chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunkOutcome {
    /// Verified translation, emitted verbatim
    Accepted(String),
    /// Unverified translation with appended diagnostic annotation
    Rejected(String),
    /// No usable translation; nothing is emitted for this chunk
    Skipped,
}

impl ChunkOutcome {
    /// The output line for this chunk, if any.
    pub fn line(&self) -> Option<&str> {
        match self {
            ChunkOutcome::Accepted(text) | ChunkOutcome::Rejected(text) => Some(text),
            ChunkOutcome::Skipped => None,
        }
    }
}

/// Orchestrates segmenter, translator and verifier across a document,
/// escalating translation effort once when verification fails.
#[derive(Debug, Clone)]
pub struct EscalatingPipeline {
    adapter: TranslationAdapter,
    verifier: BackTranslationVerifier,
    config: PipelineConfig,
}

impl EscalatingPipeline {
    /// Create a pipeline over the given adapter, validating the configuration.
    pub fn new(adapter: TranslationAdapter, config: PipelineConfig) -> Result<Self, AppError> {
        config.validate()?;
        let verifier = BackTranslationVerifier::new(adapter.clone());
        Ok(Self { adapter, verifier, config })
    }

    /// The pipeline configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Process a whole document: normalize, chunk, translate and verify each
    /// chunk strictly in order. Returns one output line per non-skipped chunk.
    pub async fn run(&self, document: &str) -> Result<Vec<String>, AppError> {
        let normalized = normalize(document);
        let chunks = chunk_words(&normalized, self.config.chunk_size)?;
        let total = chunks.len();

        let mut lines = Vec::with_capacity(total);
        for chunk in &chunks {
            info!("Processing chunk {}/{}: {}", chunk.index, total, chunk.text());
            if let Some(line) = self.process_chunk(chunk).await.line() {
                lines.push(line.to_string());
            }
        }

        Ok(lines)
    }

    /// Run one chunk through the state machine.
    pub async fn process_chunk(&self, chunk: &Chunk) -> ChunkOutcome {
        let mut state = ChunkState::Pending;
        let text = chunk.text();
        let anchor = chunk.anchor();

        // Pending → Translated (or RejectedSkip on service failure)
        let baseline_candidates = self
            .adapter
            .translate(&text, Direction::Forward, self.config.baseline_effort)
            .await;
        if TranslationAdapter::is_failure(&baseline_candidates) {
            self.advance(chunk.index, &mut state, ChunkState::RejectedSkip);
            warn!("Skipping chunk {} due to translation failure", chunk.index);
            return ChunkOutcome::Skipped;
        }
        let baseline = baseline_candidates.into_iter().next().unwrap_or_default();
        self.advance(chunk.index, &mut state, ChunkState::Translated);

        // Translated → Verifying
        self.advance(chunk.index, &mut state, ChunkState::Verifying);
        let first_outcome = self.verifier.verify(&baseline, anchor).await;

        let first_evidence = match first_outcome {
            VerificationOutcome::Matched { suffix_len } => {
                // Verifying → Accepted
                self.advance(chunk.index, &mut state, ChunkState::Accepted);
                info!("Match found using the last {} word(s)", suffix_len);
                return ChunkOutcome::Accepted(baseline);
            }
            VerificationOutcome::Mismatched(evidence) => evidence,
        };

        // Verifying → Retrying: one escalated attempt, never more
        info!("{}", first_evidence.report());
        info!(
            "Retrying chunk {} with higher effort ({} beams)",
            chunk.index, self.config.escalated_effort
        );
        self.advance(chunk.index, &mut state, ChunkState::Retrying);
        let escalated = self
            .adapter
            .translate_best(&text, Direction::Forward, self.config.escalated_effort)
            .await;

        // Retrying → ReVerifying
        self.advance(chunk.index, &mut state, ChunkState::ReVerifying);
        match self.verifier.verify(&escalated, anchor).await {
            VerificationOutcome::Matched { suffix_len } => {
                // ReVerifying → Accepted; the baseline mismatch stays in the log
                self.advance(chunk.index, &mut state, ChunkState::Accepted);
                info!(
                    "Escalated translation matched using the last {} word(s)",
                    suffix_len
                );
                ChunkOutcome::Accepted(escalated)
            }
            VerificationOutcome::Mismatched(_) => {
                // ReVerifying → Rejected; the annotation carries the evidence
                // of the baseline pass, not the retried one
                self.advance(chunk.index, &mut state, ChunkState::Rejected);
                info!("No match found for chunk {} even after retrying", chunk.index);
                ChunkOutcome::Rejected(format!("{}{}", baseline, first_evidence.annotation()))
            }
        }
    }

    /// Record a state transition.
    fn advance(&self, chunk_index: usize, state: &mut ChunkState, next: ChunkState) {
        debug!("Chunk {}: {:?} -> {:?}", chunk_index, state, next);
        *state = next;
    }
}
