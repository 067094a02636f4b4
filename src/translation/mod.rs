/*!
 * Back-translation verified translation.
 *
 * This module contains the core verification-and-retry protocol. It is
 * split into several submodules:
 *
 * - `adapter`: Failure-absorbing wrapper around a translation provider
 * - `verifier`: Anchor-word back-translation verification
 * - `pipeline`: Per-chunk state machine with effort escalation
 */

// Re-export main types for easier usage
pub use self::adapter::TranslationAdapter;
pub use self::pipeline::{ChunkOutcome, EscalatingPipeline, PipelineConfig};
pub use self::verifier::{
    BackTranslationVerifier, MismatchEvidence, ProbeAttempt, VerificationOutcome,
};

// Submodules
pub mod adapter;
pub mod pipeline;
pub mod verifier;
