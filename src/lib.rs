/*!
 * # backtrip - Back-Translation Verified Machine Translation
 *
 * A Rust library for validating machine-translated text by round-tripping it
 * through a reverse translator and checking that the last source word of each
 * chunk survives the round trip.
 *
 * ## Features
 *
 * - Split a source document into fixed-size word chunks
 * - Translate each chunk through an external translation server
 * - Verify each translation by reverse-translating suffixes of its tail
 * - Escalate translation effort (beam width) once when verification fails
 * - Emit a line-ordered transcript with diagnostic annotations on
 *   unverified chunks
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `text`: Text preparation:
 *   - `text::normalize`: Punctuation stripping
 *   - `text::segment`: Fixed-size word chunking
 * - `translation`: The verification-and-retry protocol:
 *   - `translation::adapter`: Failure-absorbing provider wrapper
 *   - `translation::verifier`: Anchor-word back-translation verification
 *   - `translation::pipeline`: Per-chunk state machine with escalation
 * - `providers`: Translation backend clients:
 *   - `providers::marian`: Marian/OPUS-MT translation server client
 *   - `providers::mock`: Deterministic mock for testing
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod providers;
pub mod text;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use providers::{Direction, TranslationProvider};
pub use text::{chunk_words, normalize, Chunk};
pub use translation::{
    BackTranslationVerifier, ChunkOutcome, EscalatingPipeline, PipelineConfig,
    TranslationAdapter, VerificationOutcome,
};
pub use errors::{AppError, ProviderError, TranslationError};
