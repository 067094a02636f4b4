/*!
 * Text preparation utilities.
 *
 * This module handles the preprocessing that happens before any translation
 * request is made:
 *
 * - `normalize`: punctuation stripping for comparison-safe text
 * - `segment`: splitting a document into fixed-size word chunks
 */

// Re-export main types for easier usage
pub use self::normalize::normalize;
pub use self::segment::{chunk_words, Chunk};

// Submodules
pub mod normalize;
pub mod segment;
