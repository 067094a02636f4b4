/*!
 * Back-translation verification.
 *
 * A forward translation is judged trustworthy by probing suffixes of its
 * last 1, 2 and 3 words: each suffix is translated back to the source
 * language and compared (punctuation-insensitively) against the chunk's
 * anchor word. The anchor is the chunking boundary word and tends to be
 * the most semantically load-bearing token of the fragment; if the forward
 * pass preserved its meaning, reversing the tail of the translation should
 * reconstruct it. Probing several suffix lengths absorbs anchors whose
 * meaning spreads over more than one target-language word.
 */

use crate::providers::Direction;
use crate::text::normalize;
use crate::translation::adapter::TranslationAdapter;

/// Maximum suffix length probed during verification.
pub const MAX_PROBE_WORDS: usize = 3;

/// One reverse-translation attempt over a suffix of the forward translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeAttempt {
    /// Requested suffix length (1..=3); the actual suffix may be shorter
    /// when the translation has fewer words
    pub suffix_len: usize,
    /// The probed suffix of the forward translation
    pub suffix: String,
    /// What the reverse translator made of the suffix
    pub back_translation: String,
}

/// Full diagnostic trail of a failed verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MismatchEvidence {
    /// The forward translation that failed verification
    pub translation: String,
    /// The anchor word it was checked against
    pub anchor: String,
    /// All probe attempts, in increasing suffix length order
    pub probes: Vec<ProbeAttempt>,
}

impl MismatchEvidence {
    /// Back-translation of the probe at the given suffix length, or the
    /// empty string when that probe was never reached.
    fn probe_result(&self, suffix_len: usize) -> &str {
        self.probes
            .iter()
            .find(|p| p.suffix_len == suffix_len)
            .map(|p| p.back_translation.as_str())
            .unwrap_or("")
    }

    /// The parenthetical diagnostic appended to an unverified output line.
    pub fn annotation(&self) -> String {
        format!(
            " (regional word: {}, got: {}, {}, {})",
            self.anchor,
            self.probe_result(1),
            self.probe_result(2),
            self.probe_result(3),
        )
    }

    /// Multi-line human-readable mismatch report for the log.
    pub fn report(&self) -> String {
        format!(
            "Mismatch found:\n\
             the translated sentence was: {}\n\
             Original anchor word: {}\n\
             Back-translation of the last word: {}\n\
             Back-translation of the last 2 words: {}\n\
             Back-translation of the last 3 words: {}",
            self.translation,
            self.anchor,
            self.probe_result(1),
            self.probe_result(2),
            self.probe_result(3),
        )
    }
}

/// Outcome of verifying one translation candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationOutcome {
    /// A probe reconstructed the anchor; `suffix_len` is the length that
    /// succeeded
    Matched {
        /// Suffix length (in words) at which the match was found
        suffix_len: usize,
    },
    /// No probe reconstructed the anchor
    Mismatched(MismatchEvidence),
}

impl VerificationOutcome {
    /// Whether this outcome is a match.
    pub fn is_match(&self) -> bool {
        matches!(self, VerificationOutcome::Matched { .. })
    }
}

/// Verifier that judges forward translations by reverse-translating
/// suffixes and comparing against the anchor word.
#[derive(Debug, Clone)]
pub struct BackTranslationVerifier {
    adapter: TranslationAdapter,
    /// Beam width used for reverse probes. Probes are cheap greedy requests;
    /// effort escalation applies to forward translation only.
    probe_effort: u32,
}

impl BackTranslationVerifier {
    /// Create a verifier over the given adapter with greedy (effort 1) probes.
    pub fn new(adapter: TranslationAdapter) -> Self {
        Self { adapter, probe_effort: 1 }
    }

    /// Verify a forward translation against an anchor word.
    ///
    /// Probes suffixes of increasing length and short-circuits on the first
    /// match, so a translation that verifies at suffix length 1 costs exactly
    /// one reverse request. Suffix lengths beyond the translation's word
    /// count clamp to the full translation rather than fail.
    pub async fn verify(&self, translated_text: &str, anchor: &str) -> VerificationOutcome {
        let words: Vec<&str> = translated_text.split_whitespace().collect();

        let mut probes = Vec::with_capacity(MAX_PROBE_WORDS);
        if !words.is_empty() {
            let normalized_anchor = normalize(anchor);
            for suffix_len in 1..=MAX_PROBE_WORDS {
                let start = words.len().saturating_sub(suffix_len);
                let suffix = words[start..].join(" ");

                let back = self
                    .adapter
                    .translate_best(&suffix, Direction::Reverse, self.probe_effort)
                    .await;

                if normalize(&back) == normalized_anchor {
                    return VerificationOutcome::Matched { suffix_len };
                }

                probes.push(ProbeAttempt {
                    suffix_len,
                    suffix,
                    back_translation: back,
                });
            }
        }

        VerificationOutcome::Mismatched(MismatchEvidence {
            translation: translated_text.to_string(),
            anchor: anchor.to_string(),
            probes,
        })
    }
}
