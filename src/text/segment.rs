use anyhow::Result;

use crate::errors::AppError;

/// A contiguous group of source words, the atomic unit of translation
/// and verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// 1-based position of this chunk within the document
    pub index: usize,

    /// The words of the chunk, in document order
    pub words: Vec<String>,
}

impl Chunk {
    /// The chunk as a single space-joined string, as sent to the translator.
    pub fn text(&self) -> String {
        self.words.join(" ")
    }

    /// The anchor word: the last word of the chunk, used as the semantic
    /// checkpoint for back-translation verification.
    pub fn anchor(&self) -> &str {
        self.words.last().map(String::as_str).unwrap_or("")
    }

    /// Number of words in the chunk.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the chunk holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Split a document into consecutive chunks of `size` words.
///
/// The final chunk holds the remainder (1..size words); chunks partition
/// the word sequence in order, with no overlap, padding or reordering.
/// An empty or whitespace-only document yields an empty Vec. A zero chunk
/// size is a configuration error.
pub fn chunk_words(text: &str, size: usize) -> Result<Vec<Chunk>, AppError> {
    if size == 0 {
        return Err(AppError::Config("chunk size must be at least 1".to_string()));
    }

    let words: Vec<&str> = text.split_whitespace().collect();

    let chunks = words
        .chunks(size)
        .enumerate()
        .map(|(i, group)| Chunk {
            index: i + 1,
            words: group.iter().map(|w| w.to_string()).collect(),
        })
        .collect();

    Ok(chunks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunkWords_shouldSplitIntoFixedSizeGroups() {
        let chunks = chunk_words("a b c d e f g", 3).unwrap();

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].words, vec!["a", "b", "c"]);
        assert_eq!(chunks[1].words, vec!["d", "e", "f"]);
        assert_eq!(chunks[2].words, vec!["g"]);
    }

    #[test]
    fn test_chunkWords_shouldAssignOneBasedIndices() {
        let chunks = chunk_words("a b c d", 2).unwrap();

        assert_eq!(chunks[0].index, 1);
        assert_eq!(chunks[1].index, 2);
    }

    #[test]
    fn test_chunkWords_finalChunk_shouldHoldRemainderWithoutPadding() {
        let chunks = chunk_words("a b c d e", 3).unwrap();

        let last = chunks.last().unwrap();
        assert_eq!(last.words, vec!["d", "e"]);
        assert_eq!(last.len(), 2);
    }

    #[test]
    fn test_chunkWords_concatenation_shouldReproduceDocument() {
        let doc = "one two three four five six seven eight nine";
        for size in 1..=5 {
            let chunks = chunk_words(doc, size).unwrap();
            let rebuilt: Vec<String> = chunks
                .iter()
                .flat_map(|c| c.words.iter().cloned())
                .collect();
            assert_eq!(rebuilt.join(" "), doc, "partition broken for size {}", size);
        }
    }

    #[test]
    fn test_chunkWords_emptyInput_shouldYieldNoChunks() {
        assert!(chunk_words("", 5).unwrap().is_empty());
        assert!(chunk_words("   \n\t ", 5).unwrap().is_empty());
    }

    #[test]
    fn test_chunkWords_zeroSize_shouldBeConfigError() {
        let result = chunk_words("a b c", 0);
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_chunk_anchor_shouldBeLastWord() {
        let chunks = chunk_words("שלום עולם טוב היום לכולם", 5).unwrap();

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].anchor(), "לכולם");
        assert_eq!(chunks[0].text(), "שלום עולם טוב היום לכולם");
    }
}
