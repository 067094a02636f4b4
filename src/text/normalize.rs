/// Remove all ASCII punctuation from a string.
///
/// Whitespace and word boundaries are left untouched, so a normalized
/// document tokenizes to the same word positions as the raw one. Applied
/// both to the source document before chunking and to both sides of every
/// back-translation comparison, so punctuation differences can never cause
/// a spurious mismatch.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_shouldStripAsciiPunctuation() {
        assert_eq!(normalize("hello, world!"), "hello world");
        assert_eq!(normalize("it's a (test)."), "its a test");
    }

    #[test]
    fn test_normalize_shouldPreserveWhitespace() {
        assert_eq!(normalize("one  two\tthree\nfour"), "one  two\tthree\nfour");
    }

    #[test]
    fn test_normalize_shouldPreserveNonAsciiText() {
        // Hebrew text passes through unchanged, only the punctuation goes
        assert_eq!(normalize("שלום, עולם!"), "שלום עולם");
        assert_eq!(normalize("לכולם"), "לכולם");
    }

    #[test]
    fn test_normalize_shouldBeIdempotent() {
        let inputs = ["hello, world!", "already clean", "", "שלום. עולם?"];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_normalize_emptyString_shouldReturnEmpty() {
        assert_eq!(normalize(""), "");
    }
}
