//! Fixed-size chunking of manual text.

/// Split text into consecutive non-overlapping windows of `size` characters.
///
/// Windows are counted in Unicode scalar values, never split multi-byte
/// sequences, and cover the input exactly once in original order; the last
/// chunk may be shorter. Empty input yields no chunks. `size` must be
/// greater than zero (zero yields no chunks rather than looping).
pub fn chunk_text(text: &str, size: usize) -> Vec<String> {
    if size == 0 || text.is_empty() {
        return Vec::new();
    }

    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(size)
        .map(|window| window.iter().collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concatenation_reproduces_input() {
        let text = "Il protocollo Modbus usa registri a 16 bit. Endpoint: 192.168.1.10.";
        for size in [1, 3, 10, 1000] {
            let chunks = chunk_text(text, size);
            assert_eq!(chunks.concat(), text, "size {}", size);
        }
    }

    #[test]
    fn test_all_but_last_chunk_have_exact_size() {
        let text = "abcdefghij";
        let chunks = chunk_text(text, 4);
        assert_eq!(chunks, vec!["abcd", "efgh", "ij"]);

        for chunk in &chunks[..chunks.len() - 1] {
            assert_eq!(chunk.chars().count(), 4);
        }
        assert!(chunks.last().unwrap().chars().count() <= 4);
    }

    #[test]
    fn test_exact_multiple_has_no_short_tail() {
        let chunks = chunk_text("abcdef", 3);
        assert_eq!(chunks, vec!["abc", "def"]);
    }

    #[test]
    fn test_empty_input_yields_no_chunks() {
        assert!(chunk_text("", 100).is_empty());
    }

    #[test]
    fn test_windows_count_characters_not_bytes() {
        // Each of these characters is multi-byte in UTF-8
        let text = "àèìòù";
        let chunks = chunk_text(text, 2);
        assert_eq!(chunks, vec!["àè", "ìò", "ù"]);
    }

    #[test]
    fn test_single_chunk_when_text_fits() {
        let chunks = chunk_text("breve", 100);
        assert_eq!(chunks, vec!["breve"]);
    }
}
