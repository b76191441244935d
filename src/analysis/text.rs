//! Character offset bookkeeping
//!
//! The `regex` crate reports byte offsets while every span we publish counts
//! characters. [`CharIndex`] maps one onto the other for a single text.

/// Byte position of every character boundary in a text
pub struct CharIndex {
    boundaries: Vec<usize>,
}

impl CharIndex {
    pub fn new(text: &str) -> Self {
        let mut boundaries: Vec<usize> = text.char_indices().map(|(idx, _)| idx).collect();
        boundaries.push(text.len());
        Self { boundaries }
    }

    /// Number of characters in the indexed text
    pub fn char_count(&self) -> usize {
        self.boundaries.len() - 1
    }

    /// Character offset of a byte offset.
    ///
    /// Offsets inside a multi-byte character resolve to the character that
    /// contains them.
    pub fn char_offset(&self, byte_offset: usize) -> usize {
        match self.boundaries.binary_search(&byte_offset) {
            Ok(idx) => idx,
            Err(idx) => idx.saturating_sub(1),
        }
    }

    /// Byte offset of a character offset, clamped to the end of the text
    pub fn byte_offset(&self, char_offset: usize) -> usize {
        self.boundaries[char_offset.min(self.char_count())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_offsets_are_identity() {
        let index = CharIndex::new("hello");
        assert_eq!(index.char_count(), 5);
        assert_eq!(index.char_offset(0), 0);
        assert_eq!(index.char_offset(3), 3);
        assert_eq!(index.char_offset(5), 5);
    }

    #[test]
    fn test_multibyte_offsets() {
        // 'é' is two bytes, '€' is three
        let text = "é€a";
        let index = CharIndex::new(text);
        assert_eq!(index.char_count(), 3);
        assert_eq!(index.char_offset(0), 0);
        assert_eq!(index.char_offset(2), 1);
        assert_eq!(index.char_offset(5), 2);
        assert_eq!(index.char_offset(6), 3);
        assert_eq!(index.char_offset(3), 1);
        assert_eq!(index.byte_offset(1), 2);
        assert_eq!(index.byte_offset(2), 5);
        assert_eq!(&text[index.byte_offset(1)..index.byte_offset(3)], "€a");
    }

    #[test]
    fn test_byte_offset_past_end_is_clamped() {
        let index = CharIndex::new("é€a");
        assert_eq!(index.byte_offset(3), 6);
        assert_eq!(index.byte_offset(99), 6);
    }

    #[test]
    fn test_empty_text() {
        let index = CharIndex::new("");
        assert_eq!(index.char_count(), 0);
        assert_eq!(index.char_offset(0), 0);
        assert_eq!(index.byte_offset(5), 0);
    }
}
