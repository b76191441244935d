//! Case-insensitive term matching
//!
//! Terms are matched as plain substrings, so a configured term also matches
//! inside a longer word ("password" inside "passwordless").

use crate::analysis::models::Span;

/// One occurrence of a configured term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermMatch {
    /// The term as configured, original casing
    pub term: String,
    /// Character span in the searched text
    pub span: Span,
}

/// Lowercase one character for matching.
///
/// Greek final sigma folds to the ordinary small sigma, since per-character
/// lowercasing always maps `Σ` to `σ`.
fn fold_char(c: char) -> impl Iterator<Item = char> {
    c.to_lowercase().map(|lower| if lower == 'ς' { 'σ' } else { lower })
}

/// Lowercased text that remembers which original character each folded
/// character came from. Full lowercase mapping can turn one character into
/// several, so folded and original offsets may drift apart.
struct FoldedText {
    chars: Vec<char>,
    origin: Vec<usize>,
}

impl FoldedText {
    fn new(text: &str) -> Self {
        let mut chars = Vec::with_capacity(text.len());
        let mut origin = Vec::with_capacity(text.len());

        for (idx, c) in text.chars().enumerate() {
            for lower in fold_char(c) {
                chars.push(lower);
                origin.push(idx);
            }
        }

        Self { chars, origin }
    }

    fn find_from(&self, needle: &[char], from: usize) -> Option<usize> {
        let last_start = self.chars.len().checked_sub(needle.len())?;
        (from..=last_start).find(|&pos| self.chars[pos..pos + needle.len()] == *needle)
    }

    fn original_span(&self, start: usize, len: usize) -> Span {
        Span::new(self.origin[start], self.origin[start + len - 1] + 1)
    }
}

/// Find every occurrence of every term in `text`.
///
/// Terms are processed in the given order; blank terms are skipped. Within a
/// term, occurrences are non-overlapping and left to right.
pub fn find_terms<S: AsRef<str>>(text: &str, terms: &[S]) -> Vec<TermMatch> {
    let folded = FoldedText::new(text);
    let mut matches = Vec::new();

    for term in terms {
        let term = term.as_ref();
        let needle: Vec<char> = term.trim().chars().flat_map(fold_char).collect();
        if needle.is_empty() {
            continue;
        }

        let mut from = 0;
        while let Some(pos) = folded.find_from(&needle, from) {
            matches.push(TermMatch {
                term: term.to_string(),
                span: folded.original_span(pos, needle.len()),
            });
            from = pos + needle.len();
        }
    }

    matches
}
