//! Context snippets around findings

use crate::analysis::models::Span;
use crate::analysis::text::CharIndex;

/// Characters of context kept on each side of a span
pub const DEFAULT_SNIPPET_RADIUS: usize = 25;

/// Extract a whitespace-normalized excerpt around `span`.
///
/// The window `[start - radius, end + radius)` is clamped to the prompt,
/// newlines inside it become spaces, and the result is trimmed. Offsets are
/// in characters, so multi-byte text is never split. `index` must be built
/// from `prompt`; the window is sliced through it without rescanning the
/// prompt.
pub fn snippet(prompt: &str, index: &CharIndex, span: Span, radius: usize) -> String {
    let end = span.end.saturating_add(radius).min(index.char_count());
    let start = span.start.saturating_sub(radius).min(end);

    let window = &prompt[index.byte_offset(start)..index.byte_offset(end)];
    window.replace('\n', " ").trim().to_string()
}
