//! Fixed-width sliding-window chunking.
//!
//! Chunks are the unit of retrieval. The window slides over *characters*
//! (not bytes, so multi-byte UTF-8 text never splits mid-codepoint) with
//! a fixed overlap and no sentence-boundary awareness.

/// Split `text` into fixed-width chunks of `size` characters with
/// `overlap` characters shared between consecutive chunks.
///
/// Whitespace-only input yields no chunks. The final chunk may be shorter
/// than `size`. `overlap` must be smaller than `size` (enforced by config
/// validation); a degenerate stride is clamped to 1 so the window always
/// advances.
pub fn chunk_text(text: &str, size: usize, overlap: usize) -> Vec<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() || size == 0 {
        return Vec::new();
    }

    let chars: Vec<char> = trimmed.chars().collect();
    let stride = size.saturating_sub(overlap).max(1);

    let mut chunks = Vec::new();
    let mut start = 0;
    while start < chars.len() {
        let end = (start + size).min(chars.len());
        chunks.push(chars[start..end].iter().collect());
        if end == chars.len() {
            break;
        }
        start += stride;
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_yields_no_chunks() {
        assert!(chunk_text("", 500, 50).is_empty());
        assert!(chunk_text("   \n\t  ", 500, 50).is_empty());
    }

    #[test]
    fn short_text_yields_single_chunk() {
        let chunks = chunk_text("hello world", 500, 50);
        assert_eq!(chunks, vec!["hello world"]);
    }

    #[test]
    fn windows_overlap_by_configured_amount() {
        // 10-char window, 3-char overlap → stride 7
        let text = "abcdefghijklmnopqrst"; // 20 chars
        let chunks = chunk_text(text, 10, 3);
        assert_eq!(chunks[0], "abcdefghij");
        assert_eq!(chunks[1], "hijklmnopq");
        // Last 3 of chunk 0 == first 3 of chunk 1
        assert_eq!(&chunks[0][7..], &chunks[1][..3]);
    }

    #[test]
    fn final_chunk_may_be_short() {
        let chunks = chunk_text("abcdefghijkl", 10, 3); // stride 7
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[1], "hijkl");
    }

    #[test]
    fn exact_window_is_one_chunk() {
        let chunks = chunk_text("abcdefghij", 10, 3);
        assert_eq!(chunks.len(), 1);
    }

    #[test]
    fn multibyte_text_never_splits_codepoints() {
        let text = "héllo wörld ünïcödé tèxt çhünkér"; // multi-byte chars
        let chunks = chunk_text(text, 10, 2);
        let total: usize = chunks.iter().map(|c| c.chars().count()).sum();
        assert!(total >= text.trim().chars().count());
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 10);
        }
    }

    #[test]
    fn default_parameters_cover_whole_text() {
        let text = "x".repeat(1200);
        let chunks = chunk_text(&text, 500, 50);
        // stride 450: windows at 0, 450, 900
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].len(), 500);
        assert_eq!(chunks[2].len(), 300);
    }
}
