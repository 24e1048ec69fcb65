//! The five pipeline steps.
//!
//! Each step reads from and writes into the per-run
//! [`SharedState`](bookcrew_core::SharedState); the orchestrator decides
//! the order. Classification is a pure function; retrieval talks to the
//! index; draft and analyze may consult an optional generator but always
//! have a pure-template fallback.

use tracing::warn;

use bookcrew_core::Generator;

pub mod analyze;
pub mod classify;
pub mod draft;
pub mod retrieval;
pub mod synthesize;

/// Attempt one generator completion. Any failure or empty output is
/// logged and swallowed — the caller falls back to its pure template, so
/// the orchestration contract never depends on the backend.
pub(crate) async fn try_generate(generator: Option<&dyn Generator>, prompt: &str) -> Option<String> {
    let generator = generator?;
    match generator.complete(prompt).await {
        Ok(text) if !text.trim().is_empty() => Some(text),
        Ok(_) => {
            warn!(generator = generator.name(), "Generator returned empty output, using template");
            None
        }
        Err(err) => {
            warn!(
                generator = generator.name(),
                error = %err,
                "Generation failed, falling back to template"
            );
            None
        }
    }
}

/// The first `max_chars` characters of `text`, with a trailing ellipsis
/// when anything was cut. Character-based so multi-byte text never splits
/// mid-codepoint.
pub(crate) fn excerpt(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars).collect();
    cut.push_str("...");
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excerpt_passes_short_text_through() {
        assert_eq!(excerpt("short", 300), "short");
    }

    #[test]
    fn excerpt_truncates_with_ellipsis() {
        let long = "a".repeat(400);
        let cut = excerpt(&long, 300);
        assert_eq!(cut.chars().count(), 303);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn excerpt_is_codepoint_safe() {
        let text = "é".repeat(10);
        let cut = excerpt(&text, 4);
        assert!(cut.starts_with("éééé"));
    }
}
