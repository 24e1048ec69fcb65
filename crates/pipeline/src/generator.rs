//! The built-in `local` generation backend and its config-driven factory.
//!
//! The backend is extractive rather than generative: it scores the
//! sentences of the prompt's context section by term overlap with the
//! question and returns the best ones verbatim. No model download, fully
//! deterministic. When nothing overlaps it fails, and the draft/analysis
//! steps fall back to their pure templates.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use bookcrew_config::GeneratorConfig;
use bookcrew_core::{GenerationError, Generator};

/// How many context sentences an extractive completion returns at most.
const MAX_SENTENCES: usize = 2;

/// Build the generator named by `config`.
///
/// Returns `None` when generation is disabled or the model identifier is
/// unknown; the pipeline then runs on templates alone.
pub fn generator_from_config(config: &GeneratorConfig) -> Option<Arc<dyn Generator>> {
    if !config.enabled {
        return None;
    }
    match config.model.as_str() {
        "local" => {
            info!(model = "local", "Generation backend enabled");
            Some(Arc::new(LocalExtractiveGenerator))
        }
        other => {
            warn!(model = other, "Unknown generator model, running without enrichment");
            None
        }
    }
}

/// The `local` backend: deterministic extractive completion.
pub struct LocalExtractiveGenerator;

#[async_trait]
impl Generator for LocalExtractiveGenerator {
    fn name(&self) -> &str {
        "local"
    }

    async fn complete(&self, prompt: &str) -> Result<String, GenerationError> {
        let (context, question) = split_prompt(prompt);
        let question_terms = terms(question);
        if question_terms.is_empty() {
            return Err(GenerationError::Empty);
        }

        let mut scored: Vec<(usize, &str)> = context
            .split_inclusive(['.', '!', '?'])
            .map(str::trim)
            .filter(|sentence| !sentence.is_empty())
            .map(|sentence| {
                let sentence_terms = terms(sentence);
                let overlap = question_terms
                    .iter()
                    .filter(|term| sentence_terms.contains(*term))
                    .count();
                (overlap, sentence)
            })
            .filter(|(overlap, _)| *overlap > 0)
            .collect();
        if scored.is_empty() {
            return Err(GenerationError::Empty);
        }

        // Stable sort keeps tied sentences in narrative order.
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        Ok(scored
            .iter()
            .take(MAX_SENTENCES)
            .map(|(_, sentence)| *sentence)
            .collect::<Vec<_>>()
            .join(" "))
    }
}

/// The draft and analysis prompts carry `Context:` and `Question:`
/// sections; fall back to the whole prompt when the markers are absent.
fn split_prompt(prompt: &str) -> (&str, &str) {
    let question_at = prompt.rfind("Question:");
    let question = question_at
        .map(|i| prompt[i + "Question:".len()..].trim())
        .unwrap_or(prompt);
    let context = match (prompt.find("Context:"), question_at) {
        (Some(start), Some(end)) if start < end => prompt[start + "Context:".len()..end].trim(),
        _ => prompt,
    };
    (context, question)
}

/// Lowercased alphanumeric tokens longer than two characters.
fn terms(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.chars().count() > 2)
        .map(str::to_lowercase)
        .collect()
}
