//! Shared test helpers for pipeline tests.

use async_trait::async_trait;
use std::sync::Mutex;

use bookcrew_core::error::GenerationError;
use bookcrew_core::{Generator, TextIndex};

/// A fixed index that returns its passages in order, ignoring similarity.
///
/// Lets step tests control exactly what retrieval sees without building
/// real embeddings.
pub struct StaticIndex {
    passages: Vec<String>,
}

impl StaticIndex {
    pub fn with_passages(passages: Vec<String>) -> Self {
        Self { passages }
    }

    pub fn empty() -> Self {
        Self { passages: Vec::new() }
    }
}

#[async_trait]
impl TextIndex for StaticIndex {
    fn name(&self) -> &str {
        "static"
    }

    async fn build(&self, _chunks: Vec<String>) {}

    async fn query(&self, _text: &str, k: usize) -> Vec<String> {
        self.passages.iter().take(k).cloned().collect()
    }

    async fn chunk_count(&self) -> usize {
        self.passages.len()
    }
}

/// A mock generator that returns a sequence of scripted responses.
///
/// Each call to `complete` returns the next response in the queue.
/// Panics if more calls are made than responses provided.
pub struct SequentialMockGenerator {
    responses: Mutex<Vec<String>>,
    call_count: Mutex<usize>,
}

impl SequentialMockGenerator {
    pub fn new(responses: Vec<String>) -> Self {
        Self {
            responses: Mutex::new(responses),
            call_count: Mutex::new(0),
        }
    }

    /// A generator that returns a single scripted response.
    pub fn single(text: &str) -> Self {
        Self::new(vec![text.to_string()])
    }

    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

#[async_trait]
impl Generator for SequentialMockGenerator {
    fn name(&self) -> &str {
        "sequential_mock"
    }

    async fn complete(&self, _prompt: &str) -> Result<String, GenerationError> {
        let mut count = self.call_count.lock().unwrap();
        let responses = self.responses.lock().unwrap();

        if *count >= responses.len() {
            panic!(
                "SequentialMockGenerator: no more responses (call #{}, have {})",
                *count,
                responses.len()
            );
        }

        let response = responses[*count].clone();
        *count += 1;
        Ok(response)
    }
}

/// A generator whose backend always fails.
pub struct FailingGenerator;

#[async_trait]
impl Generator for FailingGenerator {
    fn name(&self) -> &str {
        "failing"
    }

    async fn complete(&self, _prompt: &str) -> Result<String, GenerationError> {
        Err(GenerationError::Backend("scripted failure".into()))
    }
}
