//! Generator trait — the abstraction over text-completion backends.
//!
//! The drafting and analysis steps are specified to work *without* a
//! generator at all (pure templating). When one is wired in it acts as
//! optional enrichment: a failed or empty completion falls back to the
//! template, it never fails the run.

use async_trait::async_trait;

use crate::error::GenerationError;

/// An opaque text-completion function.
#[async_trait]
pub trait Generator: Send + Sync {
    /// A human-readable name for this backend (e.g. "local", "mock").
    fn name(&self) -> &str;

    /// Complete the given prompt, returning generated text.
    async fn complete(&self, prompt: &str) -> Result<String, GenerationError>;
}
