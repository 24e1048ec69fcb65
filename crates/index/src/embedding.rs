//! Deterministic feature-hashing embedder.
//!
//! Maps text to a fixed-dimension vector by hashing lowercase
//! alphanumeric tokens into buckets and L2-normalizing the counts.
//! Two texts sharing vocabulary land in overlapping buckets, which is
//! enough signal for nearest-neighbor retrieval over book chunks without
//! any model weights. Same input always produces the same vector.

use std::hash::{DefaultHasher, Hash, Hasher};

/// Default embedding dimensionality.
pub const EMBEDDING_DIM: usize = 256;

/// A pure, deterministic text embedder.
#[derive(Debug, Clone)]
pub struct HashedEmbedder {
    dims: usize,
}

impl HashedEmbedder {
    pub fn new() -> Self {
        Self { dims: EMBEDDING_DIM }
    }

    /// Use a non-default dimensionality (mainly for tests).
    pub fn with_dims(dims: usize) -> Self {
        Self { dims }
    }

    pub fn dims(&self) -> usize {
        self.dims
    }

    /// Embed `text` into an L2-normalized vector.
    ///
    /// Text with no alphanumeric tokens embeds to the zero vector, which
    /// cosine similarity treats as matching nothing.
    pub fn embed(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.dims];

        for token in tokenize(text) {
            let mut hasher = DefaultHasher::new();
            token.hash(&mut hasher);
            let bucket = (hasher.finish() as usize) % self.dims;
            vector[bucket] += 1.0;
        }

        let norm: f32 = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for v in &mut vector {
                *v /= norm;
            }
        }
        vector
    }
}

impl Default for HashedEmbedder {
    fn default() -> Self {
        Self::new()
    }
}

/// Lowercase alphanumeric tokens of `text`.
fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
}
