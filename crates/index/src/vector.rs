//! Vector similarity over embedded chunks.
//!
//! Pure-Rust cosine similarity and top-k ranking — the whole of the
//! "nearest neighbor" machinery the index needs.

use serde::{Deserialize, Serialize};

/// One indexed chunk: id, raw text, and its embedding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkEntry {
    /// Generated chunk id.
    pub id: String,
    /// The chunk text.
    pub text: String,
    /// Embedding vector for similarity search.
    pub embedding: Vec<f32>,
    /// Similarity score against the most recent query (set by ranking).
    #[serde(default)]
    pub score: f32,
}

/// Compute cosine similarity between two vectors.
///
/// Returns a value in [-1, 1] where 1 = identical, 0 = orthogonal.
/// Returns 0.0 if either vector is zero-length, empty, or the lengths
/// mismatch.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;

    for (x, y) in a.iter().zip(b.iter()) {
        let x = *x as f64;
        let y = *y as f64;
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom < 1e-10 {
        return 0.0;
    }

    (dot / denom) as f32
}

/// Rank chunk entries by cosine similarity to a query embedding.
///
/// Returns up to `k` entries sorted by descending similarity, with
/// `score` set to the cosine value. Ties keep the original index order so
/// ranking stays deterministic.
pub fn rank_chunks(entries: &[ChunkEntry], query_embedding: &[f32], k: usize) -> Vec<ChunkEntry> {
    let mut scored: Vec<ChunkEntry> = entries
        .iter()
        .map(|entry| {
            let mut e = entry.clone();
            e.score = cosine_similarity(&e.embedding, query_embedding);
            e
        })
        .collect();

    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(k);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, embedding: Vec<f32>) -> ChunkEntry {
        ChunkEntry {
            id: id.into(),
            text: format!("text for {id}"),
            embedding,
            score: 0.0,
        }
    }

    #[test]
    fn cosine_identical_vectors() {
        let v = vec![1.0, 2.0, 3.0];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn cosine_orthogonal_vectors() {
        let a = vec![1.0, 0.0, 0.0];
        let b = vec![0.0, 1.0, 0.0];
        assert!(cosine_similarity(&a, &b).abs() < 1e-6);
    }

    #[test]
    fn cosine_empty_vectors() {
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
    }

    #[test]
    fn cosine_mismatched_lengths() {
        assert_eq!(cosine_similarity(&[1.0, 2.0], &[1.0, 2.0, 3.0]), 0.0);
    }

    #[test]
    fn cosine_zero_vector() {
        let zero = vec![0.0, 0.0, 0.0];
        let v = vec![1.0, 2.0, 3.0];
        assert_eq!(cosine_similarity(&zero, &v), 0.0);
    }

    #[test]
    fn rank_orders_by_descending_similarity() {
        let query = vec![1.0, 0.0, 0.0];
        let entries = vec![
            entry("a", vec![0.0, 1.0, 0.0]), // orthogonal
            entry("b", vec![1.0, 0.0, 0.0]), // identical
            entry("c", vec![0.5, 0.5, 0.0]), // partial
        ];

        let ranked = rank_chunks(&entries, &query, 10);
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].id, "b");
        assert_eq!(ranked[1].id, "c");
        assert_eq!(ranked[2].id, "a");
        assert!(ranked[0].score > ranked[1].score);
    }

    #[test]
    fn rank_respects_k() {
        let query = vec![1.0, 0.0];
        let entries: Vec<_> = (0..10)
            .map(|i| entry(&format!("e{i}"), vec![1.0, i as f32 * 0.1]))
            .collect();
        assert_eq!(rank_chunks(&entries, &query, 3).len(), 3);
    }

    #[test]
    fn rank_empty_entries() {
        assert!(rank_chunks(&[], &[1.0, 0.0], 5).is_empty());
    }
}
