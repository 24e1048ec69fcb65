//! In-memory text index with atomic snapshot swap.
//!
//! `build` assembles a complete new snapshot off to the side and swaps
//! the shared pointer under a short write lock, so a rebuild never blocks
//! in-flight queries — they finish against the snapshot they started
//! with. Queries on an unbuilt index return empty results, not errors.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use bookcrew_core::TextIndex;

use crate::embedding::HashedEmbedder;
use crate::vector::{ChunkEntry, rank_chunks};

/// One immutable generation of the index.
struct IndexSnapshot {
    entries: Vec<ChunkEntry>,
    built_at: DateTime<Utc>,
}

/// The in-memory [`TextIndex`] implementation.
pub struct InMemoryTextIndex {
    snapshot: RwLock<Option<Arc<IndexSnapshot>>>,
    embedder: HashedEmbedder,
}

impl InMemoryTextIndex {
    pub fn new() -> Self {
        Self {
            snapshot: RwLock::new(None),
            embedder: HashedEmbedder::new(),
        }
    }

    /// When the current snapshot was built, if any.
    pub async fn built_at(&self) -> Option<DateTime<Utc>> {
        self.snapshot.read().await.as_ref().map(|s| s.built_at)
    }
}

impl Default for InMemoryTextIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextIndex for InMemoryTextIndex {
    fn name(&self) -> &str {
        "in_memory"
    }

    async fn build(&self, chunks: Vec<String>) {
        let entries: Vec<ChunkEntry> = chunks
            .into_iter()
            .map(|text| ChunkEntry {
                id: Uuid::new_v4().to_string(),
                embedding: self.embedder.embed(&text),
                text,
                score: 0.0,
            })
            .collect();

        let built = Arc::new(IndexSnapshot {
            built_at: Utc::now(),
            entries,
        });

        let mut guard = self.snapshot.write().await;
        info!(chunks = built.entries.len(), "Index snapshot swapped in");
        *guard = Some(built);
    }

    async fn query(&self, text: &str, k: usize) -> Vec<String> {
        // Clone the pointer and drop the lock before ranking, so a
        // concurrent rebuild is never blocked on a slow query.
        let snapshot = { self.snapshot.read().await.clone() };

        let Some(snapshot) = snapshot else {
            debug!("Query against unbuilt index, returning no passages");
            return Vec::new();
        };

        let query_embedding = self.embedder.embed(text);
        let ranked = rank_chunks(&snapshot.entries, &query_embedding, k);
        debug!(k, returned = ranked.len(), "Index query complete");
        ranked.into_iter().map(|e| e.text).collect()
    }

    async fn chunk_count(&self) -> usize {
        self.snapshot
            .read()
            .await
            .as_ref()
            .map(|s| s.entries.len())
            .unwrap_or(0)
    }
}
