//! TextIndex trait — the abstraction over the nearest-neighbor text store.
//!
//! A TextIndex ingests pre-chunked text, stores it however it likes, and
//! answers nearest-neighbor queries. The pipeline treats it as an opaque
//! collaborator: build replaces the whole index, queries are read-only.

use async_trait::async_trait;

/// The nearest-neighbor search structure over embedded chunks.
///
/// The index is logically immutable between builds: `build` replaces the
/// entire contents atomically, and concurrent queries either see the old
/// contents or the new ones, never a mix.
#[async_trait]
pub trait TextIndex: Send + Sync {
    /// A human-readable name for this index implementation.
    fn name(&self) -> &str;

    /// Replace the index contents with the given chunks.
    async fn build(&self, chunks: Vec<String>);

    /// Return the `k` chunks nearest to `text`, in descending similarity
    /// order. Returns an empty vec (not an error) if no index has been
    /// built yet.
    async fn query(&self, text: &str, k: usize) -> Vec<String>;

    /// Number of chunks currently indexed. Zero if unbuilt.
    async fn chunk_count(&self) -> usize;
}
