//! Text indexing for BookCrew.
//!
//! Implements the [`TextIndex`](bookcrew_core::TextIndex) collaborator:
//! fixed-window chunking, a deterministic feature-hashing embedder, and
//! an in-memory vector store with atomic snapshot swap on rebuild.
//!
//! Everything here is pure Rust and fully reproducible — no model
//! downloads, no I/O. The embedder is deliberately simple; the pipeline
//! treats embeddings as opaque and only relies on nearest-neighbor
//! ordering being deterministic.

pub mod chunker;
pub mod embedding;
pub mod store;
pub mod vector;

pub use chunker::chunk_text;
pub use embedding::{EMBEDDING_DIM, HashedEmbedder};
pub use store::InMemoryTextIndex;
pub use vector::{ChunkEntry, cosine_similarity, rank_chunks};
