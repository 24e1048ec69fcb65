//! # BookCrew Core
//!
//! Domain types, traits, and error definitions for the BookCrew multi-agent
//! question-answering pipeline. This crate has **zero framework
//! dependencies** — it defines the domain model that all other crates
//! implement against.
//!
//! ## Design Philosophy
//!
//! The two external collaborators (the text index and the text generator)
//! are defined as traits here. Implementations live in their respective
//! crates. This enables:
//! - Swapping implementations via configuration
//! - Easy testing with mock/stub implementations
//! - Clean dependency graph (all crates depend inward on core)

pub mod error;
pub mod generator;
pub mod index;
pub mod question;
pub mod state;

// Re-export key types at crate root for ergonomics
pub use error::{Error, GenerationError, IndexError, Result};
pub use generator::Generator;
pub use index::TextIndex;
pub use question::{Branch, QuestionType};
pub use state::{SharedState, StepName};
