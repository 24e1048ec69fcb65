//! The BookCrew orchestration core.
//!
//! Every question runs through the same fixed state machine:
//!
//! ```text
//! START → RETRIEVAL → CLASSIFY → {DRAFT | ANALYZE} → SYNTHESIZE → DONE
//! ```
//!
//! 1. **Retrieval** queries the text index for the nearest passages
//! 2. **Classify** assigns a question type and picks the branch
//! 3. **Draft** (cheap templates) or **Analyze** (deep scaffold) — never both
//! 4. **Synthesize** aggregates every partial output into the final answer
//!
//! No other transitions exist. The run is bounded to five steps; exceeding
//! the bound is an internal invariant violation, never a loop.

pub mod generator;
pub mod orchestrator;
pub mod steps;

pub use generator::{LocalExtractiveGenerator, generator_from_config};
pub use orchestrator::{AnswerReport, IngestReport, MAX_STEPS, Orchestrator};
pub use steps::classify::classify;

#[cfg(test)]
pub(crate) mod test_helpers;
