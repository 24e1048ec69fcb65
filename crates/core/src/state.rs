//! The shared per-run state threaded through every pipeline step.
//!
//! One `SharedState` is created per `ask` call and discarded after the
//! final answer is read. It is never shared between runs — the text index
//! is the only state that persists across questions.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::question::QuestionType;

/// Names of the five pipeline stages. Used as the key for per-step
/// outputs and for display labels in the synthesized answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepName {
    Retrieval,
    Classify,
    Draft,
    Analyze,
    Synthesize,
}

impl StepName {
    /// Display label used when the synthesis step assembles the answer.
    pub fn label(&self) -> &'static str {
        match self {
            StepName::Retrieval => "Retrieval",
            StepName::Classify => "Classification",
            StepName::Draft => "Draft",
            StepName::Analyze => "Deep Analysis",
            StepName::Synthesize => "Synthesis",
        }
    }
}

impl std::fmt::Display for StepName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The mutable record threaded through every step of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharedState {
    /// The user's question. Immutable once set for a run.
    pub question: String,

    /// Passages written once by the retrieval step, in descending
    /// similarity order. Empty is valid (no index built yet).
    pub retrieved_passages: Vec<String>,

    /// Written once by the classification step.
    pub question_type: Option<QuestionType>,

    /// Each step records its own entry. Insertion order carries no
    /// meaning; the synthesis step imposes a fixed canonical order.
    pub step_outputs: HashMap<StepName, String>,

    /// Incremented by every step. Diagnostic only — the non-infinite-loop
    /// guarantee comes from the fixed state machine, never this counter.
    pub step_count: u32,

    /// Written exactly once, by the synthesis step. Non-empty if and only
    /// if the run reached the terminal state.
    pub final_answer: Option<String>,
}

impl SharedState {
    /// Create a fresh state for one run.
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            retrieved_passages: Vec::new(),
            question_type: None,
            step_outputs: HashMap::new(),
            step_count: 0,
            final_answer: None,
        }
    }

    /// Record a step's partial output and bump the diagnostic counter.
    pub fn record(&mut self, step: StepName, output: impl Into<String>) {
        self.step_outputs.insert(step, output.into());
        self.step_count += 1;
    }

    /// The retrieved passages joined with a blank line separator — the
    /// "context text" consumed by the drafting and analysis steps.
    pub fn context_text(&self) -> String {
        self.retrieved_passages.join("\n\n")
    }

    /// The output a given step recorded, if any.
    pub fn output(&self, step: StepName) -> Option<&str> {
        self.step_outputs.get(&step).map(String::as_str)
    }
}
