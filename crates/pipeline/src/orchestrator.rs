//! The workflow engine — owns the step order and the run loop.
//!
//! `ingest` chunks a document and rebuilds the index; `ask` runs exactly
//! one pass through the fixed state machine over a fresh per-run state.
//! Separate `ask` calls never share state; the index is read-only during
//! a run and swapped atomically by `ingest`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

use bookcrew_config::AppConfig;
use bookcrew_core::{Branch, Error, Generator, QuestionType, Result, SharedState, TextIndex};
use bookcrew_index::chunk_text;

use crate::steps;

/// Upper bound on stages executed per run — the five named stages.
/// Exceeding it is a bug in the transition table, not a recoverable
/// condition.
pub const MAX_STEPS: usize = 5;

/// The stages of a run. `Done` is terminal; no other transitions exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Retrieval,
    Classify,
    Draft,
    Analyze,
    Synthesize,
    Done,
}

/// Result of ingesting a document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestReport {
    /// How many chunks the document produced.
    pub chunk_count: usize,
    /// When the index was rebuilt.
    pub ingested_at: DateTime<Utc>,
}

/// Result of one `ask` run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerReport {
    /// The synthesized answer. Non-empty by construction.
    pub final_answer: String,
    /// The category the classifier assigned.
    pub question_type: QuestionType,
    /// Which branch ran.
    pub branch: Branch,
    /// Diagnostic step counter from the run's shared state.
    pub steps_executed: u32,
}

/// The orchestrator: owns the index handle, the optional generator, and
/// the run loop.
pub struct Orchestrator {
    index: Arc<dyn TextIndex>,
    generator: Option<Arc<dyn Generator>>,
    config: AppConfig,
}

impl Orchestrator {
    pub fn new(index: Arc<dyn TextIndex>, config: AppConfig) -> Self {
        Self {
            index,
            generator: None,
            config,
        }
    }

    /// Wire in an optional generation backend for draft/analysis
    /// enrichment.
    pub fn with_generator(mut self, generator: Arc<dyn Generator>) -> Self {
        self.generator = Some(generator);
        self
    }

    /// Chunk `document` and rebuild the index from it.
    ///
    /// An empty (or all-whitespace) document yields zero chunks and fails
    /// with [`IndexError::EmptyDocument`](bookcrew_core::IndexError); the
    /// existing index, if any, is left untouched.
    pub async fn ingest(&self, document: &str) -> Result<IngestReport> {
        let chunks = chunk_text(
            document,
            self.config.chunking.chunk_size,
            self.config.chunking.chunk_overlap,
        );
        if chunks.is_empty() {
            return Err(bookcrew_core::IndexError::EmptyDocument.into());
        }

        let chunk_count = chunks.len();
        self.index.build(chunks).await;

        info!(chunk_count, index = self.index.name(), "Document ingested");
        Ok(IngestReport {
            chunk_count,
            ingested_at: Utc::now(),
        })
    }

    /// Run one pass through the step graph and return the final answer.
    ///
    /// Each call gets a fresh [`SharedState`]; concurrent `ask` calls
    /// share the index read-only.
    pub async fn ask(&self, question: &str) -> Result<AnswerReport> {
        if question.trim().is_empty() {
            return Err(Error::EmptyQuestion);
        }

        info!(question, "Starting pipeline run");
        let mut state = SharedState::new(question);
        let mut stage = Stage::Retrieval;
        let mut executed = 0usize;

        while stage != Stage::Done {
            executed += 1;
            if executed > MAX_STEPS {
                return Err(Error::Internal(format!(
                    "step bound {MAX_STEPS} exceeded at stage {stage:?}"
                )));
            }
            debug!(?stage, executed, "Executing stage");

            stage = match stage {
                Stage::Retrieval => {
                    steps::retrieval::run(
                        self.index.as_ref(),
                        &mut state,
                        self.config.retrieval.top_k,
                    )
                    .await;
                    Stage::Classify
                }
                Stage::Classify => match steps::classify::run(&mut state) {
                    Branch::Draft => Stage::Draft,
                    Branch::Analyze => Stage::Analyze,
                },
                Stage::Draft => {
                    steps::draft::run(&mut state, self.generator.as_deref()).await;
                    Stage::Synthesize
                }
                Stage::Analyze => {
                    steps::analyze::run(&mut state, self.generator.as_deref()).await;
                    Stage::Synthesize
                }
                Stage::Synthesize => {
                    steps::synthesize::run(&mut state)?;
                    Stage::Done
                }
                Stage::Done => unreachable!("loop exits before Done is dispatched"),
            };
        }

        let question_type = state
            .question_type
            .ok_or_else(|| Error::Internal("run finished without a classification".into()))?;
        let final_answer = state
            .final_answer
            .take()
            .filter(|answer| !answer.is_empty())
            .ok_or_else(|| Error::Internal("run finished without a final answer".into()))?;

        info!(
            %question_type,
            branch = %question_type.branch(),
            steps = state.step_count,
            "Pipeline run complete"
        );

        Ok(AnswerReport {
            final_answer,
            question_type,
            branch: question_type.branch(),
            steps_executed: state.step_count,
        })
    }
}
