//! Retrieval step — pulls the nearest passages out of the text index.
//!
//! Always the first step of a run. An unbuilt or empty index is not an
//! error: the step records zero passages and downstream steps fall back
//! to their generic templates.

use tracing::info;

use bookcrew_core::{SharedState, StepName, TextIndex};

pub(crate) async fn run(index: &dyn TextIndex, state: &mut SharedState, top_k: usize) {
    let passages = index.query(&state.question, top_k).await;

    info!(
        step = "retrieval",
        index = index.name(),
        passages = passages.len(),
        "Retrieved context passages"
    );

    let summary = match passages.len() {
        0 => "Found no relevant passages; no document has been indexed yet.".to_string(),
        1 => "Found 1 relevant passage for this question.".to_string(),
        n => format!("Found {n} relevant passages for this question."),
    };

    state.retrieved_passages = passages;
    state.record(StepName::Retrieval, summary);
}
