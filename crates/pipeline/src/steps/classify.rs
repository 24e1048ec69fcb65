//! Classification step — assigns a question type and picks the branch.
//!
//! Pure and deterministic: case-insensitive substring scan against ordered
//! keyword sets, first match wins. The priority order below is a contract;
//! questions can match multiple sets and the fixed order is how ties
//! resolve. No keyword match is not an error — it resolves to the general
//! category and the draft branch.

use tracing::info;

use bookcrew_core::{Branch, QuestionType, SharedState, StepName};

const CHARACTER_KEYWORDS: &[&str] = &["who", "character", "person"];
const DESCRIPTION_KEYWORDS: &[&str] = &["what", "describe", "explain", "about"];
const LOCATION_KEYWORDS: &[&str] = &["where", "place", "location", "setting"];
const REASONING_KEYWORDS: &[&str] = &[
    "why",
    "because",
    "reason",
    "purpose",
    "analyze",
    "meaning",
    "significance",
    "interpret",
];
const PROCESS_KEYWORDS: &[&str] = &["how", "method", "way", "process"];
const SUMMARY_KEYWORDS: &[&str] = &["summarize", "summary", "overview"];

/// Classify a question by keyword membership.
///
/// Matching is substring containment over the lowercased question, so
/// "whose" matches "who". That mirrors the routing contract exactly;
/// changing it would change observable branch selection.
pub fn classify(question: &str) -> QuestionType {
    let q = question.to_lowercase();
    let matches = |keywords: &[&str]| keywords.iter().any(|w| q.contains(w));

    if matches(CHARACTER_KEYWORDS) {
        QuestionType::Character
    } else if matches(DESCRIPTION_KEYWORDS) {
        QuestionType::Description
    } else if matches(LOCATION_KEYWORDS) {
        QuestionType::Location
    } else if matches(REASONING_KEYWORDS) {
        QuestionType::Reasoning
    } else if matches(PROCESS_KEYWORDS) {
        QuestionType::Process
    } else if matches(SUMMARY_KEYWORDS) {
        QuestionType::Summary
    } else {
        QuestionType::General
    }
}

/// One-sentence analysis of what the question is after.
fn analysis_sentence(question_type: QuestionType) -> &'static str {
    match question_type {
        QuestionType::Character => "This question asks about people or characters in the story.",
        QuestionType::Description => {
            "This question wants a description or explanation of something."
        }
        QuestionType::Location => "This question is about places or settings in the story.",
        QuestionType::Reasoning => {
            "This is a complex question that needs deep reasoning and analysis."
        }
        QuestionType::Process => "This question asks about how something happens or works.",
        QuestionType::Summary => "This question wants a summary or overview.",
        QuestionType::General => "This is a general question about the indexed content.",
    }
}

/// Run the classification step: write the question type and a summary
/// line into the state, and return the branch to take.
pub(crate) fn run(state: &mut SharedState) -> Branch {
    let question_type = classify(&state.question);
    let branch = question_type.branch();

    info!(step = "classify", %question_type, %branch, "Question classified");

    state.question_type = Some(question_type);
    state.record(
        StepName::Classify,
        format!(
            "Analysis complete: {question_type}. {}",
            analysis_sentence(question_type)
        ),
    );
    branch
}
