//! Drafting step — the cheap branch.
//!
//! Turns the retrieved context into a partial answer with small
//! per-question-type templates. Works with an empty context (generic
//! sentence) and with no generator at all; when a generator is wired in,
//! one completion is attempted and any failure falls back to the
//! template.

use tracing::info;

use bookcrew_core::{Generator, QuestionType, SharedState, StepName};

use super::{excerpt, try_generate};

/// Prefix lengths per question type (characters).
const DESCRIPTION_EXCERPT: usize = 300;
const LOCATION_EXCERPT: usize = 250;
const SUMMARY_EXCERPT: usize = 350;
const GENERAL_EXCERPT: usize = 300;

pub(crate) async fn run(state: &mut SharedState, generator: Option<&dyn Generator>) {
    let question_type = state.question_type.unwrap_or(QuestionType::General);
    let context = state.context_text();

    let prompt = format!(
        "Answer the question using only this context.\n\nContext:\n{context}\n\nQuestion: {}",
        state.question
    );
    let answer = match try_generate(generator, &prompt).await {
        Some(generated) => generated,
        None => template(question_type, &context),
    };

    info!(step = "draft", %question_type, chars = answer.len(), "Draft composed");
    state.record(StepName::Draft, answer);
}

/// The pure template for a question type over the retrieved context.
fn template(question_type: QuestionType, context: &str) -> String {
    if context.trim().is_empty() {
        return "No passages have been indexed yet, so only a general answer is possible: \
                ingest a document and ask again to ground the answer in its text."
            .to_string();
    }

    match question_type {
        QuestionType::Character => character_template(context),
        QuestionType::Description => format!(
            "Detailed description: {}\n\nThis passage provides the context and imagery most \
             closely related to the question.",
            excerpt(context, DESCRIPTION_EXCERPT)
        ),
        QuestionType::Location => format!(
            "Setting analysis: the story takes place in the world described here:\n\n{}\n\n\
             The setting plays a crucial role in shaping the narrative.",
            excerpt(context, LOCATION_EXCERPT)
        ),
        QuestionType::Summary => format!(
            "Summary of the retrieved passages:\n\n{}",
            excerpt(context, SUMMARY_EXCERPT)
        ),
        QuestionType::Process | QuestionType::General | QuestionType::Reasoning => format!(
            "Based on the indexed text, here is what is most relevant to the question:\n\n{}",
            excerpt(context, GENERAL_EXCERPT)
        ),
    }
}

fn character_template(context: &str) -> String {
    match find_main_character(context) {
        Some(name) => format!(
            "Character analysis: based on the text, the main character appears to be {name}. \
             The narrative centers on their experiences and development throughout the story."
        ),
        None => "Character analysis: the text discusses various characters, with their roles \
                 and relationships being central to the narrative."
            .to_string(),
    }
}

/// First titlecase, alphabetic token longer than two characters —
/// the character-name heuristic.
fn find_main_character(context: &str) -> Option<String> {
    context
        .split_whitespace()
        .map(|word| word.trim_matches(['.', ',', '!', '?']))
        .find(|word| is_titlecase_name(word))
        .map(str::to_string)
}

fn is_titlecase_name(word: &str) -> bool {
    if word.chars().count() <= 2 || !word.chars().all(char::is_alphabetic) {
        return false;
    }
    let mut chars = word.chars();
    let first_upper = chars.next().is_some_and(char::is_uppercase);
    first_upper && chars.all(char::is_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{FailingGenerator, SequentialMockGenerator};

    fn state_with_context(question: &str, question_type: QuestionType, passages: Vec<&str>) -> SharedState {
        let mut state = SharedState::new(question);
        state.question_type = Some(question_type);
        state.retrieved_passages = passages.into_iter().map(String::from).collect();
        state
    }

    #[test]
    fn finds_first_titlecase_name() {
        let context = "the brave Sir Lancelot rode against the dragon";
        assert_eq!(find_main_character(context), Some("Sir".into()));
    }

    #[test]
    fn skips_short_and_uppercase_words() {
        assert_eq!(find_main_character("he DRAGON it Me saw Arthur"), Some("Arthur".into()));
        assert_eq!(find_main_character("no names here at all"), None);
    }

    #[test]
    fn strips_punctuation_before_matching() {
        assert_eq!(find_main_character("they said, Lancelot! and left"), Some("Lancelot".into()));
    }

    #[tokio::test]
    async fn character_draft_names_the_character() {
        let mut state = state_with_context(
            "Who is the main character?",
            QuestionType::Character,
            vec!["the knight Lancelot faced his fears"],
        );
        run(&mut state, None).await;

        let output = state.output(StepName::Draft).unwrap();
        assert!(output.contains("Lancelot"));
    }

    #[tokio::test]
    async fn description_draft_truncates_context() {
        let long_passage = "x".repeat(1000);
        let mut state = state_with_context("What is it?", QuestionType::Description, vec![&long_passage]);
        run(&mut state, None).await;

        let output = state.output(StepName::Draft).unwrap();
        assert!(output.contains("..."));
        assert!(output.len() < 600);
    }

    #[tokio::test]
    async fn empty_context_falls_back_to_generic_sentence() {
        for question_type in [
            QuestionType::Character,
            QuestionType::Description,
            QuestionType::Location,
            QuestionType::Summary,
            QuestionType::General,
        ] {
            let mut state = state_with_context("question", question_type, vec![]);
            run(&mut state, None).await;
            let output = state.output(StepName::Draft).unwrap();
            assert!(!output.is_empty());
            assert!(output.contains("No passages have been indexed"));
        }
    }

    #[tokio::test]
    async fn generator_output_is_used_when_available() {
        let generator = SequentialMockGenerator::single("A generated grounded answer.");
        let mut state =
            state_with_context("What happened?", QuestionType::Description, vec!["some context"]);
        run(&mut state, Some(&generator)).await;

        assert_eq!(state.output(StepName::Draft), Some("A generated grounded answer."));
        assert_eq!(generator.call_count(), 1);
    }

    #[tokio::test]
    async fn generator_failure_falls_back_to_template() {
        let generator = FailingGenerator;
        let mut state =
            state_with_context("What happened?", QuestionType::Description, vec!["some context"]);
        run(&mut state, Some(&generator)).await;

        let output = state.output(StepName::Draft).unwrap();
        assert!(output.contains("Detailed description"));
    }
}
