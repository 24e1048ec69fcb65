//! Deep-analysis step — the expensive branch.
//!
//! Only reasoning-flavored questions land here. Produces a longer
//! templated reflection embedding a prefix of the retrieved context plus
//! fixed scaffolding. Like drafting, it tolerates an empty context and
//! treats the generator as optional enrichment.

use tracing::info;

use bookcrew_core::{Generator, QuestionType, SharedState, StepName};

use super::{excerpt, try_generate};

const ANALYSIS_EXCERPT: usize = 400;

pub(crate) async fn run(state: &mut SharedState, generator: Option<&dyn Generator>) {
    let question_type = state.question_type.unwrap_or(QuestionType::Reasoning);
    let context = state.context_text();

    let prompt = format!(
        "Give a deep, reflective analysis of the question using only this context.\n\n\
         Context:\n{context}\n\nQuestion: {}",
        state.question
    );
    let answer = match try_generate(generator, &prompt).await {
        Some(generated) => generated,
        None => template(&state.question, question_type, &context),
    };

    info!(step = "analyze", %question_type, chars = answer.len(), "Deep analysis composed");
    state.record(StepName::Analyze, answer);
}

fn template(question: &str, question_type: QuestionType, context: &str) -> String {
    let insights = if context.trim().is_empty() {
        "No passages have been indexed yet; the reflection below rests on the question alone."
            .to_string()
    } else {
        excerpt(context, ANALYSIS_EXCERPT)
    };

    format!(
        "Deep analysis\n\n\
         Your question: {question}\n\n\
         Deeper context: looking beyond the surface, this {question_type} touches on \
         important themes in the narrative.\n\n\
         Key insights from the text:\n{insights}\n\n\
         Thoughtful reflection: great literature often carries layers of meaning. The answer \
         involves understanding both the literal events and their significance within the \
         broader story."
    )
}
