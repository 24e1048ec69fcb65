//! Synthesis step — aggregates every partial output into the final answer.
//!
//! Deterministic: sections appear in a fixed canonical order (retrieval,
//! classification, then whichever branch ran), never map insertion order,
//! so identical runs produce byte-identical answers. The untaken branch
//! contributes nothing. Also enforces the branch contract — finding both
//! or neither branch output here is a programmer error.

use tracing::info;

use bookcrew_core::{Error, Result, SharedState, StepName};

/// Canonical section order for the assembled answer.
const SECTION_ORDER: [StepName; 4] = [
    StepName::Retrieval,
    StepName::Classify,
    StepName::Draft,
    StepName::Analyze,
];

pub(crate) fn run(state: &mut SharedState) -> Result<()> {
    let drafted = state.output(StepName::Draft).is_some();
    let analyzed = state.output(StepName::Analyze).is_some();
    if drafted == analyzed {
        return Err(Error::Internal(format!(
            "branch contract violated: draft={drafted}, analyze={analyzed}"
        )));
    }

    let mut answer = format!("Question: {}\n", state.question);
    let mut sections = 0usize;
    for step in SECTION_ORDER {
        if let Some(output) = state.output(step)
            && !output.is_empty()
        {
            answer.push_str(&format!("\n[{}]\n{output}\n", step.label()));
            sections += 1;
        }
    }

    info!(step = "synthesize", sections, chars = answer.len(), "Final answer assembled");

    state.final_answer = Some(answer);
    state.record(
        StepName::Synthesize,
        format!("Assembled the final answer from {sections} partial outputs."),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drafted_state() -> SharedState {
        let mut state = SharedState::new("What happened?");
        state.record(StepName::Retrieval, "Found 2 relevant passages for this question.");
        state.record(StepName::Classify, "Analysis complete: description request.");
        state.record(StepName::Draft, "Detailed description: something happened.");
        state
    }

    #[test]
    fn answer_begins_with_restated_question() {
        let mut state = drafted_state();
        run(&mut state).unwrap();
        assert!(state.final_answer.unwrap().starts_with("Question: What happened?"));
    }

    #[test]
    fn sections_follow_canonical_order() {
        let mut state = drafted_state();
        run(&mut state).unwrap();

        let answer = state.final_answer.unwrap();
        let retrieval = answer.find("[Retrieval]").unwrap();
        let classify = answer.find("[Classification]").unwrap();
        let draft = answer.find("[Draft]").unwrap();
        assert!(retrieval < classify && classify < draft);
    }

    #[test]
    fn untaken_branch_contributes_nothing() {
        let mut state = drafted_state();
        run(&mut state).unwrap();
        assert!(!state.final_answer.unwrap().contains("[Deep Analysis]"));
    }

    #[test]
    fn analyze_branch_appears_when_taken() {
        let mut state = SharedState::new("Why?");
        state.record(StepName::Retrieval, "Found 1 relevant passage for this question.");
        state.record(StepName::Classify, "Analysis complete: reasoning question.");
        state.record(StepName::Analyze, "Deep analysis of the question.");
        run(&mut state).unwrap();

        let answer = state.final_answer.unwrap();
        assert!(answer.contains("[Deep Analysis]"));
        assert!(!answer.contains("[Draft]"));
    }

    #[test]
    fn both_branches_is_an_internal_error() {
        let mut state = drafted_state();
        state.record(StepName::Analyze, "should not exist");
        assert!(matches!(run(&mut state), Err(Error::Internal(_))));
    }

    #[test]
    fn neither_branch_is_an_internal_error() {
        let mut state = SharedState::new("q");
        state.record(StepName::Retrieval, "Found no relevant passages.");
        state.record(StepName::Classify, "Analysis complete: general question.");
        assert!(matches!(run(&mut state), Err(Error::Internal(_))));
    }

    #[test]
    fn synthesis_is_deterministic() {
        let mut a = drafted_state();
        let mut b = drafted_state();
        run(&mut a).unwrap();
        run(&mut b).unwrap();
        assert_eq!(a.final_answer, b.final_answer);
    }
}
