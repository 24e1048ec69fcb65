//! The built-in demo: ingest a sample story, then run one question down
//! each branch of the pipeline.

use std::sync::Arc;

use bookcrew_config::AppConfig;
use bookcrew_index::InMemoryTextIndex;
use bookcrew_pipeline::{Orchestrator, generator_from_config};

const SAMPLE_STORY: &str = "the knight Lancelot lived in a stone castle overlooking the \
northern cliffs, where the wind never rested. every morning he trained alone in the \
courtyard, building the courage his quest would one day demand. one winter night a dragon \
descended on the village below and burned the granary to the ground. at dawn the knight \
rode out to face the dragon, and the whole village watched in silence from the walls.";

const DEMO_QUESTIONS: &[&str] = &[
    "Who is the main character?",
    "What is the story about?",
    "Where does the story take place?",
    "Why did the dragon attack?",
];

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    let generator = generator_from_config(&config.generator);
    let mut orchestrator = Orchestrator::new(Arc::new(InMemoryTextIndex::new()), config);
    if let Some(generator) = generator {
        orchestrator = orchestrator.with_generator(generator);
    }

    println!("Ingesting the sample story...");
    let report = orchestrator.ingest(SAMPLE_STORY).await?;
    println!("Indexed {} chunk(s).\n", report.chunk_count);

    for question in DEMO_QUESTIONS {
        println!("{}", "=".repeat(70));
        let answer = orchestrator.ask(question).await?;
        println!(
            "{}\n\n(type: {}, branch: {}, steps: {})\n",
            answer.final_answer, answer.question_type, answer.branch, answer.steps_executed
        );
    }

    Ok(())
}
