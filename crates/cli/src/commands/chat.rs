//! Interactive mode: ingest a document from disk, then answer questions
//! from stdin until EOF or `quit`.

use std::io::{BufRead, Write};
use std::path::Path;
use std::sync::Arc;
use tracing::warn;

use bookcrew_config::AppConfig;
use bookcrew_index::InMemoryTextIndex;
use bookcrew_pipeline::{Orchestrator, generator_from_config};

pub async fn run(book: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    let generator = generator_from_config(&config.generator);
    let mut orchestrator = Orchestrator::new(Arc::new(InMemoryTextIndex::new()), config);
    if let Some(generator) = generator {
        orchestrator = orchestrator.with_generator(generator);
    }

    let document = std::fs::read_to_string(book)?;
    let report = orchestrator.ingest(&document).await?;
    println!(
        "Ingested {} — {} chunk(s). Ask away (or `quit` to exit).",
        book.display(),
        report.chunk_count
    );

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let question = line.trim();
        if question.is_empty() {
            continue;
        }
        if question.eq_ignore_ascii_case("quit") || question.eq_ignore_ascii_case("exit") {
            break;
        }

        match orchestrator.ask(question).await {
            Ok(answer) => println!("\n{}\n", answer.final_answer),
            Err(err) => warn!(error = %err, "Question failed"),
        }
    }

    println!("Goodbye.");
    Ok(())
}
