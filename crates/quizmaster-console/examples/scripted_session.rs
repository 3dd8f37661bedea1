//! Scripted session example — minimal programmatic usage of quizmaster.
//!
//! Demonstrates running a full competition from a script instead of a
//! terminal, using the mock console.
//!
//! ```bash
//! cargo run --example scripted_session
//! ```

use std::collections::HashMap;

use quizmaster_console::MockConsole;
use quizmaster_core::model::{Question, QuestionBank};
use quizmaster_core::registry::CompetitionRegistry;
use quizmaster_core::report::CompetitionReport;
use quizmaster_core::traits::NoopObserver;

fn main() -> anyhow::Result<()> {
    let bank = QuestionBank {
        id: "demo".into(),
        name: "Demo Capitals".into(),
        description: "Two-question demo bank".into(),
        prompt_template: "What is the capital of {subject}?".into(),
        questions: vec![
            Question {
                prompt_key: "Goa".into(),
                expected_answer: "Panaji".into(),
            },
            Question {
                prompt_key: "Bihar".into(),
                expected_answer: "Patna".into(),
            },
        ],
    };

    let mut registry = CompetitionRegistry::new(&bank)?;
    let asha = registry.register("Asha", Some(12), None, Some("6".into()))?;
    let ravi = registry.register("Ravi", Some(13), None, Some("7".into()))?;
    println!("Registered Asha ({}) and Ravi ({})", asha.id(), ravi.id());

    // Answers keyed by prompt substring, so sampling order does not matter.
    let mut answers = HashMap::new();
    answers.insert("Goa".to_string(), "panaji".to_string());
    answers.insert("Bihar".to_string(), "Patna".to_string());
    let mut console = MockConsole::new(answers);

    let results = registry.administer_session(2, &mut console, &NoopObserver)?;
    for result in &results {
        println!(
            "{} scored {}/{}",
            result.name, result.score, result.questions_asked
        );
    }

    let report = CompetitionReport::from_registry(&bank, &registry);
    println!(
        "Report {} covers {} participants",
        report.id,
        report.participants.len()
    );

    Ok(())
}
