//! The `quizmaster run` command.

use std::path::{Path, PathBuf};

use anyhow::Result;

use quizmaster_console::StdConsole;
use quizmaster_core::model::{AnswerRecord, AttemptId, ParticipantId, QuestionBank, QuizDefinitionId};
use quizmaster_core::parser;
use quizmaster_core::registry::{CompetitionRegistry, Registration};
use quizmaster_core::report::CompetitionReport;
use quizmaster_core::statistics::compute_competition_stats;
use quizmaster_core::traits::{Console, SessionObserver};
use quizmaster_report::{
    render_question_difficulty, render_scoreboard, render_standings, render_transcript,
};

use crate::config::load_config_from;

/// Session progress on stderr, so it stays out of the participant dialogue.
struct ConsoleReporter;

impl SessionObserver for ConsoleReporter {
    fn on_session_start(&self, quiz_id: QuizDefinitionId, participants: usize, num_questions: usize) {
        eprintln!(
            "Starting quiz {quiz_id}: {participants} participant(s) x {num_questions} question(s)"
        );
    }

    fn on_participant_start(&self, name: &str, participant_id: ParticipantId, attempt_id: AttemptId) {
        eprintln!("  Starting: {name} (ID {participant_id}, attempt {attempt_id})");
    }

    fn on_answer_recorded(&self, _name: &str, _record: &AnswerRecord) {}

    fn on_participant_complete(
        &self,
        name: &str,
        _participant_id: ParticipantId,
        score: u32,
        questions_asked: usize,
    ) {
        eprintln!("  Done: {name} scored {score}/{questions_asked}");
    }
}

pub fn execute(
    bank_path: Option<PathBuf>,
    questions: Option<usize>,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let bank_path = bank_path.unwrap_or_else(|| config.default_bank.clone());
    let questions = questions.unwrap_or(config.questions_per_session);
    let output = output.unwrap_or_else(|| config.output_dir.clone());
    anyhow::ensure!(questions >= 1, "--questions must be at least 1");

    let bank = parser::parse_bank(&bank_path)?;
    tracing::info!(bank_id = %bank.id, questions = bank.len(), "question bank loaded");
    for warning in parser::validate_bank(&bank) {
        eprintln!("Warning: {}", warning.message);
    }

    let mut registry = CompetitionRegistry::new(&bank)?;
    let mut console = StdConsole::new();

    register_participants(&mut registry, &mut console)?;
    if registry.is_empty() {
        println!("No participants registered, nothing to do.");
        return Ok(());
    }

    let results = registry.administer_session(questions, &mut console, &ConsoleReporter)?;
    println!("\nSession results:\n{}", render_scoreboard(&results));

    menu_loop(&bank, &mut registry, questions, &output, &mut console)
}

fn register_participants(
    registry: &mut CompetitionRegistry,
    console: &mut StdConsole,
) -> Result<()> {
    let count = console.prompt_int("Enter the number of participants:")?.max(0);

    for i in 1..=count {
        let name = loop {
            let name = console.prompt_text(&format!("Enter the name of participant {i}:"))?;
            if name.trim().is_empty() {
                console.announce("Name must not be blank.");
            } else {
                break name;
            }
        };
        let age = prompt_optional_age(console)?;
        let gender = prompt_optional_text(console, "Gender (blank to skip):")?;
        let class_level = prompt_optional_text(console, "Class (blank to skip):")?;

        match registry.register(&name, age, gender, class_level)? {
            Registration::New(id) => {
                console.announce(&format!("Participant {} added with ID: {id}", name.trim()));
            }
            Registration::Existing(id) => {
                console.announce(&format!(
                    "{} is already registered with ID: {id}; keeping the existing record.",
                    name.trim()
                ));
            }
        }
    }

    Ok(())
}

fn prompt_optional_text(console: &mut StdConsole, message: &str) -> Result<Option<String>> {
    let line = console.prompt_text(message)?;
    let trimmed = line.trim();
    Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
}

fn prompt_optional_age(console: &mut StdConsole) -> Result<Option<u32>> {
    loop {
        let line = console.prompt_text("Age (blank to skip):")?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        match trimmed.parse::<u32>() {
            Ok(age) => return Ok(Some(age)),
            Err(_) => console.announce("Please enter a whole number or leave blank."),
        }
    }
}

fn menu_loop(
    bank: &QuestionBank,
    registry: &mut CompetitionRegistry,
    questions: usize,
    output: &Path,
    console: &mut StdConsole,
) -> Result<()> {
    loop {
        let choice = console.prompt_text(
            "\nChoose an action - [r]esults, [f]ind, [d]elete, [a]nother session, [s]ave report, [q]uit:",
        )?;
        match choice.trim().to_lowercase().as_str() {
            "r" | "results" => show_results(registry),
            "f" | "find" => find_participant(registry, console)?,
            "d" | "delete" => delete_participant(registry, console)?,
            "a" | "again" | "another" => {
                let results = registry.administer_session(questions, console, &ConsoleReporter)?;
                println!("\nSession results:\n{}", render_scoreboard(&results));
            }
            "s" | "save" => save_report(bank, registry, output)?,
            "q" | "quit" => {
                println!("Exiting.");
                break;
            }
            _ => console.announce("Invalid choice. Please pick r, f, d, a, s, or q."),
        }
    }
    Ok(())
}

fn show_results(registry: &CompetitionRegistry) {
    let summaries: Vec<_> = registry.all_results().collect();
    if summaries.is_empty() {
        println!("No participants registered.");
        return;
    }

    let stats = compute_competition_stats(&summaries);
    println!("\nStandings:\n{}", render_standings(&stats));
    println!("\nQuestion difficulty:\n{}", render_question_difficulty(&stats));

    println!("\nQuiz results:");
    for summary in &summaries {
        println!("----------------------------");
        print!("{}", render_transcript(summary));
    }
    println!("----------------------------");
}

fn find_participant(registry: &CompetitionRegistry, console: &mut StdConsole) -> Result<()> {
    let mode = console.prompt_text("Search by ID or name? (id/name):")?;
    match mode.trim().to_lowercase().as_str() {
        "id" => {
            let raw = console.prompt_int("Enter the participant ID:")?;
            let found = u32::try_from(raw)
                .ok()
                .and_then(|id| registry.lookup_by_id(id).ok());
            match found {
                Some(record) => print!("{}", render_transcript(&record.render_summary())),
                None => console.announce(&format!("No data found for participant ID: {raw}")),
            }
        }
        "name" => {
            let name = console.prompt_text("Enter the participant name:")?;
            match registry.lookup_by_name(&name) {
                Ok(record) => print!("{}", render_transcript(&record.render_summary())),
                Err(_) => console.announce(&format!(
                    "No data found for participant name: {}",
                    name.trim()
                )),
            }
        }
        _ => console.announce("Please answer 'id' or 'name'."),
    }
    Ok(())
}

fn delete_participant(registry: &mut CompetitionRegistry, console: &mut StdConsole) -> Result<()> {
    let mode = console.prompt_text("Remove by ID or name? (id/name):")?;
    match mode.trim().to_lowercase().as_str() {
        "id" => {
            let raw = console.prompt_int("Enter the participant ID:")?;
            let removed = u32::try_from(raw)
                .ok()
                .and_then(|id| registry.remove_by_id(id).ok());
            match removed {
                Some(record) => console.announce(&format!(
                    "Removed {} (ID: {}).",
                    record.name(),
                    record.participant_id()
                )),
                None => console.announce(&format!("No data found for participant ID: {raw}")),
            }
        }
        "name" => {
            let name = console.prompt_text("Enter the participant name:")?;
            match registry.remove_by_name(&name) {
                Ok(record) => console.announce(&format!(
                    "Removed {} (ID: {}).",
                    record.name(),
                    record.participant_id()
                )),
                Err(_) => console.announce(&format!(
                    "No data found for participant name: {}",
                    name.trim()
                )),
            }
        }
        _ => console.announce("Please answer 'id' or 'name'."),
    }
    Ok(())
}

fn save_report(bank: &QuestionBank, registry: &CompetitionRegistry, output: &Path) -> Result<()> {
    std::fs::create_dir_all(output)?;
    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H%M%S");
    let path = output.join(format!("report-{timestamp}.json"));

    let report = CompetitionReport::from_registry(bank, registry);
    report.save_json(&path)?;
    println!("Report saved to: {}", path.display());
    Ok(())
}
