//! Results tables for terminal display.

use comfy_table::{Cell, Table};

use quizmaster_core::registry::SessionResult;
use quizmaster_core::statistics::CompetitionStats;

/// Render the per-session scoreboard: one row per participant, session order.
pub fn render_scoreboard(results: &[SessionResult]) -> String {
    let mut table = Table::new();
    table.set_header(vec!["Participant", "ID", "Attempt", "Score"]);

    for result in results {
        table.add_row(vec![
            Cell::new(&result.name),
            Cell::new(result.participant_id),
            Cell::new(result.attempt_id),
            Cell::new(format!("{}/{}", result.score, result.questions_asked)),
        ]);
    }

    table.to_string()
}

/// Render cumulative standings across every attempt.
pub fn render_standings(stats: &CompetitionStats) -> String {
    let mut table = Table::new();
    table.set_header(vec![
        "Participant",
        "ID",
        "Attempts",
        "Best",
        "Latest",
        "Correct",
        "Accuracy",
    ]);

    for standing in &stats.standings {
        table.add_row(vec![
            Cell::new(&standing.name),
            Cell::new(standing.participant_id),
            Cell::new(standing.attempts_taken),
            Cell::new(standing.best_score),
            Cell::new(standing.latest_score),
            Cell::new(format!(
                "{}/{}",
                standing.total_correct, standing.total_answered
            )),
            Cell::new(format!("{:.1}%", standing.accuracy * 100.0)),
        ]);
    }

    table.to_string()
}

/// Render per-question difficulty, hardest first.
pub fn render_question_difficulty(stats: &CompetitionStats) -> String {
    let mut table = Table::new();
    table.set_header(vec!["Question", "Asked", "Correct", "Success"]);

    for question in &stats.questions {
        table.add_row(vec![
            Cell::new(&question.question_prompt),
            Cell::new(question.times_asked),
            Cell::new(question.times_correct),
            Cell::new(format!("{:.1}%", question.success_rate * 100.0)),
        ]);
    }

    table.to_string()
}
