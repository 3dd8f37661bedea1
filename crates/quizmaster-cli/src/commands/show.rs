//! The `quizmaster show` command.

use std::path::PathBuf;

use anyhow::Result;

use quizmaster_core::report::CompetitionReport;
use quizmaster_report::{
    render_question_difficulty, render_standings, render_transcript,
};

pub fn execute(report_path: PathBuf) -> Result<()> {
    let report = CompetitionReport::load_json(&report_path)?;

    println!(
        "Competition report {} | {} | bank: {} ({} questions) | {} participant(s)",
        report.id,
        report.created_at.format("%Y-%m-%d %H:%M:%S UTC"),
        report.quiz.bank_name,
        report.quiz.question_count,
        report.participants.len()
    );

    println!("\nStandings:\n{}", render_standings(&report.stats));
    println!(
        "\nQuestion difficulty:\n{}",
        render_question_difficulty(&report.stats)
    );

    println!("\nQuiz results:");
    for summary in &report.participants {
        println!("----------------------------");
        print!("{}", render_transcript(summary));
    }
    println!("----------------------------");

    Ok(())
}
