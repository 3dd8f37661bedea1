//! quizmaster-report — Console rendering of competition results.
//!
//! Turns the core's report and summary types into scoreboard tables and
//! per-participant transcripts for terminal display.

pub mod table;
pub mod transcript;

pub use table::{render_question_difficulty, render_scoreboard, render_standings};
pub use transcript::render_transcript;
