//! Per-participant transcript rendering.
//!
//! The transcript is the audit view: identity, then every attempt and every
//! answer in chronological order.

use quizmaster_core::model::ParticipantSummary;

/// Render one participant's full history as display text.
pub fn render_transcript(summary: &ParticipantSummary) -> String {
    let mut out = String::new();

    out.push_str(&format!("ID: {}\n", summary.participant_id));
    out.push_str(&format!("Name: {}\n", summary.name));
    if let Some(age) = summary.age {
        out.push_str(&format!("Age: {age}\n"));
    }
    if let Some(gender) = &summary.gender {
        out.push_str(&format!("Gender: {gender}\n"));
    }
    if let Some(class_level) = &summary.class_level {
        out.push_str(&format!("Class: {class_level}\n"));
    }

    if summary.attempts.is_empty() {
        out.push_str("No quiz attempts yet.\n");
        return out;
    }

    for (index, attempt) in summary.attempts.iter().enumerate() {
        out.push_str(&format!(
            "Attempt {} (id {}): score {}/{}\n",
            index + 1,
            attempt.attempt_id,
            attempt.score,
            attempt.answered.len()
        ));
        for answer in &attempt.answered {
            let verdict = if answer.is_correct {
                "Correct"
            } else {
                "Incorrect"
            };
            out.push_str(&format!("  {}\n", answer.question_prompt));
            out.push_str(&format!(
                "  Answered: {} - {}\n",
                answer.given_answer, verdict
            ));
        }
    }

    out
}
