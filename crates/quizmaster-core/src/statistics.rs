//! Aggregate statistics over participant summaries.
//!
//! Computes per-participant standings and per-question difficulty from the
//! registry's summary projections. Raw counts only; there is no curve.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::{ParticipantId, ParticipantSummary};

/// Aggregate statistics across a competition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitionStats {
    /// One standing per participant, in the order the summaries were given
    /// (registration order when they come from the registry).
    pub standings: Vec<ParticipantStanding>,
    /// One entry per distinct question prompt, hardest first.
    pub questions: Vec<QuestionDifficulty>,
}

/// Cumulative results for a single participant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantStanding {
    pub participant_id: ParticipantId,
    pub name: String,
    /// Number of attempts in history, including any cut short.
    pub attempts_taken: usize,
    /// Highest score across attempts.
    pub best_score: u32,
    /// Score of the newest attempt.
    pub latest_score: u32,
    /// Total answers recorded across all attempts.
    pub total_answered: usize,
    /// Total correct answers across all attempts.
    pub total_correct: usize,
    /// `total_correct / total_answered`, or 0.0 before any answer.
    pub accuracy: f64,
}

/// How often one question was asked and answered correctly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionDifficulty {
    pub question_prompt: String,
    pub times_asked: u32,
    pub times_correct: u32,
    /// `times_correct / times_asked`.
    pub success_rate: f64,
}

/// Compute standings and question difficulty from participant summaries.
pub fn compute_competition_stats(summaries: &[ParticipantSummary]) -> CompetitionStats {
    let mut standings = Vec::with_capacity(summaries.len());
    let mut asked: HashMap<String, (u32, u32)> = HashMap::new();

    for summary in summaries {
        let mut total_answered = 0usize;
        let mut total_correct = 0usize;

        for attempt in &summary.attempts {
            total_answered += attempt.answered.len();
            for answer in &attempt.answered {
                let entry = asked.entry(answer.question_prompt.clone()).or_insert((0, 0));
                entry.0 += 1;
                if answer.is_correct {
                    entry.1 += 1;
                    total_correct += 1;
                }
            }
        }

        let best_score = summary.attempts.iter().map(|a| a.score).max().unwrap_or(0);
        let latest_score = summary.attempts.last().map(|a| a.score).unwrap_or(0);
        let accuracy = if total_answered == 0 {
            0.0
        } else {
            total_correct as f64 / total_answered as f64
        };

        standings.push(ParticipantStanding {
            participant_id: summary.participant_id,
            name: summary.name.clone(),
            attempts_taken: summary.attempts.len(),
            best_score,
            latest_score,
            total_answered,
            total_correct,
            accuracy,
        });
    }

    let mut questions: Vec<QuestionDifficulty> = asked
        .into_iter()
        .map(|(question_prompt, (times_asked, times_correct))| QuestionDifficulty {
            question_prompt,
            times_asked,
            times_correct,
            success_rate: f64::from(times_correct) / f64::from(times_asked),
        })
        .collect();

    // Hardest first; prompt text breaks ties so output is deterministic
    questions.sort_by(|a, b| {
        a.success_rate
            .partial_cmp(&b.success_rate)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.question_prompt.cmp(&b.question_prompt))
    });

    CompetitionStats {
        standings,
        questions,
    }
}
