//! Competition report types with JSON persistence.
//!
//! A report is a results export — a snapshot of every participant summary
//! plus aggregate statistics. Live registry state is never restored from one.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{ParticipantSummary, QuestionBank, QuizDefinitionId};
use crate::registry::CompetitionRegistry;
use crate::statistics::{compute_competition_stats, CompetitionStats};

/// A complete competition report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitionReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Summary of the quiz the competition ran on.
    pub quiz: QuizSummary,
    /// Every participant's summary, in registration order.
    pub participants: Vec<ParticipantSummary>,
    /// Aggregate statistics.
    pub stats: CompetitionStats,
}

/// Summary of the quiz (without the full question list, which would leak
/// answers into a shareable file).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSummary {
    pub quiz_definition_id: QuizDefinitionId,
    pub bank_id: String,
    pub bank_name: String,
    pub question_count: usize,
}

impl CompetitionReport {
    /// Snapshot the registry into a report.
    pub fn from_registry(bank: &QuestionBank, registry: &CompetitionRegistry) -> Self {
        let participants: Vec<ParticipantSummary> = registry.all_results().collect();
        let stats = compute_competition_stats(&participants);
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            quiz: QuizSummary {
                quiz_definition_id: registry.quiz().quiz_definition_id(),
                bank_id: bank.id.clone(),
                bank_name: bank.name.clone(),
                question_count: registry.quiz().question_count(),
            },
            participants,
            stats,
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: CompetitionReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}
