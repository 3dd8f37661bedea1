//! Core trait definitions for console interaction and session progress.
//!
//! The `Console` trait is implemented by the `quizmaster-console` crate; the
//! registry drives it for every piece of human input it needs. Everything is
//! synchronous: the whole system blocks on one participant typing one line.

use crate::model::{AnswerRecord, AttemptId, ParticipantId, QuizDefinitionId};

/// The console collaborator the core depends on for human interaction.
pub trait Console {
    /// Show `message` and return one line of text.
    fn prompt_text(&mut self, message: &str) -> anyhow::Result<String>;

    /// Show `message` and return an integer.
    fn prompt_int(&mut self, message: &str) -> anyhow::Result<i64>;

    /// Informational output. The core never consumes a return value.
    fn announce(&mut self, message: &str);
}

/// Progress callbacks for session administration.
///
/// Lets the CLI narrate a session without the registry printing anything
/// itself. Distinct from `Console::announce`, which carries the dialogue the
/// participant is part of (question feedback).
pub trait SessionObserver {
    fn on_session_start(&self, quiz_id: QuizDefinitionId, participants: usize, num_questions: usize);
    fn on_participant_start(&self, name: &str, participant_id: ParticipantId, attempt_id: AttemptId);
    fn on_answer_recorded(&self, name: &str, record: &AnswerRecord);
    fn on_participant_complete(
        &self,
        name: &str,
        participant_id: ParticipantId,
        score: u32,
        questions_asked: usize,
    );
}

/// No-op session observer.
pub struct NoopObserver;

impl SessionObserver for NoopObserver {
    fn on_session_start(&self, _: QuizDefinitionId, _: usize, _: usize) {}
    fn on_participant_start(&self, _: &str, _: ParticipantId, _: AttemptId) {}
    fn on_answer_recorded(&self, _: &str, _: &AnswerRecord) {}
    fn on_participant_complete(&self, _: &str, _: ParticipantId, _: u32, _: usize) {}
}
