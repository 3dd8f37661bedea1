//! Core data model types for quizmaster.
//!
//! These are the fundamental types the entire quizmaster system uses to
//! represent questions, quiz attempts, and participant records.

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::error::RegistryError;
use crate::ids::IdGenerator;

/// Identifier of a quiz definition.
pub type QuizDefinitionId = u32;
/// Identifier of a participant record.
pub type ParticipantId = u32;
/// Identifier of one quiz attempt.
pub type AttemptId = u32;

/// Prompt template used when a bank does not supply one: the prompt key is
/// shown verbatim.
pub const DEFAULT_PROMPT_TEMPLATE: &str = "{subject}";

/// Placeholder substituted with the prompt key when rendering a question.
pub const PROMPT_PLACEHOLDER: &str = "{subject}";

/// A single question/answer pair. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// The key substituted into the bank's prompt template (e.g. "Goa").
    pub prompt_key: String,
    /// The expected answer, matched case- and whitespace-insensitively.
    pub expected_answer: String,
}

/// A named collection of questions, loaded once at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionBank {
    /// Unique identifier for this bank.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Description of what this bank covers.
    #[serde(default)]
    pub description: String,
    /// Template turning a prompt key into the question text shown to the
    /// participant. Must contain `{subject}`.
    #[serde(default = "default_prompt_template")]
    pub prompt_template: String,
    /// The question/answer pairs in this bank.
    #[serde(default)]
    pub questions: Vec<Question>,
}

fn default_prompt_template() -> String {
    DEFAULT_PROMPT_TEMPLATE.to_string()
}

impl QuestionBank {
    /// Number of questions in the bank.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Returns `true` if the bank holds no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// The immutable quiz built from a question bank, plus its sampling
/// operation. Created once per process.
#[derive(Debug, Clone)]
pub struct QuizDefinition {
    quiz_definition_id: QuizDefinitionId,
    prompt_template: String,
    questions: Vec<Question>,
}

impl QuizDefinition {
    /// Build a quiz from a bank, assigning it an identifier.
    ///
    /// Fails with `InvalidArgument` if the bank is empty: a quiz with no
    /// questions cannot be administered.
    pub fn from_bank(bank: &QuestionBank, ids: &IdGenerator) -> Result<Self, RegistryError> {
        if bank.is_empty() {
            return Err(RegistryError::invalid_argument(format!(
                "question bank '{}' is empty",
                bank.id
            )));
        }
        Ok(Self {
            quiz_definition_id: ids.next_id(),
            prompt_template: bank.prompt_template.clone(),
            questions: bank.questions.clone(),
        })
    }

    /// The identifier assigned at construction.
    pub fn quiz_definition_id(&self) -> QuizDefinitionId {
        self.quiz_definition_id
    }

    /// All questions, in bank order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Number of questions in the quiz.
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Render the full prompt text shown to a participant for `question`.
    pub fn render_prompt(&self, question: &Question) -> String {
        self.prompt_template
            .replace(PROMPT_PLACEHOLDER, &question.prompt_key)
    }

    /// Draw `min(k, question_count)` distinct questions in randomized order.
    ///
    /// Every call is independent: no memory of prior samples is kept, so two
    /// calls may overlap arbitrarily, but a single call never repeats a
    /// question. Fails with `InvalidArgument` when `k` is zero.
    pub fn sample(&self, k: usize) -> Result<Vec<Question>, RegistryError> {
        if k == 0 {
            return Err(RegistryError::invalid_argument(
                "sample size must be at least 1",
            ));
        }
        let mut rng = rand::thread_rng();
        let mut picked: Vec<Question> = self
            .questions
            .choose_multiple(&mut rng, k)
            .cloned()
            .collect();
        // choose_multiple does not randomize the order of the picks
        picked.shuffle(&mut rng);
        Ok(picked)
    }
}

/// Check a given answer against the expected one: surrounding whitespace is
/// ignored and comparison is case-insensitive.
pub fn answers_match(given: &str, expected: &str) -> bool {
    given.trim().to_lowercase() == expected.trim().to_lowercase()
}

/// One answer given during an attempt. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    /// The rendered prompt text the participant was shown.
    pub question_prompt: String,
    /// The answer exactly as the participant gave it.
    pub given_answer: String,
    /// Whether the answer matched.
    pub is_correct: bool,
}

/// One administration of the quiz to one participant.
///
/// `score` only ever moves by appending a correct answer record, and
/// `answered` is append-only. Once the participant starts a new attempt the
/// previous one is never touched again.
#[derive(Debug, Clone)]
pub struct QuizAttempt {
    attempt_id: AttemptId,
    score: u32,
    answered: Vec<AnswerRecord>,
}

impl QuizAttempt {
    fn new(attempt_id: AttemptId) -> Self {
        Self {
            attempt_id,
            score: 0,
            answered: Vec::new(),
        }
    }

    /// The identifier assigned when the attempt was started.
    pub fn attempt_id(&self) -> AttemptId {
        self.attempt_id
    }

    /// Number of correct answers recorded so far.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Every answer recorded in this attempt, in the order given.
    pub fn answered(&self) -> &[AnswerRecord] {
        &self.answered
    }

    fn push_answer(&mut self, record: AnswerRecord) {
        if record.is_correct {
            self.score += 1;
        }
        self.answered.push(record);
    }
}

/// One participant's identity plus their full quiz history.
#[derive(Debug, Clone)]
pub struct ParticipantRecord {
    participant_id: ParticipantId,
    name: String,
    age: Option<u32>,
    gender: Option<String>,
    class_level: Option<String>,
    attempts: Vec<QuizAttempt>,
}

impl ParticipantRecord {
    /// Create a record with no attempts. Name uniqueness is the registry's
    /// invariant, not this type's.
    pub fn new(
        participant_id: ParticipantId,
        name: impl Into<String>,
        age: Option<u32>,
        gender: Option<String>,
        class_level: Option<String>,
    ) -> Self {
        Self {
            participant_id,
            name: name.into(),
            age,
            gender,
            class_level,
            attempts: Vec::new(),
        }
    }

    /// The globally unique identifier assigned at registration.
    pub fn participant_id(&self) -> ParticipantId {
        self.participant_id
    }

    /// The participant's name as registered.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> Option<u32> {
        self.age
    }

    pub fn gender(&self) -> Option<&str> {
        self.gender.as_deref()
    }

    pub fn class_level(&self) -> Option<&str> {
        self.class_level.as_deref()
    }

    /// Every attempt, oldest first.
    pub fn attempts(&self) -> &[QuizAttempt] {
        &self.attempts
    }

    /// The attempt answers are currently recorded into, if any.
    pub fn current_attempt(&self) -> Option<&QuizAttempt> {
        self.attempts.last()
    }

    /// Open a fresh attempt and make it current. Always succeeds.
    pub fn start_new_attempt(&mut self, ids: &IdGenerator) -> AttemptId {
        let attempt_id = ids.next_id();
        self.attempts.push(QuizAttempt::new(attempt_id));
        attempt_id
    }

    /// Record an answer into the current attempt, judging it with `checker`.
    ///
    /// Returns whether the answer was correct. Fails with `NoActiveAttempt`
    /// if no attempt was ever started.
    pub fn record_answer<F>(
        &mut self,
        question_prompt: &str,
        given_answer: &str,
        expected_answer: &str,
        checker: F,
    ) -> Result<bool, RegistryError>
    where
        F: Fn(&str, &str) -> bool,
    {
        let current = self
            .attempts
            .last_mut()
            .ok_or(RegistryError::NoActiveAttempt(self.participant_id))?;

        let is_correct = checker(given_answer, expected_answer);
        current.push_answer(AnswerRecord {
            question_prompt: question_prompt.to_string(),
            given_answer: given_answer.to_string(),
            is_correct,
        });
        Ok(is_correct)
    }

    /// Read-only projection of identity and history for display and export.
    /// Attempt order and within-attempt answer order are preserved.
    pub fn render_summary(&self) -> ParticipantSummary {
        ParticipantSummary {
            participant_id: self.participant_id,
            name: self.name.clone(),
            age: self.age,
            gender: self.gender.clone(),
            class_level: self.class_level.clone(),
            attempts: self
                .attempts
                .iter()
                .map(|a| AttemptSummary {
                    attempt_id: a.attempt_id,
                    score: a.score,
                    answered: a.answered.clone(),
                })
                .collect(),
        }
    }
}

/// Serializable projection of a participant record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantSummary {
    pub participant_id: ParticipantId,
    pub name: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub class_level: Option<String>,
    pub attempts: Vec<AttemptSummary>,
}

/// Serializable projection of one attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttemptSummary {
    pub attempt_id: AttemptId,
    pub score: u32,
    pub answered: Vec<AnswerRecord>,
}
