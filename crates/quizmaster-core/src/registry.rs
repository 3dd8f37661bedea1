//! The competition registry: participant ownership and session administration.
//!
//! The registry owns the quiz definition, every participant record, and the
//! dual (by-id, by-name) index. Both indices are only ever touched together,
//! inside single registry methods, so they cannot diverge.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::RegistryError;
use crate::ids::IdGenerator;
use crate::model::{
    answers_match, AttemptId, ParticipantId, ParticipantRecord, ParticipantSummary, Question,
    QuestionBank, QuizDefinition,
};
use crate::traits::{Console, SessionObserver};

/// Outcome of a registration call.
///
/// Registration is idempotent on the (case-insensitive) name: a repeat
/// registration is not an error, but the caller is told it happened so the
/// console layer can say so instead of silently succeeding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// A new record was created with this id.
    New(ParticipantId),
    /// A record with this name already existed; its id is returned unchanged
    /// and any newly supplied demographic fields were ignored.
    Existing(ParticipantId),
}

impl Registration {
    pub fn id(&self) -> ParticipantId {
        match *self {
            Registration::New(id) | Registration::Existing(id) => id,
        }
    }

    pub fn is_new(&self) -> bool {
        matches!(self, Registration::New(_))
    }
}

/// Per-participant outcome of one administered session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResult {
    pub participant_id: ParticipantId,
    pub name: String,
    pub attempt_id: AttemptId,
    pub score: u32,
    pub questions_asked: usize,
}

/// Owns the quiz, all participant records, and the dual index.
pub struct CompetitionRegistry {
    quiz: QuizDefinition,
    ids: IdGenerator,
    /// Primary index; exclusive owner of every record.
    by_id: HashMap<ParticipantId, ParticipantRecord>,
    /// Secondary index: lowercased name to participant id.
    by_name: HashMap<String, ParticipantId>,
    /// Registration order, which session administration and results follow.
    order: Vec<ParticipantId>,
}

impl CompetitionRegistry {
    /// Build a registry, creating the quiz definition from `bank` once.
    ///
    /// Fails with `InvalidArgument` if the bank is empty.
    pub fn new(bank: &QuestionBank) -> Result<Self, RegistryError> {
        Self::with_id_generator(bank, IdGenerator::default())
    }

    /// Like [`CompetitionRegistry::new`] with a custom identifier range.
    pub fn with_id_generator(
        bank: &QuestionBank,
        ids: IdGenerator,
    ) -> Result<Self, RegistryError> {
        let quiz = QuizDefinition::from_bank(bank, &ids)?;
        Ok(Self {
            quiz,
            ids,
            by_id: HashMap::new(),
            by_name: HashMap::new(),
            order: Vec::new(),
        })
    }

    /// The quiz shared by every session.
    pub fn quiz(&self) -> &QuizDefinition {
        &self.quiz
    }

    /// Number of registered participants.
    pub fn participant_count(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Register a participant, or return the existing id for a name already
    /// seen (case-insensitively). Demographic fields supplied for an already
    /// registered name are ignored.
    ///
    /// Fails with `InvalidArgument` for a blank name, or if the identifier
    /// space is exhausted.
    pub fn register(
        &mut self,
        name: &str,
        age: Option<u32>,
        gender: Option<String>,
        class_level: Option<String>,
    ) -> Result<Registration, RegistryError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RegistryError::invalid_argument(
                "participant name must not be blank",
            ));
        }

        let key = name.to_lowercase();
        if let Some(&existing) = self.by_name.get(&key) {
            tracing::debug!(name, id = existing, "duplicate registration, keeping existing record");
            return Ok(Registration::Existing(existing));
        }

        let participant_id = self.fresh_participant_id()?;
        let record = ParticipantRecord::new(participant_id, name, age, gender, class_level);
        self.by_id.insert(participant_id, record);
        self.by_name.insert(key, participant_id);
        self.order.push(participant_id);
        tracing::debug!(name, id = participant_id, "participant registered");
        Ok(Registration::New(participant_id))
    }

    /// Draw participant ids until one is unused. The generator's range is
    /// small, so collisions are expected occasionally; they only matter for
    /// the primary index, which must stay collision-free.
    fn fresh_participant_id(&self) -> Result<ParticipantId, RegistryError> {
        if self.by_id.len() as u64 >= self.ids.capacity() {
            return Err(RegistryError::invalid_argument(
                "participant identifier space is exhausted",
            ));
        }
        loop {
            let candidate = self.ids.next_id();
            if !self.by_id.contains_key(&candidate) {
                return Ok(candidate);
            }
            tracing::warn!(id = candidate, "participant id collision, drawing again");
        }
    }

    /// Administer one session: every registered participant, in registration
    /// order, gets a fresh attempt and an independently sampled set of
    /// `num_questions` questions. Answers are captured through `console`.
    ///
    /// Fails with `InvalidArgument` when `num_questions` is zero. A console
    /// failure mid-session propagates and leaves the participant's attempt
    /// partially filled in history.
    pub fn administer_session(
        &mut self,
        num_questions: usize,
        console: &mut dyn Console,
        observer: &dyn SessionObserver,
    ) -> anyhow::Result<Vec<SessionResult>> {
        if num_questions == 0 {
            return Err(
                RegistryError::invalid_argument("session must ask at least one question").into(),
            );
        }

        observer.on_session_start(
            self.quiz.quiz_definition_id(),
            self.order.len(),
            num_questions,
        );

        let mut results = Vec::with_capacity(self.order.len());
        let order = self.order.clone();
        for participant_id in order {
            // A fresh sample per participant: sets may differ between
            // participants within one session.
            let questions = self.quiz.sample(num_questions)?;
            let asked: Vec<(String, Question)> = questions
                .into_iter()
                .map(|q| (self.quiz.render_prompt(&q), q))
                .collect();

            let Some(record) = self.by_id.get_mut(&participant_id) else {
                tracing::error!(id = participant_id, "registration order lists unknown participant");
                continue;
            };

            let attempt_id = record.start_new_attempt(&self.ids);
            observer.on_participant_start(record.name(), participant_id, attempt_id);

            for (prompt, question) in &asked {
                let given = console.prompt_text(prompt)?;
                let correct =
                    record.record_answer(prompt, &given, &question.expected_answer, answers_match)?;
                if correct {
                    console.announce("Correct!");
                } else {
                    console.announce(&format!(
                        "Wrong! The correct answer is {}.",
                        question.expected_answer
                    ));
                }
                if let Some(last) = record.current_attempt().and_then(|a| a.answered().last()) {
                    observer.on_answer_recorded(record.name(), last);
                }
            }

            let score = record.current_attempt().map(|a| a.score()).unwrap_or(0);
            observer.on_participant_complete(record.name(), participant_id, score, asked.len());
            results.push(SessionResult {
                participant_id,
                name: record.name().to_string(),
                attempt_id,
                score,
                questions_asked: asked.len(),
            });
        }

        Ok(results)
    }

    pub fn lookup_by_id(&self, id: ParticipantId) -> Result<&ParticipantRecord, RegistryError> {
        self.by_id.get(&id).ok_or(RegistryError::IdNotFound(id))
    }

    /// Case-insensitive name lookup.
    pub fn lookup_by_name(&self, name: &str) -> Result<&ParticipantRecord, RegistryError> {
        let key = name.trim().to_lowercase();
        self.by_name
            .get(&key)
            .and_then(|id| self.by_id.get(id))
            .ok_or_else(|| RegistryError::NameNotFound(name.trim().to_string()))
    }

    /// Remove a participant from both indices atomically, returning the
    /// record. There is no intermediate state in which the record is visible
    /// through one index but not the other.
    pub fn remove_by_id(
        &mut self,
        id: ParticipantId,
    ) -> Result<ParticipantRecord, RegistryError> {
        let record = self
            .by_id
            .remove(&id)
            .ok_or(RegistryError::IdNotFound(id))?;
        self.by_name.remove(&record.name().to_lowercase());
        self.order.retain(|&pid| pid != id);
        tracing::debug!(name = record.name(), id, "participant removed");
        Ok(record)
    }

    /// Remove by case-insensitive name; see [`CompetitionRegistry::remove_by_id`].
    pub fn remove_by_name(&mut self, name: &str) -> Result<ParticipantRecord, RegistryError> {
        let key = name.trim().to_lowercase();
        let id = *self
            .by_name
            .get(&key)
            .ok_or_else(|| RegistryError::NameNotFound(name.trim().to_string()))?;
        self.remove_by_id(id)
    }

    /// Lazy sequence of participant summaries in registration order.
    pub fn all_results(&self) -> impl Iterator<Item = ParticipantSummary> + '_ {
        self.order
            .iter()
            .filter_map(|pid| self.by_id.get(pid))
            .map(|record| record.render_summary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::NoopObserver;

    /// Minimal scripted console for registry tests. The richer
    /// `MockConsole` lives in the quizmaster-console crate.
    struct ScriptedConsole {
        /// Prompt-substring to answer mappings.
        answers: Vec<(String, String)>,
        default_answer: String,
        announcements: Vec<String>,
        /// Fail this many prompts in (None = never fail).
        fail_at_prompt: Option<usize>,
        prompts_answered: usize,
    }

    impl ScriptedConsole {
        fn new(answers: &[(&str, &str)]) -> Self {
            Self {
                answers: answers
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
                default_answer: "pass".into(),
                announcements: Vec::new(),
                fail_at_prompt: None,
                prompts_answered: 0,
            }
        }

        fn failing_after(prompts: usize) -> Self {
            let mut console = Self::new(&[]);
            console.fail_at_prompt = Some(prompts);
            console
        }
    }

    impl Console for ScriptedConsole {
        fn prompt_text(&mut self, message: &str) -> anyhow::Result<String> {
            if self.fail_at_prompt == Some(self.prompts_answered) {
                anyhow::bail!("console input closed");
            }
            self.prompts_answered += 1;
            Ok(self
                .answers
                .iter()
                .find(|(key, _)| message.contains(key.as_str()))
                .map(|(_, answer)| answer.clone())
                .unwrap_or_else(|| self.default_answer.clone()))
        }

        fn prompt_int(&mut self, _message: &str) -> anyhow::Result<i64> {
            Ok(0)
        }

        fn announce(&mut self, message: &str) {
            self.announcements.push(message.to_string());
        }
    }

    fn capitals_bank() -> QuestionBank {
        QuestionBank {
            id: "capitals".into(),
            name: "Capitals".into(),
            description: String::new(),
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
        }
    }

    #[test]
    fn register_assigns_id_in_range() {
        let mut registry = CompetitionRegistry::new(&capitals_bank()).unwrap();
        let registration = registry.register("Asha", Some(12), None, None).unwrap();
        assert!(registration.is_new());
        assert!((1000..=9999).contains(&registration.id()));
    }

    #[test]
    fn register_is_idempotent_on_name() {
        let mut registry = CompetitionRegistry::new(&capitals_bank()).unwrap();
        let first = registry.register("Asha", Some(12), None, None).unwrap();
        let second = registry
            .register("asha", Some(99), Some("F".into()), Some("9".into()))
            .unwrap();

        assert_eq!(first.id(), second.id());
        assert!(!second.is_new());
        assert_eq!(registry.participant_count(), 1);

        // the original demographics stand
        let record = registry.lookup_by_id(first.id()).unwrap();
        assert_eq!(record.age(), Some(12));
        assert_eq!(record.gender(), None);
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut registry = CompetitionRegistry::new(&capitals_bank()).unwrap();
        let err = registry.register("   ", None, None, None).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidArgument(_)));
    }

    #[test]
    fn id_and_name_lookup_agree() {
        let mut registry = CompetitionRegistry::new(&capitals_bank()).unwrap();
        let id = registry.register("Ravi", None, None, None).unwrap().id();

        let by_id = registry.lookup_by_id(id).unwrap().participant_id();
        let by_name = registry.lookup_by_name("RAVI").unwrap().participant_id();
        assert_eq!(by_id, by_name);
    }

    #[test]
    fn lookup_unknown_is_not_found() {
        let registry = CompetitionRegistry::new(&capitals_bank()).unwrap();
        assert!(matches!(
            registry.lookup_by_id(1),
            Err(RegistryError::IdNotFound(1))
        ));
        assert!(matches!(
            registry.lookup_by_name("nobody"),
            Err(RegistryError::NameNotFound(_))
        ));
    }

    #[test]
    fn removal_by_id_clears_both_indices() {
        let mut registry = CompetitionRegistry::new(&capitals_bank()).unwrap();
        let id = registry.register("Ravi", None, None, None).unwrap().id();

        let removed = registry.remove_by_id(id).unwrap();
        assert_eq!(removed.name(), "Ravi");
        assert!(registry.lookup_by_id(id).is_err());
        assert!(registry.lookup_by_name("Ravi").is_err());
        assert_eq!(registry.participant_count(), 0);
        assert_eq!(registry.all_results().count(), 0);
    }

    #[test]
    fn removal_by_name_clears_both_indices() {
        let mut registry = CompetitionRegistry::new(&capitals_bank()).unwrap();
        let id = registry.register("Ravi", None, None, None).unwrap().id();

        registry.remove_by_name("  ravi ").unwrap();
        assert!(registry.lookup_by_id(id).is_err());
        assert!(matches!(
            registry.remove_by_name("ravi"),
            Err(RegistryError::NameNotFound(_))
        ));
    }

    #[test]
    fn session_with_zero_questions_is_invalid() {
        let mut registry = CompetitionRegistry::new(&capitals_bank()).unwrap();
        registry.register("Ravi", None, None, None).unwrap();

        let mut console = ScriptedConsole::new(&[]);
        let err = registry
            .administer_session(0, &mut console, &NoopObserver)
            .unwrap_err();
        let registry_err = err.downcast_ref::<RegistryError>().unwrap();
        assert!(registry_err.is_contract_violation());
    }

    #[test]
    fn session_records_scores_and_feedback() {
        let mut registry = CompetitionRegistry::new(&capitals_bank()).unwrap();
        let id = registry.register("Ravi", None, None, None).unwrap().id();

        // case-insensitive on one answer, exact on the other
        let mut console = ScriptedConsole::new(&[("Goa", "panaji"), ("Bihar", "Patna")]);
        let results = registry
            .administer_session(2, &mut console, &NoopObserver)
            .unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].participant_id, id);
        assert_eq!(results[0].score, 2);
        assert_eq!(results[0].questions_asked, 2);
        assert_eq!(
            console.announcements,
            vec!["Correct!".to_string(), "Correct!".to_string()]
        );

        let record = registry.lookup_by_id(id).unwrap();
        let attempt = record.current_attempt().unwrap();
        assert_eq!(attempt.score(), 2);
        assert_eq!(attempt.answered().len(), 2);
        assert!(attempt
            .answered()
            .iter()
            .any(|a| a.question_prompt.contains("Goa") && a.given_answer == "panaji" && a.is_correct));
        assert!(attempt
            .answered()
            .iter()
            .any(|a| a.question_prompt.contains("Bihar") && a.given_answer == "Patna" && a.is_correct));
    }

    #[test]
    fn wrong_answer_announces_the_expected_one() {
        let mut registry = CompetitionRegistry::new(&capitals_bank()).unwrap();
        registry.register("Ravi", None, None, None).unwrap();

        let mut console = ScriptedConsole::new(&[("Goa", "Mumbai"), ("Bihar", "Mumbai")]);
        let results = registry
            .administer_session(2, &mut console, &NoopObserver)
            .unwrap();

        assert_eq!(results[0].score, 0);
        assert_eq!(console.announcements.len(), 2);
        assert!(console
            .announcements
            .iter()
            .all(|a| a.starts_with("Wrong! The correct answer is ")));
    }

    #[test]
    fn each_session_appends_an_attempt_per_participant() {
        let mut registry = CompetitionRegistry::new(&capitals_bank()).unwrap();
        let ravi = registry.register("Ravi", None, None, None).unwrap().id();
        let asha = registry.register("Asha", None, None, None).unwrap().id();

        let mut console = ScriptedConsole::new(&[("Goa", "Panaji"), ("Bihar", "Patna")]);
        registry
            .administer_session(1, &mut console, &NoopObserver)
            .unwrap();
        registry
            .administer_session(2, &mut console, &NoopObserver)
            .unwrap();

        for id in [ravi, asha] {
            let record = registry.lookup_by_id(id).unwrap();
            assert_eq!(record.attempts().len(), 2);
            assert_eq!(record.attempts()[0].answered().len(), 1);
            assert_eq!(record.attempts()[1].answered().len(), 2);
        }
    }

    #[test]
    fn session_visits_participants_in_registration_order() {
        let mut registry = CompetitionRegistry::new(&capitals_bank()).unwrap();
        for name in ["Charu", "Asha", "Bina"] {
            registry.register(name, None, None, None).unwrap();
        }

        let mut console = ScriptedConsole::new(&[]);
        let results = registry
            .administer_session(1, &mut console, &NoopObserver)
            .unwrap();
        let visited: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(visited, vec!["Charu", "Asha", "Bina"]);
    }

    #[test]
    fn all_results_follow_registration_order_after_removal() {
        let mut registry = CompetitionRegistry::new(&capitals_bank()).unwrap();
        registry.register("Charu", None, None, None).unwrap();
        let asha = registry.register("Asha", None, None, None).unwrap().id();
        registry.register("Bina", None, None, None).unwrap();

        registry.remove_by_id(asha).unwrap();
        let names: Vec<String> = registry.all_results().map(|s| s.name).collect();
        assert_eq!(names, vec!["Charu".to_string(), "Bina".to_string()]);
    }

    #[test]
    fn interrupted_session_leaves_a_partial_attempt() {
        let mut registry = CompetitionRegistry::new(&capitals_bank()).unwrap();
        let id = registry.register("Ravi", None, None, None).unwrap().id();

        // first prompt answered, second fails
        let mut console = ScriptedConsole::failing_after(1);
        let result = registry.administer_session(2, &mut console, &NoopObserver);
        assert!(result.is_err());

        // the half-filled attempt stays visible in history
        let record = registry.lookup_by_id(id).unwrap();
        assert_eq!(record.attempts().len(), 1);
        assert_eq!(record.current_attempt().unwrap().answered().len(), 1);
    }

    #[test]
    fn exhausted_id_space_is_reported() {
        let bank = capitals_bank();
        let mut registry =
            CompetitionRegistry::with_id_generator(&bank, IdGenerator::new(7, 8)).unwrap();
        registry.register("A", None, None, None).unwrap();
        registry.register("B", None, None, None).unwrap();

        let err = registry.register("C", None, None, None).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidArgument(_)));
    }
}
