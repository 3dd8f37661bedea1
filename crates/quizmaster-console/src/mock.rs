//! Mock console for testing.

use std::collections::{HashMap, VecDeque};

use quizmaster_core::traits::Console;

/// A scripted `Console` for driving sessions without a terminal.
///
/// Text answers are selected by prompt-substring matching, so tests stay
/// correct no matter which order questions are sampled in. Integer prompts
/// replay a queued script. Every prompt and announcement is recorded for
/// assertions.
pub struct MockConsole {
    /// Map of prompt substring → answer.
    answers: HashMap<String, String>,
    /// Answer returned when no prompt substring matches.
    default_answer: String,
    /// Queued responses for `prompt_int`, consumed front to back.
    int_script: VecDeque<i64>,
    prompts_seen: Vec<String>,
    announcements: Vec<String>,
}

impl MockConsole {
    /// Create a mock with the given prompt-substring → answer mappings.
    pub fn new(answers: HashMap<String, String>) -> Self {
        Self {
            answers,
            default_answer: "pass".to_string(),
            int_script: VecDeque::new(),
            prompts_seen: Vec::new(),
            announcements: Vec::new(),
        }
    }

    /// Create a mock that gives the same answer to every text prompt.
    pub fn with_fixed_answer(answer: &str) -> Self {
        Self {
            answers: HashMap::new(),
            default_answer: answer.to_string(),
            int_script: VecDeque::new(),
            prompts_seen: Vec::new(),
            announcements: Vec::new(),
        }
    }

    /// Queue responses for `prompt_int`, consumed in order.
    pub fn with_ints(mut self, values: impl IntoIterator<Item = i64>) -> Self {
        self.int_script.extend(values);
        self
    }

    /// Number of prompts (text and integer) answered so far.
    pub fn call_count(&self) -> usize {
        self.prompts_seen.len()
    }

    /// Every prompt shown, in order.
    pub fn prompts_seen(&self) -> &[String] {
        &self.prompts_seen
    }

    /// The most recent prompt shown, if any.
    pub fn last_prompt(&self) -> Option<&str> {
        self.prompts_seen.last().map(String::as_str)
    }

    /// Every announcement made, in order.
    pub fn announcements(&self) -> &[String] {
        &self.announcements
    }
}

impl Console for MockConsole {
    fn prompt_text(&mut self, message: &str) -> anyhow::Result<String> {
        self.prompts_seen.push(message.to_string());
        Ok(self
            .answers
            .iter()
            .find(|(key, _)| message.contains(key.as_str()))
            .map(|(_, answer)| answer.clone())
            .unwrap_or_else(|| self.default_answer.clone()))
    }

    fn prompt_int(&mut self, message: &str) -> anyhow::Result<i64> {
        self.prompts_seen.push(message.to_string());
        self.int_script
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("mock int script exhausted at prompt: {message}"))
    }

    fn announce(&mut self, message: &str) {
        self.announcements.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_answer() {
        let mut console = MockConsole::with_fixed_answer("Panaji");
        let answer = console.prompt_text("anything at all").unwrap();
        assert_eq!(answer, "Panaji");
        assert_eq!(console.call_count(), 1);
        assert_eq!(console.last_prompt(), Some("anything at all"));
    }

    #[test]
    fn prompt_matching() {
        let mut answers = HashMap::new();
        answers.insert("Goa".to_string(), "Panaji".to_string());
        answers.insert("Bihar".to_string(), "Patna".to_string());

        let mut console = MockConsole::new(answers);
        assert_eq!(
            console.prompt_text("What is the capital of Goa?").unwrap(),
            "Panaji"
        );
        assert_eq!(
            console.prompt_text("What is the capital of Bihar?").unwrap(),
            "Patna"
        );
        // no substring matches — default answer
        assert_eq!(
            console.prompt_text("What is the capital of Kerala?").unwrap(),
            "pass"
        );
        assert_eq!(console.call_count(), 3);
    }

    #[test]
    fn int_script_consumed_in_order() {
        let mut console = MockConsole::with_fixed_answer("x").with_ints([3, 7]);
        assert_eq!(console.prompt_int("participants?").unwrap(), 3);
        assert_eq!(console.prompt_int("questions?").unwrap(), 7);
        assert!(console.prompt_int("again?").is_err());
    }

    #[test]
    fn announcements_recorded() {
        let mut console = MockConsole::with_fixed_answer("x");
        console.announce("Correct!");
        console.announce("Wrong! The correct answer is Patna.");
        assert_eq!(console.announcements().len(), 2);
        assert_eq!(console.announcements()[0], "Correct!");
    }
}
