//! TOML question bank parser.
//!
//! Loads question banks from TOML files and directories, and validates them.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{Question, QuestionBank, DEFAULT_PROMPT_TEMPLATE, PROMPT_PLACEHOLDER};

/// Intermediate TOML structure for parsing bank files.
#[derive(Debug, Deserialize)]
struct TomlBankFile {
    bank: TomlBankHeader,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlBankHeader {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default = "default_prompt_template")]
    prompt_template: String,
}

fn default_prompt_template() -> String {
    DEFAULT_PROMPT_TEMPLATE.to_string()
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    prompt: String,
    answer: String,
}

/// Parse a single TOML file into a `QuestionBank`.
pub fn parse_bank(path: &Path) -> Result<QuestionBank> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read question bank file: {}", path.display()))?;

    parse_bank_str(&content, path)
}

/// Parse a TOML string into a `QuestionBank` (useful for testing).
pub fn parse_bank_str(content: &str, source_path: &Path) -> Result<QuestionBank> {
    let parsed: TomlBankFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let questions = parsed
        .questions
        .into_iter()
        .map(|q| Question {
            prompt_key: q.prompt,
            expected_answer: q.answer,
        })
        .collect();

    Ok(QuestionBank {
        id: parsed.bank.id,
        name: parsed.bank.name,
        description: parsed.bank.description,
        prompt_template: parsed.bank.prompt_template,
        questions,
    })
}

/// Recursively load all `.toml` bank files from a directory.
pub fn load_bank_directory(dir: &Path) -> Result<Vec<QuestionBank>> {
    let mut banks = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            banks.extend(load_bank_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_bank(&path) {
                Ok(bank) => banks.push(bank),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(banks)
}

/// A warning from bank validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The prompt key the warning applies to (if any).
    pub prompt_key: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a question bank for common issues.
pub fn validate_bank(bank: &QuestionBank) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if bank.is_empty() {
        warnings.push(ValidationWarning {
            prompt_key: None,
            message: "bank has no questions and cannot be administered".into(),
        });
    }

    if !bank.prompt_template.contains(PROMPT_PLACEHOLDER) {
        warnings.push(ValidationWarning {
            prompt_key: None,
            message: format!(
                "prompt_template does not contain {PROMPT_PLACEHOLDER}; every question will read identically"
            ),
        });
    }

    // Duplicate prompt keys (the bank is conceptually a mapping)
    let mut seen = std::collections::HashSet::new();
    for q in &bank.questions {
        let key = q.prompt_key.trim().to_lowercase();
        if !seen.insert(key) {
            warnings.push(ValidationWarning {
                prompt_key: Some(q.prompt_key.clone()),
                message: format!("duplicate prompt: {}", q.prompt_key),
            });
        }
    }

    for q in &bank.questions {
        if q.prompt_key.trim().is_empty() {
            warnings.push(ValidationWarning {
                prompt_key: None,
                message: "question has an empty prompt".into(),
            });
        }
        if q.expected_answer.trim().is_empty() {
            warnings.push(ValidationWarning {
                prompt_key: Some(q.prompt_key.clone()),
                message: format!("question '{}' has an empty answer", q.prompt_key),
            });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const VALID_TOML: &str = r#"
[bank]
id = "india-states"
name = "Indian States & Capitals"
description = "State capitals of India"
prompt_template = "What is the capital of {subject}?"

[[questions]]
prompt = "Goa"
answer = "Panaji"

[[questions]]
prompt = "Bihar"
answer = "Patna"
"#;

    #[test]
    fn parse_valid_toml() {
        let bank = parse_bank_str(VALID_TOML, &PathBuf::from("test.toml")).unwrap();
        assert_eq!(bank.id, "india-states");
        assert_eq!(bank.name, "Indian States & Capitals");
        assert_eq!(bank.len(), 2);
        assert_eq!(bank.questions[0].prompt_key, "Goa");
        assert_eq!(bank.questions[0].expected_answer, "Panaji");
    }

    #[test]
    fn parse_missing_optional_fields() {
        let toml = r#"
[bank]
id = "minimal"
name = "Minimal"

[[questions]]
prompt = "Q"
answer = "A"
"#;
        let bank = parse_bank_str(toml, &PathBuf::from("test.toml")).unwrap();
        assert_eq!(bank.description, "");
        assert_eq!(bank.prompt_template, DEFAULT_PROMPT_TEMPLATE);
        assert_eq!(bank.len(), 1);
    }

    #[test]
    fn parse_malformed_toml() {
        let bad = "this is not [valid toml }{";
        let result = parse_bank_str(bad, &PathBuf::from("bad.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn validate_clean_bank_has_no_warnings() {
        let bank = parse_bank_str(VALID_TOML, &PathBuf::from("test.toml")).unwrap();
        assert!(validate_bank(&bank).is_empty());
    }

    #[test]
    fn validate_duplicate_prompts() {
        let toml = r#"
[bank]
id = "dupes"
name = "Dupes"

[[questions]]
prompt = "Goa"
answer = "Panaji"

[[questions]]
prompt = "goa"
answer = "Panaji"
"#;
        let bank = parse_bank_str(toml, &PathBuf::from("test.toml")).unwrap();
        let warnings = validate_bank(&bank);
        assert!(warnings.iter().any(|w| w.message.contains("duplicate")));
    }

    #[test]
    fn validate_empty_answer() {
        let toml = r#"
[bank]
id = "blank"
name = "Blank"

[[questions]]
prompt = "Goa"
answer = "   "
"#;
        let bank = parse_bank_str(toml, &PathBuf::from("test.toml")).unwrap();
        let warnings = validate_bank(&bank);
        assert!(warnings.iter().any(|w| w.message.contains("empty answer")));
    }

    #[test]
    fn validate_empty_bank() {
        let toml = r#"
[bank]
id = "empty"
name = "Empty"
"#;
        let bank = parse_bank_str(toml, &PathBuf::from("test.toml")).unwrap();
        let warnings = validate_bank(&bank);
        assert!(warnings.iter().any(|w| w.message.contains("no questions")));
    }

    #[test]
    fn validate_template_without_placeholder() {
        let toml = r#"
[bank]
id = "fixed"
name = "Fixed"
prompt_template = "Answer the question"

[[questions]]
prompt = "Goa"
answer = "Panaji"
"#;
        let bank = parse_bank_str(toml, &PathBuf::from("test.toml")).unwrap();
        let warnings = validate_bank(&bank);
        assert!(warnings.iter().any(|w| w.message.contains("prompt_template")));
    }

    #[test]
    fn load_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("good.toml"), VALID_TOML).unwrap();
        std::fs::write(dir.path().join("bad.toml"), "not toml [").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let banks = load_bank_directory(dir.path()).unwrap();
        assert_eq!(banks.len(), 1);
        assert_eq!(banks[0].id, "india-states");
    }
}
