//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level quizmaster configuration, read from `quizmaster.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizmasterConfig {
    /// Bank used when `--bank` is not given.
    #[serde(default = "default_bank")]
    pub default_bank: PathBuf,
    /// Questions per participant per session.
    #[serde(default = "default_questions")]
    pub questions_per_session: usize,
    /// Directory saved reports are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_bank() -> PathBuf {
    PathBuf::from("banks/india-states.toml")
}

fn default_questions() -> usize {
    5
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./quizmaster-results")
}

impl Default for QuizmasterConfig {
    fn default() -> Self {
        Self {
            default_bank: default_bank(),
            questions_per_session: default_questions(),
            output_dir: default_output_dir(),
        }
    }
}

/// Load config from an explicit path, or from `quizmaster.toml` in the
/// current directory, falling back to defaults when neither exists.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizmasterConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizmaster.toml");
        local.exists().then_some(local)
    };

    match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<QuizmasterConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))
        }
        None => Ok(QuizmasterConfig::default()),
    }
}
