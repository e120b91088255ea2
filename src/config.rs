//! Typed configuration
//!
//! Settings live in a `.relcheck.toml` at the project root, with environment
//! variable overrides for values that should not be committed (the API
//! token, typically).
//!
//! ```toml
//! [gitlab]
//! host = "https://gitlab.example.com"
//! project_id = 42
//!
//! [checklist]
//! label = "Release check-list"
//! ```
//!
//! Overrides: `RELCHECK_GITLAB_HOST`, `RELCHECK_GITLAB_TOKEN`,
//! `RELCHECK_GITLAB_PROJECT_ID`, `RELCHECK_LABEL`.

use std::fs;
use std::path::Path;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

/// Project configuration filename
pub const CONFIG_FILE: &str = ".relcheck.toml";

/// Default label marking release checklist issues
pub const DEFAULT_LABEL: &str = "Release check-list";

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Tracker connection settings
    pub gitlab: GitlabConfig,
    /// Checklist selection settings
    #[serde(default)]
    pub checklist: ChecklistConfig,
}

/// GitLab connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitlabConfig {
    /// Base URL of the GitLab instance (no default, required)
    pub host: String,
    /// Numeric project id holding the checklist issues (no default, required)
    pub project_id: u64,
    /// API token; usually supplied via `RELCHECK_GITLAB_TOKEN` instead
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Checklist selection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistConfig {
    /// Label that checklist issues carry (default: "Release check-list")
    #[serde(default = "default_label")]
    pub label: String,
}

fn default_label() -> String {
    DEFAULT_LABEL.to_string()
}

impl Default for ChecklistConfig {
    fn default() -> Self {
        Self {
            label: default_label(),
        }
    }
}

impl Config {
    /// Load configuration from `<dir>/.relcheck.toml` and apply environment
    /// overrides
    pub fn load(dir: &Path) -> anyhow::Result<Self> {
        let path = dir.join(CONFIG_FILE);
        let content = fs::read_to_string(&path)
            .with_context(|| format!("cannot read {} (run `relcheck init`?)", path.display()))?;
        let mut config: Self = toml::from_str(&content)
            .with_context(|| format!("invalid config in {}", path.display()))?;
        config.apply_env()?;
        Ok(config)
    }

    fn apply_env(&mut self) -> anyhow::Result<()> {
        if let Ok(host) = std::env::var("RELCHECK_GITLAB_HOST") {
            self.gitlab.host = host;
        }
        if let Ok(token) = std::env::var("RELCHECK_GITLAB_TOKEN") {
            self.gitlab.token = Some(token);
        }
        if let Ok(project_id) = std::env::var("RELCHECK_GITLAB_PROJECT_ID") {
            self.gitlab.project_id = project_id
                .parse()
                .context("RELCHECK_GITLAB_PROJECT_ID must be a number")?;
        }
        if let Ok(label) = std::env::var("RELCHECK_LABEL") {
            self.checklist.label = label;
        }
        Ok(())
    }

    /// The sample configuration written by `relcheck init`
    #[must_use]
    pub const fn sample() -> &'static str {
        r#"# relcheck configuration
# See `relcheck --help` for usage.

[gitlab]
# Base URL of the GitLab instance hosting the checklist issues.
host = "https://gitlab.example.com"
# Numeric project id to search for checklist issues.
project_id = 1
# API token. Prefer the RELCHECK_GITLAB_TOKEN environment variable
# over committing a token here.
# token = ""

[checklist]
# Label that release checklist issues carry.
label = "Release check-list"
"#
    }
}
