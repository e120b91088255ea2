//! Carried-over reminder state
//!
//! The pre-deploy check and the post-deploy reminder run as separate
//! invocations within one pipeline run. The pending post-release set is
//! handed from one to the other through a JSON state file in `.relcheck/`,
//! overwritten (or removed) on every check — last evaluation wins. An
//! absent file means nothing is pending.

use std::fs;
use std::path::PathBuf;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::classify::PendingTask;

/// Directory name for local relcheck state
pub const RELCHECK_DIR: &str = ".relcheck";

const PENDING_FILE: &str = "pending-post-release.json";

/// Pending post-release tasks recorded by the last check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingState {
    /// When the check ran (RFC3339)
    pub checked_at: String,
    /// The deployment target the check ran for
    pub host: String,
    /// The unresolved post-release tasks
    pub tasks: Vec<PendingTask>,
}

impl PendingState {
    /// Record pending tasks for a host, stamped with the current time
    #[must_use]
    pub fn now(host: &str, tasks: Vec<PendingTask>) -> Self {
        Self {
            checked_at: chrono::Utc::now().to_rfc3339(),
            host: host.to_string(),
            tasks,
        }
    }
}

/// File-based store for the pending post-release set
#[derive(Debug, Clone)]
pub struct PendingStore {
    root: PathBuf,
}

impl PendingStore {
    /// Create a store rooted at the given project directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path(&self) -> PathBuf {
        self.root.join(RELCHECK_DIR).join(PENDING_FILE)
    }

    /// Load the pending state, or `None` if no check has recorded one
    pub fn load(&self) -> anyhow::Result<Option<PendingState>> {
        let path = self.path();
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        let state = serde_json::from_str(&content)
            .with_context(|| format!("corrupt pending state in {}", path.display()))?;
        Ok(Some(state))
    }

    /// Save the pending state, replacing any previous one
    pub fn save(&self, state: &PendingState) -> anyhow::Result<()> {
        let path = self.path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("cannot create {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(state)?;
        fs::write(&path, content).with_context(|| format!("cannot write {}", path.display()))?;
        Ok(())
    }

    /// Remove any recorded pending state
    pub fn clear(&self) -> anyhow::Result<()> {
        let path = self.path();
        if path.exists() {
            fs::remove_file(&path).with_context(|| format!("cannot remove {}", path.display()))?;
        }
        Ok(())
    }
}
