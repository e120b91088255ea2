//! Pre-deploy checklist check
//!
//! Runs one evaluation pass against the configured tracker, records the
//! pending post-release set for the later `remind` invocation, renders the
//! checklist table, and fails the pipeline when mandatory tasks remain.

use std::path::Path;

use relcheck::config::Config;
use relcheck::evaluator;
use relcheck::output::{CheckOutput, OutputMode};
use relcheck::storage::{PendingState, PendingStore};
use relcheck::tracker::gitlab::GitlabTracker;

/// Run the pre-deploy check (pre-deploy pipeline hook)
pub fn check(tag: Option<&str>, host: &str, mode: OutputMode) -> anyhow::Result<()> {
    let root = Path::new(".");
    let config = Config::load(root)?;
    let tracker = GitlabTracker::new(&config.gitlab)?;

    let evaluation = evaluator::evaluate(&tracker, &config.checklist.label, tag, host)?;

    // Last evaluation wins: stale pending state from an earlier run must not
    // leak into this run's reminder.
    let store = PendingStore::new(root);
    if evaluation.pending_post_release.is_empty() {
        store.clear()?;
    } else {
        store.save(&PendingState::now(host, evaluation.pending_post_release.clone()))?;
    }

    CheckOutput::from_evaluation(&evaluation, host).render(mode);

    if let Some(detail) = evaluation.blocking_detail() {
        anyhow::bail!("{detail}");
    }

    Ok(())
}
