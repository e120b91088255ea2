//! Post-deploy reminder
//!
//! Reads the pending post-release set recorded by the last `check` and
//! renders it. Purely informational: never fails the pipeline, and a no-op
//! when nothing is pending or the check was skipped.

use std::path::Path;

use relcheck::output::{OutputMode, ReminderOutput};
use relcheck::storage::PendingStore;

/// Show pending post-release tasks (post-deploy pipeline hook)
pub fn remind(mode: OutputMode) -> anyhow::Result<()> {
    let store = PendingStore::new(Path::new("."));
    let pending = store.load()?.map(|state| state.tasks).unwrap_or_default();

    ReminderOutput {
        pending_post_release: pending,
    }
    .render(mode);

    Ok(())
}
