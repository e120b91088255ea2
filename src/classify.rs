//! Task classification
//!
//! Turns raw checklist lines into typed tasks for one deployment target:
//! host filtering first, then category and status routing.
//!
//! Tags serve double duty: they name the hosts a task applies to and they
//! carry the `post-release` category marker, in one comma list with no
//! reserved vocabulary. A task with any tags at all is therefore only
//! visible on hosts named in them — including post-release tasks, which must
//! repeat the host tag to stay visible. See DESIGN.md for the open question
//! on that asymmetry; it is preserved here as the literal contract.

use std::fmt;

use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::parser::RawTaskLine;

/// The tag marking a task as deferred until after the release
pub const POST_RELEASE_TAG: &str = "post-release";

/// Task category derived from the tag list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Must be resolved before the deployment may proceed
    Mandatory,
    /// May be resolved after the deployment; only a reminder is issued
    PostRelease,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mandatory => f.write_str("mandatory"),
            Self::PostRelease => f.write_str("post-release"),
        }
    }
}

/// Status glyph shown next to a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Glyph {
    /// Task is done
    Done,
    /// Task is not done and blocks the deployment
    Blocking,
    /// Task is not done but deferred to after the release
    Deferred,
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Done => write!(f, "{}", "✔".green()),
            Self::Blocking => write!(f, "{}", "✘".red()),
            Self::Deferred => write!(f, "{}", "✘".yellow()),
        }
    }
}

/// A checklist task that applies to the current host
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    /// The task description
    pub description: String,
    /// Whether the task is already done
    pub done: bool,
    /// Mandatory or post-release
    pub category: Category,
}

impl Task {
    /// The glyph for this task's (done, category) pair
    #[must_use]
    pub const fn glyph(&self) -> Glyph {
        match (self.done, self.category) {
            (true, _) => Glyph::Done,
            (false, Category::Mandatory) => Glyph::Blocking,
            (false, Category::PostRelease) => Glyph::Deferred,
        }
    }
}

/// An unresolved post-release task carried to the reminder step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingTask {
    /// Status glyph (always deferred for tasks produced here)
    pub glyph: Glyph,
    /// The task description
    pub description: String,
}

/// Classifier output: display rows plus the two derived sets
#[derive(Debug, Clone, Default)]
pub struct Classification {
    /// All host-applicable tasks, in parse order
    pub tasks: Vec<Task>,
    /// Descriptions of undone mandatory tasks, in parse order
    pub blocking: Vec<String>,
    /// Undone post-release tasks, in parse order
    pub pending_post_release: Vec<PendingTask>,
}

/// Classify raw checklist lines for one host.
///
/// Lines whose tag set is non-empty and does not name `host` are excluded
/// from every output — out of scope for this target, neither passing nor
/// failing. Done tasks appear as rows but contribute to neither derived set.
#[must_use]
pub fn classify(lines: &[RawTaskLine], host: &str) -> Classification {
    let mut result = Classification::default();

    for line in lines {
        let tags: Vec<&str> = match line.tags_raw.as_deref() {
            Some(raw) if !raw.trim().is_empty() => raw.split(',').map(str::trim).collect(),
            _ => Vec::new(),
        };

        if !tags.is_empty() && !tags.contains(&host) {
            continue;
        }

        let category = if tags.contains(&POST_RELEASE_TAG) {
            Category::PostRelease
        } else {
            Category::Mandatory
        };

        let task = Task {
            description: line.description.clone(),
            done: line.done,
            category,
        };

        if !task.done {
            match category {
                Category::Mandatory => result.blocking.push(task.description.clone()),
                Category::PostRelease => result.pending_post_release.push(PendingTask {
                    glyph: task.glyph(),
                    description: task.description.clone(),
                }),
            }
        }

        result.tasks.push(task);
    }

    result
}
