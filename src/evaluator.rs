//! Checklist evaluation
//!
//! Orchestrates one pre-deploy evaluation pass: resolve the release version,
//! select the matching checklist issue, parse and classify its tasks, and
//! decide whether the deployment may proceed.
//!
//! The unresolved post-release tasks are returned as part of the
//! [`Evaluation`] rather than stashed in process-wide state; the caller
//! threads them to the reminder step (the CLI does so via the state file in
//! [`crate::storage`]).

use std::fmt;

use crate::classify::{self, PendingTask, Task};
use crate::parser;
use crate::tracker::{IssueQuery, IssueTracker};
use crate::version::ReleaseVersion;

/// Why an evaluation performed no check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No release version was provided
    NoVersion,
    /// No open issue matched the label and title pattern
    NoMatchingIssue,
    /// The matching issue reports no checkbox content
    NoChecklist,
    /// Every checklist line was excluded for this host (or none matched
    /// the grammar)
    NoApplicableTasks,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoVersion => f.write_str("no release version given"),
            Self::NoMatchingIssue => f.write_str("no matching checklist issue"),
            Self::NoChecklist => f.write_str("checklist issue has no tasks"),
            Self::NoApplicableTasks => f.write_str("no tasks apply to this host"),
        }
    }
}

/// Outcome of one evaluation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No check was performed; the deployment proceeds
    Skipped(SkipReason),
    /// All mandatory tasks for this host are done; the deployment proceeds
    Passed,
    /// Unresolved mandatory tasks remain; the deployment must abort.
    /// Carries their descriptions in parse order.
    Blocked(Vec<String>),
}

impl Outcome {
    /// Whether the deployment may proceed
    #[must_use]
    pub const fn allows_deploy(&self) -> bool {
        !matches!(self, Self::Blocked(_))
    }
}

/// The checklist table shown to the operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistReport {
    /// Title of the selected issue
    pub issue_title: String,
    /// Link to the selected issue
    pub issue_url: String,
    /// The deployment target the check ran for
    pub host: String,
    /// All host-applicable tasks, in parse order
    pub tasks: Vec<Task>,
}

/// Everything one evaluation pass produced
#[derive(Debug, Clone)]
pub struct Evaluation {
    /// Pass/fail/skip decision
    pub outcome: Outcome,
    /// Operator-facing table; `None` when the check was skipped
    pub report: Option<ChecklistReport>,
    /// Unresolved post-release tasks for the later reminder step
    pub pending_post_release: Vec<PendingTask>,
}

impl Evaluation {
    /// The newline-joined blocking descriptions, when blocked
    #[must_use]
    pub fn blocking_detail(&self) -> Option<String> {
        match &self.outcome {
            Outcome::Blocked(blocking) => Some(blocking.join("\n")),
            _ => None,
        }
    }

    const fn skipped(reason: SkipReason) -> Self {
        Self {
            outcome: Outcome::Skipped(reason),
            report: None,
            pending_post_release: Vec::new(),
        }
    }
}

/// Run one pre-deploy evaluation pass.
///
/// `version` is the release tag being deployed (skip when absent), `host`
/// the deployment target. A malformed version or a tracker failure is a
/// fatal error; every skip condition resolves to a passing [`Evaluation`].
pub fn evaluate(
    tracker: &dyn IssueTracker,
    label: &str,
    version: Option<&str>,
    host: &str,
) -> anyhow::Result<Evaluation> {
    let Some(version) = version else {
        log::info!("release checklist skipped: no version given");
        return Ok(Evaluation::skipped(SkipReason::NoVersion));
    };

    let family = ReleaseVersion::parse(version)?.family();
    let query = IssueQuery {
        label: label.to_string(),
        title_fragment: family.title_pattern(),
    };

    let issues = tracker.search(&query)?;
    let Some(issue) = issues.into_iter().next() else {
        log::info!("release checklist skipped: no issue matches {}", query.title_fragment);
        return Ok(Evaluation::skipped(SkipReason::NoMatchingIssue));
    };

    if !issue.has_tasks {
        log::info!("release checklist skipped: {:?} has no tasks", issue.title);
        return Ok(Evaluation::skipped(SkipReason::NoChecklist));
    }

    let lines = parser::parse_checklist(&issue.description);
    let classification = classify::classify(&lines, host);

    // The pending set is carried even when the included task list turns out
    // empty; it is necessarily empty then too, so last-run-wins still holds.
    if classification.tasks.is_empty() {
        log::info!("release checklist skipped: no tasks apply to host {host}");
        return Ok(Evaluation::skipped(SkipReason::NoApplicableTasks));
    }

    let outcome = if classification.blocking.is_empty() {
        Outcome::Passed
    } else {
        Outcome::Blocked(classification.blocking)
    };

    Ok(Evaluation {
        outcome,
        report: Some(ChecklistReport {
            issue_title: issue.title,
            issue_url: issue.web_url,
            host: host.to_string(),
            tasks: classification.tasks,
        }),
        pending_post_release: classification.pending_post_release,
    })
}
