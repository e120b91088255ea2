//! Issue tracker port
//!
//! The checklist lives in an external tracker. This module defines the
//! interface the evaluator talks to; `gitlab` provides the real
//! implementation. Tests supply in-memory stand-ins.

pub mod gitlab;

/// A release checklist issue as seen by the evaluator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistIssue {
    /// Issue title
    pub title: String,
    /// Link to the issue, shown to the operator
    pub web_url: String,
    /// Whether the tracker reports any checkbox content in the issue
    pub has_tasks: bool,
    /// The issue body containing the checkbox lines
    pub description: String,
}

/// Search parameters for locating a checklist issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueQuery {
    /// The label marking checklist issues (e.g. "Release check-list")
    pub label: String,
    /// The title fragment identifying the version family (e.g. "[2.14.x]")
    pub title_fragment: String,
}

/// Interface to the external issue tracker
///
/// Implementations perform a single synchronous request with no retry or
/// backoff; failures propagate unmodified to the caller.
pub trait IssueTracker: Send + Sync {
    /// Search open issues matching the query.
    ///
    /// Returns issues in the order given by the tracker (newest first);
    /// callers use the first match and must not re-sort.
    fn search(&self, query: &IssueQuery) -> anyhow::Result<Vec<ChecklistIssue>>;
}
