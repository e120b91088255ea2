//! Output formatting for human and JSON modes
//!
//! The check and the reminder each render either as a table for the
//! operator or as machine-parseable JSON.

use serde::Serialize;

use crate::classify::{Category, Glyph, PendingTask};
use crate::evaluator::{Evaluation, Outcome};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// One rendered checklist row
#[derive(Debug, Serialize)]
pub struct TaskRow {
    /// Status glyph
    pub glyph: Glyph,
    /// Task description
    pub description: String,
    /// Category label
    pub category: Category,
}

/// Result of the pre-deploy check, ready for rendering
#[derive(Debug, Serialize)]
pub struct CheckOutput {
    /// "skipped", "passed" or "blocked"
    pub status: &'static str,
    /// Skip reason, present only when skipped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_reason: Option<String>,
    /// Selected issue title, absent when skipped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_title: Option<String>,
    /// Selected issue URL, absent when skipped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_url: Option<String>,
    /// The deployment target the check ran for
    pub host: String,
    /// All host-applicable tasks, in parse order
    pub tasks: Vec<TaskRow>,
    /// Descriptions of unresolved mandatory tasks
    pub blocking: Vec<String>,
    /// Unresolved post-release tasks carried to the reminder
    pub pending_post_release: Vec<PendingTask>,
}

impl CheckOutput {
    /// Build the renderable view of an evaluation
    #[must_use]
    pub fn from_evaluation(evaluation: &Evaluation, host: &str) -> Self {
        let (status, skip_reason, blocking) = match &evaluation.outcome {
            Outcome::Skipped(reason) => ("skipped", Some(reason.to_string()), Vec::new()),
            Outcome::Passed => ("passed", None, Vec::new()),
            Outcome::Blocked(blocking) => ("blocked", None, blocking.clone()),
        };

        let tasks = evaluation.report.as_ref().map_or_else(Vec::new, |report| {
            report
                .tasks
                .iter()
                .map(|task| TaskRow {
                    glyph: task.glyph(),
                    description: task.description.clone(),
                    category: task.category,
                })
                .collect()
        });

        Self {
            status,
            skip_reason,
            issue_title: evaluation.report.as_ref().map(|r| r.issue_title.clone()),
            issue_url: evaluation.report.as_ref().map(|r| r.issue_url.clone()),
            host: host.to_string(),
            tasks,
            blocking,
            pending_post_release: evaluation.pending_post_release.clone(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        // Skips are silent: no checklist means nothing to show the operator.
        let (Some(title), Some(url)) = (&self.issue_title, &self.issue_url) else {
            return;
        };

        println!("{title} for \"{}\"", self.host);
        println!("> {url}\n");

        let width = self.tasks.iter().map(|row| row.description.len()).max().unwrap_or(0);
        for row in &self.tasks {
            println!("  {}  {:<width$}  {}", row.glyph, row.description, row.category);
        }

        if !self.blocking.is_empty() {
            println!("\nBLOCKED: {} unresolved mandatory task(s)", self.blocking.len());
        }
    }
}

/// Result of the post-deploy reminder, ready for rendering
#[derive(Debug, Serialize)]
pub struct ReminderOutput {
    /// Unresolved post-release tasks from the last check
    pub pending_post_release: Vec<PendingTask>,
}

impl ReminderOutput {
    /// Render the reminder based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        // Purely informational, and silent when nothing is pending.
        if self.pending_post_release.is_empty() {
            return;
        }

        println!("Do not forget to complete the following tasks:\n");
        for task in &self.pending_post_release {
            println!("  {}  {}", task.glyph, task.description);
        }
    }
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}
