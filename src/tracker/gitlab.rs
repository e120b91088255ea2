//! GitLab implementation of the issue tracker port
//!
//! Queries `GET /api/v4/projects/{id}/issues` with a label filter and a
//! title search, authenticated via the `PRIVATE-TOKEN` header.

use anyhow::Context as _;
use serde::Deserialize;

use super::{ChecklistIssue, IssueQuery, IssueTracker};
use crate::config::GitlabConfig;

/// Issue tracker backed by the GitLab REST API
#[derive(Debug)]
pub struct GitlabTracker {
    http: reqwest::blocking::Client,
    base_url: String,
    project_id: u64,
    token: Option<String>,
}

/// Wire format of a GitLab issue, reduced to the fields we read
#[derive(Debug, Deserialize)]
struct GitlabIssue {
    title: String,
    web_url: String,
    #[serde(default)]
    has_tasks: bool,
    #[serde(default)]
    description: Option<String>,
}

impl GitlabTracker {
    /// Create a tracker for the configured GitLab instance
    pub fn new(config: &GitlabConfig) -> anyhow::Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("relcheck/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: config.host.trim_end_matches('/').to_string(),
            project_id: config.project_id,
            token: config.token.clone(),
        })
    }

    fn issues_url(&self) -> String {
        format!("{}/api/v4/projects/{}/issues", self.base_url, self.project_id)
    }
}

impl IssueTracker for GitlabTracker {
    fn search(&self, query: &IssueQuery) -> anyhow::Result<Vec<ChecklistIssue>> {
        let url = self.issues_url();
        log::debug!("querying {url} for {:?}", query.title_fragment);

        let mut request = self.http.get(&url).query(&[
            ("labels", query.label.as_str()),
            ("search", query.title_fragment.as_str()),
            ("in", "title"),
            ("state", "opened"),
        ]);

        if let Some(token) = &self.token {
            request = request.header("PRIVATE-TOKEN", token);
        }

        let issues: Vec<GitlabIssue> = request
            .send()
            .with_context(|| format!("issue query to {url} failed"))?
            .error_for_status()
            .with_context(|| format!("issue query to {url} was rejected"))?
            .json()
            .context("malformed issue list in tracker response")?;

        Ok(issues
            .into_iter()
            .map(|issue| ChecklistIssue {
                title: issue.title,
                web_url: issue.web_url,
                has_tasks: issue.has_tasks,
                description: issue.description.unwrap_or_default(),
            })
            .collect())
    }
}
