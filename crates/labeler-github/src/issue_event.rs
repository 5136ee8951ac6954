use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::RepoRef;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
/// Public struct `GithubIssueLabel` as carried in webhook payloads.
pub struct GithubIssueLabel {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
/// Public struct `GithubIssue` with the fields the issue labeler reads.
pub struct GithubIssue {
    pub number: u64,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub labels: Vec<GithubIssueLabel>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub closed_at: Option<String>,
}

// Webhook payloads may carry `"labels": null` rather than omitting the key.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl GithubIssue {
    /// Exact, case-sensitive label name match.
    pub fn has_label(&self, name: &str) -> bool {
        self.labels.iter().any(|label| label.name == name)
    }

    pub fn body_text(&self) -> &str {
        self.body.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GithubPullRequestBase {
    #[serde(rename = "ref")]
    pub git_ref: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
/// Public struct `GithubPullRequest` with the fields the PR labelers read.
pub struct GithubPullRequest {
    #[serde(default)]
    pub number: Option<u64>,
    pub base: GithubPullRequestBase,
    pub issue_url: String,
}

#[derive(Debug, Clone, Deserialize)]
struct GithubRepositoryOwner {
    login: String,
}

#[derive(Debug, Clone, Deserialize)]
struct GithubRepository {
    name: String,
    owner: GithubRepositoryOwner,
    #[serde(default)]
    fork: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Enumerates the webhook event names the labelers recognize.
pub enum EventKind {
    Issues,
    PullRequestTarget,
    Other(String),
}

impl EventKind {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "issues" => Self::Issues,
            "pull_request_target" => Self::PullRequestTarget,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Issues => "issues",
            Self::PullRequestTarget => "pull_request_target",
            Self::Other(name) => name.as_str(),
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventPayload {
    Issue(GithubIssue),
    PullRequest(GithubPullRequest),
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One inbound webhook event, built fresh for each run.
pub struct LabelerEvent {
    pub kind: EventKind,
    pub action: String,
    pub repo: Option<RepoRef>,
    pub is_fork: bool,
    pub payload: EventPayload,
}

impl LabelerEvent {
    /// Build an event from the host-provided event name and payload JSON.
    ///
    /// `repo_override` wins over `repository` in the payload; it mirrors
    /// `GITHUB_REPOSITORY` in the Actions environment.
    pub fn from_payload(
        event_name: &str,
        repo_override: Option<RepoRef>,
        payload: &Value,
    ) -> Result<Self> {
        tracing::debug!(%event_name, raw_payload = %payload, "parsing event payload");
        let kind = EventKind::parse(event_name);
        let action = payload
            .get("action")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        // Only the section the event kind needs is decoded, so an event of an
        // unsupported kind is never rejected for a malformed payload.
        let section = match kind {
            EventKind::Issues => "issue",
            EventKind::PullRequestTarget => "pull_request",
            EventKind::Other(_) => {
                return Ok(Self {
                    kind,
                    action,
                    repo: repo_override,
                    is_fork: false,
                    payload: EventPayload::Empty,
                });
            }
        };

        let repository = decode_section::<GithubRepository>(payload, "repository")?;
        let is_fork = repository
            .as_ref()
            .map(|repository| repository.fork)
            .unwrap_or(false);
        let repo = repo_override.or_else(|| {
            repository
                .as_ref()
                .map(|repository| RepoRef::new(&repository.owner.login, &repository.name))
        });
        let payload = match kind {
            EventKind::Issues => decode_section::<GithubIssue>(payload, section)?
                .map(EventPayload::Issue),
            _ => decode_section::<GithubPullRequest>(payload, section)?
                .map(EventPayload::PullRequest),
        }
        .unwrap_or(EventPayload::Empty);
        Ok(Self {
            kind,
            action,
            repo,
            is_fork,
            payload,
        })
    }
}

fn decode_section<T: DeserializeOwned>(payload: &Value, section: &str) -> Result<Option<T>> {
    match payload.get(section) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => T::deserialize(value)
            .map(Some)
            .with_context(|| format!("invalid event payload section '{section}'")),
    }
}

/// Read the webhook payload file referenced by `GITHUB_EVENT_PATH`.
pub fn load_event_file(path: &Path) -> Result<Value> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read event payload {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse event payload {}", path.display()))
}
