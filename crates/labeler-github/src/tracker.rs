use anyhow::Result;
use async_trait::async_trait;

use crate::RepoRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Result of probing a repository for a commit reference.
pub enum CommitLookup {
    Found,
    NotFound,
}

/// Read/mutate operations the labelers need from the remote issue tracker.
///
/// `get_commit` returns `Ok(CommitLookup::NotFound)` when the tracker answers
/// that the reference does not exist; any other failure is an `Err`.
#[async_trait]
pub trait IssueTrackerApi: Send + Sync {
    async fn get_commit(&self, repo: &RepoRef, reference: &str) -> Result<CommitLookup>;

    async fn add_labels(
        &self,
        repo: &RepoRef,
        issue_number: u64,
        labels: &[String],
    ) -> Result<()>;

    /// Add labels through the `issue_url` carried by pull request payloads.
    async fn add_labels_by_issue_url(&self, issue_url: &str, labels: &[String]) -> Result<()>;
}
