//! GitHub-facing building blocks for the labeler deployments.
//! This crate owns webhook payload types, event loading, commit-hash token
//! extraction, and the REST transport used to read commits and add labels.

pub mod commit_hash;
pub mod github_api_client;
pub mod github_transport_helpers;
pub mod issue_event;
pub mod repo_ref;
pub mod tracker;

pub use commit_hash::{extract_hash_candidates, HashCandidate};
pub use github_api_client::GithubApiClient;
pub use issue_event::{
    load_event_file, EventKind, EventPayload, GithubIssue, GithubIssueLabel, GithubPullRequest,
    GithubPullRequestBase, LabelerEvent,
};
pub use repo_ref::RepoRef;
pub use tracker::{CommitLookup, IssueTrackerApi};
