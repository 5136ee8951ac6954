use std::time::Duration;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use serde_json::json;

use crate::github_transport_helpers::{
    is_missing_commit_status, issue_labels_url, truncate_for_error,
};
use crate::tracker::{CommitLookup, IssueTrackerApi};
use crate::RepoRef;

pub const DEFAULT_GITHUB_API_BASE: &str = "https://api.github.com";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

const ERROR_BODY_MAX_CHARS: usize = 800;

#[derive(Clone)]
/// Thin REST client over the GitHub endpoints used by the labelers.
///
/// Every call is a single request; the only resilience is the request
/// timeout configured on the underlying `reqwest::Client`.
pub struct GithubApiClient {
    http: reqwest::Client,
    api_base: String,
}

impl GithubApiClient {
    pub fn new(api_base: &str, token: &str, request_timeout_ms: u64) -> Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static("commit-labeler"),
        );
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "x-github-api-version",
            reqwest::header::HeaderValue::from_static("2022-11-28"),
        );
        let auth_header = format!("Bearer {}", token.trim());
        headers.insert(
            reqwest::header::AUTHORIZATION,
            reqwest::header::HeaderValue::from_str(&auth_header)
                .context("invalid github authorization header")?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_millis(request_timeout_ms.max(1)))
            .build()
            .context("failed to create github api client")?;
        Ok(Self {
            http: client,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    async fn send(
        &self,
        operation: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response> {
        request
            .send()
            .await
            .with_context(|| format!("github api {operation} request failed"))
    }

    async fn require_success(&self, operation: &str, response: reqwest::Response) -> Result<()> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        bail!(
            "github api {operation} failed with status {}: {}",
            status.as_u16(),
            truncate_for_error(&body, ERROR_BODY_MAX_CHARS)
        );
    }
}

#[async_trait]
impl IssueTrackerApi for GithubApiClient {
    async fn get_commit(&self, repo: &RepoRef, reference: &str) -> Result<CommitLookup> {
        let url = format!(
            "{}/repos/{}/{}/commits/{}",
            self.api_base, repo.owner, repo.name, reference
        );
        let response = self.send("get commit", self.http.get(url)).await?;
        let status = response.status();
        if status.is_success() {
            return Ok(CommitLookup::Found);
        }
        if is_missing_commit_status(status.as_u16()) {
            return Ok(CommitLookup::NotFound);
        }
        let body = response.text().await.unwrap_or_default();
        bail!(
            "github api get commit failed with status {}: {}",
            status.as_u16(),
            truncate_for_error(&body, ERROR_BODY_MAX_CHARS)
        );
    }

    async fn add_labels(
        &self,
        repo: &RepoRef,
        issue_number: u64,
        labels: &[String],
    ) -> Result<()> {
        let payload = json!({ "labels": labels });
        let url = format!(
            "{}/repos/{}/{}/issues/{}/labels",
            self.api_base, repo.owner, repo.name, issue_number
        );
        let response = self
            .send("add labels", self.http.post(url).json(&payload))
            .await?;
        self.require_success("add labels", response).await
    }

    async fn add_labels_by_issue_url(&self, issue_url: &str, labels: &[String]) -> Result<()> {
        let payload = json!({ "labels": labels });
        let response = self
            .send(
                "add pull request labels",
                self.http.post(issue_labels_url(issue_url)).json(&payload),
            )
            .await?;
        self.require_success("add pull request labels", response)
            .await
    }
}
