use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use labeler_github::github_api_client::{DEFAULT_GITHUB_API_BASE, DEFAULT_REQUEST_TIMEOUT_MS};
use labeler_runtime::{Deployment, PullRequestCategory, PullRequestLabeler};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum CliLabelerKind {
    Issue,
    Core,
    Db,
    Script,
    Workflow,
}

impl CliLabelerKind {
    pub(crate) fn deployment(self) -> Deployment {
        let category = match self {
            Self::Issue => return Deployment::IssueHash,
            Self::Core => PullRequestCategory::Core,
            Self::Db => PullRequestCategory::Db,
            Self::Script => PullRequestCategory::Script,
            Self::Workflow => PullRequestCategory::Workflow,
        };
        Deployment::PullRequest(PullRequestLabeler::for_category(category))
    }
}

fn parse_positive_u64(value: &str) -> Result<u64, String> {
    let parsed = value
        .parse::<u64>()
        .map_err(|error| format!("failed to parse integer: {error}"))?;
    if parsed == 0 {
        return Err("value must be greater than 0".to_string());
    }
    Ok(parsed)
}

#[derive(Debug, Parser)]
#[command(
    name = "labeler",
    about = "Label one GitHub issue or pull request event",
    version
)]
pub(crate) struct Cli {
    #[arg(
        long = "labeler",
        env = "LABELER_KIND",
        value_enum,
        help = "Labeler deployment to run: issue (missing commit hash check) or a fixed pull request label"
    )]
    pub(crate) labeler: CliLabelerKind,

    #[arg(
        long = "github-token",
        env = "GITHUB_TOKEN",
        hide_env_values = true,
        help = "GitHub token used to read commits and add labels"
    )]
    pub(crate) github_token: String,

    #[arg(
        long = "github-event-name",
        env = "GITHUB_EVENT_NAME",
        help = "Webhook event name that triggered the run (issues, pull_request_target)"
    )]
    pub(crate) github_event_name: String,

    #[arg(
        long = "github-event-path",
        env = "GITHUB_EVENT_PATH",
        value_name = "path",
        help = "Path to the webhook event payload JSON"
    )]
    pub(crate) github_event_path: PathBuf,

    #[arg(
        long = "github-repo",
        env = "GITHUB_REPOSITORY",
        value_name = "owner/repo",
        help = "Repository override in owner/repo format; defaults to the payload repository"
    )]
    pub(crate) github_repo: Option<String>,

    #[arg(
        long = "github-api-base",
        env = "GITHUB_API_URL",
        default_value = DEFAULT_GITHUB_API_BASE,
        help = "GitHub REST API base URL"
    )]
    pub(crate) github_api_base: String,

    #[arg(
        long = "request-timeout-ms",
        env = "LABELER_REQUEST_TIMEOUT_MS",
        default_value_t = DEFAULT_REQUEST_TIMEOUT_MS,
        value_parser = parse_positive_u64,
        help = "Per-request timeout for GitHub API calls in milliseconds"
    )]
    pub(crate) request_timeout_ms: u64,
}
