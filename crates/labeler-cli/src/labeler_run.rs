use anyhow::{Context, Result};
use labeler_github::{load_event_file, GithubApiClient, LabelerEvent, RepoRef};
use labeler_runtime::{dispatch, DispatchOutcome};

use crate::cli_args::Cli;

/// Load the event named by the CLI, then dispatch it once against GitHub.
pub(crate) async fn run_labeler(cli: &Cli) -> Result<DispatchOutcome> {
    let token = cli.github_token.trim();
    if token.is_empty() {
        anyhow::bail!("Input required and not supplied: github token");
    }
    let repo_override = cli
        .github_repo
        .as_deref()
        .map(str::trim)
        .filter(|raw| !raw.is_empty())
        .map(RepoRef::parse)
        .transpose()?;

    let payload = load_event_file(&cli.github_event_path)?;
    let event = LabelerEvent::from_payload(&cli.github_event_name, repo_override, &payload)?;
    let client = GithubApiClient::new(&cli.github_api_base, token, cli.request_timeout_ms)
        .context("failed to initialize github client")?;

    let deployment = cli.labeler.deployment();
    let outcome = dispatch(&deployment, &event, &client).await?;
    Ok(outcome)
}
