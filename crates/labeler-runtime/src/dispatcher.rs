use labeler_github::{EventKind, EventPayload, IssueTrackerApi, LabelerEvent};
use tracing::debug;

use crate::issue_classifier::{classify_issue, ClassifyOutcome};
use crate::pull_request_labeler::PullRequestLabeler;
use crate::LabelerError;

const OPENED_ACTION: &str = "opened";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Which labeler this process runs as.
pub enum Deployment {
    /// Missing-commit-hash check on newly opened issues.
    IssueHash,
    /// Fixed label on newly opened pull requests from the base repository.
    PullRequest(PullRequestLabeler),
}

impl Deployment {
    fn handled_kind(&self) -> EventKind {
        match self {
            Self::IssueHash => EventKind::Issues,
            Self::PullRequest(_) => EventKind::PullRequestTarget,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    Issue(ClassifyOutcome),
    PullRequestLabeled { label: String },
    SkippedFork,
}

/// Route one event to the deployment's handler.
///
/// Events are checked in order: kind, fork status (pull request deployments
/// only), then action. A rejected event makes no remote calls.
pub async fn dispatch(
    deployment: &Deployment,
    event: &LabelerEvent,
    api: &dyn IssueTrackerApi,
) -> Result<DispatchOutcome, LabelerError> {
    if event.kind != deployment.handled_kind() {
        return Err(LabelerError::UnsupportedEvent(event.kind.to_string()));
    }
    debug!(kind = %event.kind, action = %event.action, "dispatching event");

    match deployment {
        Deployment::IssueHash => {
            if event.action != OPENED_ACTION {
                return Err(LabelerError::UnhandledAction {
                    subject: "issue",
                    action: event.action.clone(),
                });
            }
            let EventPayload::Issue(issue) = &event.payload else {
                return Err(LabelerError::MissingPayload("issue"));
            };
            let repo = event
                .repo
                .as_ref()
                .ok_or(LabelerError::MissingPayload("repository"))?;
            let outcome = classify_issue(repo, issue, api).await?;
            Ok(DispatchOutcome::Issue(outcome))
        }
        Deployment::PullRequest(labeler) => {
            if event.is_fork {
                debug!("pull request labeling is disabled for forks");
                return Ok(DispatchOutcome::SkippedFork);
            }
            if event.action != OPENED_ACTION {
                return Err(LabelerError::UnhandledAction {
                    subject: "pr",
                    action: event.action.clone(),
                });
            }
            let EventPayload::PullRequest(pull_request) = &event.payload else {
                return Err(LabelerError::MissingPayload("pull_request"));
            };
            labeler.set_label(pull_request, api).await?;
            Ok(DispatchOutcome::PullRequestLabeled {
                label: labeler.label().to_string(),
            })
        }
    }
}
