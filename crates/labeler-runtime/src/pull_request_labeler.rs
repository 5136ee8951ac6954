use labeler_github::{GithubPullRequest, IssueTrackerApi};
use tracing::{debug, info};

use crate::labels::PullRequestCategory;
use crate::LabelerError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Attaches one fixed label to every newly opened, non-fork pull request.
pub struct PullRequestLabeler {
    label: String,
}

impl PullRequestLabeler {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn for_category(category: PullRequestCategory) -> Self {
        Self::new(category.label())
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub async fn set_label(
        &self,
        pull_request: &GithubPullRequest,
        api: &dyn IssueTrackerApi,
    ) -> Result<(), LabelerError> {
        debug!(label = %self.label, "set pull request label start");
        info!("Base is '{}'", pull_request.base.git_ref);

        let labels = vec![self.label.clone()];
        api.add_labels_by_issue_url(&pull_request.issue_url, &labels)
            .await
            .map_err(|source| LabelerError::LabelMutationFailed {
                label: self.label.clone(),
                source,
            })?;

        debug!(label = %self.label, "set pull request label end");
        Ok(())
    }
}
