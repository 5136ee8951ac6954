use labeler_github::{extract_hash_candidates, CommitLookup, GithubIssue, IssueTrackerApi, RepoRef};
use tracing::{debug, warn};

use crate::labels::{FEATURE_LABEL, MISSING_HASH_LABEL};
use crate::LabelerError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Terminal state reached by [`classify_issue`].
pub enum ClassifyOutcome {
    /// The issue carries the `Feature` label; nothing was probed.
    Exempt,
    /// `commit` exists in the repository; later candidates were not probed.
    Validated { commit: String },
    /// No candidate validated and the missing-hash label was attached.
    LabeledInvalid { probed: usize },
}

/// Decide whether `issue` cites an existing commit and label it if not.
///
/// Candidates are probed one at a time in body order and probing stops at
/// the first commit the tracker confirms. A failed lookup only disqualifies
/// that candidate. The single `add_labels` call is the only fatal step.
pub async fn classify_issue(
    repo: &RepoRef,
    issue: &GithubIssue,
    api: &dyn IssueTrackerApi,
) -> Result<ClassifyOutcome, LabelerError> {
    debug!(issue = issue.number, "missing hash check start");

    if issue.has_label(FEATURE_LABEL) {
        debug!(
            issue = issue.number,
            "issue has {FEATURE_LABEL} label, skipping {MISSING_HASH_LABEL}"
        );
        return Ok(ClassifyOutcome::Exempt);
    }

    let candidates = extract_hash_candidates(issue.body_text());
    for candidate in &candidates {
        debug!(token = %candidate.token, "checking candidate as commit SHA");
        match api.get_commit(repo, &candidate.token).await {
            Ok(CommitLookup::Found) => {
                debug!(token = %candidate.token, "found valid commit SHA");
                return Ok(ClassifyOutcome::Validated {
                    commit: candidate.token.clone(),
                });
            }
            Ok(CommitLookup::NotFound) => {
                debug!(token = %candidate.token, "candidate is not a valid commit SHA");
            }
            Err(error) => {
                // Still counts as invalid; logged at warn so auth or outage
                // failures are visible in the run log.
                let error = format!("{error:#}");
                warn!(
                    token = %candidate.token,
                    %error,
                    "commit lookup failed, treating candidate as invalid"
                );
            }
        }
    }

    let labels = vec![MISSING_HASH_LABEL.to_string()];
    api.add_labels(repo, issue.number, &labels)
        .await
        .map_err(|source| LabelerError::LabelMutationFailed {
            label: MISSING_HASH_LABEL.to_string(),
            source,
        })?;
    debug!(issue = issue.number, "missing hash check end");
    Ok(ClassifyOutcome::LabeledInvalid {
        probed: candidates.len(),
    })
}
