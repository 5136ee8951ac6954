//! Event dispatch and labeling rules for the issue and pull request labelers.
//!
//! Each run handles exactly one webhook event and issues at most one
//! label-mutation call through an [`labeler_github::IssueTrackerApi`].

pub mod dispatcher;
pub mod error;
pub mod issue_classifier;
pub mod labels;
pub mod pull_request_labeler;


pub use dispatcher::{dispatch, Deployment, DispatchOutcome};
pub use error::LabelerError;
pub use issue_classifier::{classify_issue, ClassifyOutcome};
pub use labels::{PullRequestCategory, FEATURE_LABEL, MISSING_HASH_LABEL};
pub use pull_request_labeler::PullRequestLabeler;
