use thiserror::Error;

#[derive(Debug, Error)]
/// Fatal outcomes of a labeler run. Commit lookup failures never appear here.
pub enum LabelerError {
    #[error("Event '{0}' is not supported")]
    UnsupportedEvent(String),
    #[error("Unhandled {subject} action {action}")]
    UnhandledAction {
        subject: &'static str,
        action: String,
    },
    #[error("event payload is missing '{0}'")]
    MissingPayload(&'static str),
    #[error("failed to add label '{label}'")]
    LabelMutationFailed {
        label: String,
        #[source]
        source: anyhow::Error,
    },
}
