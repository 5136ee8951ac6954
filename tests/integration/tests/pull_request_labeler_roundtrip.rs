use httpmock::prelude::*;
use labeler_github::{GithubApiClient, LabelerEvent};
use labeler_runtime::{
    dispatch, Deployment, DispatchOutcome, LabelerError, PullRequestCategory, PullRequestLabeler,
};
use serde_json::json;

#[tokio::test]
async fn integration_every_category_labels_through_issue_url() {
    for category in [
        PullRequestCategory::Core,
        PullRequestCategory::Db,
        PullRequestCategory::Script,
        PullRequestCategory::Workflow,
    ] {
        let server = MockServer::start();
        let labels = server.mock(|when, then| {
            when.method(POST)
                .path("/repos/test-owner/test-repo/issues/77/labels")
                .json_body(json!({ "labels": [category.label()] }));
            then.status(200).json_body(json!([{ "name": category.label() }]));
        });
        let payload = json!({
            "action": "opened",
            "repository": {
                "name": "test-repo",
                "owner": { "login": "test-owner" },
                "fork": false
            },
            "pull_request": {
                "number": 77,
                "base": { "ref": "master" },
                "issue_url": server.url("/repos/test-owner/test-repo/issues/77")
            }
        });
        let event =
            LabelerEvent::from_payload("pull_request_target", None, &payload).expect("event");
        let client =
            GithubApiClient::new(&server.base_url(), "test-token", 5_000).expect("client");
        let deployment = Deployment::PullRequest(PullRequestLabeler::for_category(category));

        let outcome = dispatch(&deployment, &event, &client)
            .await
            .expect("dispatch");
        assert_eq!(
            outcome,
            DispatchOutcome::PullRequestLabeled {
                label: category.label().to_string()
            }
        );
        labels.assert_calls(1);
    }
}

#[tokio::test]
async fn integration_pull_request_labeler_rejects_plain_pull_request_event() {
    let server = MockServer::start();
    let labels = server.mock(|when, then| {
        when.method(POST)
            .path("/repos/test-owner/test-repo/issues/77/labels");
        then.status(200).json_body(json!([]));
    });
    let payload = json!({
        "action": "opened",
        "repository": {
            "name": "test-repo",
            "owner": { "login": "test-owner" },
            "fork": false
        },
        "pull_request": {
            "base": { "ref": "master" },
            "issue_url": server.url("/repos/test-owner/test-repo/issues/77")
        }
    });
    let event = LabelerEvent::from_payload("pull_request", None, &payload).expect("event");
    let client = GithubApiClient::new(&server.base_url(), "test-token", 5_000).expect("client");
    let deployment =
        Deployment::PullRequest(PullRequestLabeler::for_category(PullRequestCategory::Core));

    let error = dispatch(&deployment, &event, &client)
        .await
        .expect_err("unsupported");
    let LabelerError::UnsupportedEvent(kind) = error else {
        panic!("expected unsupported event error");
    };
    assert_eq!(kind, "pull_request");
    labels.assert_calls(0);
}
