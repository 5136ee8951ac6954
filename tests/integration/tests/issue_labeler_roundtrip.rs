use httpmock::prelude::*;
use labeler_github::{GithubApiClient, LabelerEvent, RepoRef};
use labeler_runtime::{
    dispatch, ClassifyOutcome, Deployment, DispatchOutcome, LabelerError, MISSING_HASH_LABEL,
};
use serde_json::{json, Value};

fn issue_event_payload(body: &str) -> Value {
    json!({
        "action": "opened",
        "repository": {
            "name": "test-repo",
            "owner": { "login": "test-owner" },
            "fork": false
        },
        "issue": {
            "number": 31,
            "body": body,
            "labels": [{ "name": "Bug" }],
            "state": "open",
            "closed_at": null
        }
    })
}

fn client_for(server: &MockServer) -> GithubApiClient {
    GithubApiClient::new(&server.base_url(), "test-token", 5_000).expect("client")
}

#[tokio::test]
async fn integration_issue_labeler_stops_at_first_existing_commit_over_http() {
    let server = MockServer::start();
    let unknown = server.mock(|when, then| {
        when.method(GET)
            .path("/repos/test-owner/test-repo/commits/1111111");
        then.status(404).json_body(json!({ "message": "Not Found" }));
    });
    let known = server.mock(|when, then| {
        when.method(GET)
            .path("/repos/test-owner/test-repo/commits/2222222");
        then.status(200).json_body(json!({ "sha": "2222222" }));
    });
    let never = server.mock(|when, then| {
        when.method(GET)
            .path("/repos/test-owner/test-repo/commits/3333333");
        then.status(200).json_body(json!({ "sha": "3333333" }));
    });
    let labels = server.mock(|when, then| {
        when.method(POST)
            .path("/repos/test-owner/test-repo/issues/31/labels");
        then.status(200).json_body(json!([]));
    });

    let payload = issue_event_payload("Regressed between 1111111 and 2222222, not 3333333");
    let event = LabelerEvent::from_payload("issues", None, &payload).expect("event");
    let outcome = dispatch(&Deployment::IssueHash, &event, &client_for(&server))
        .await
        .expect("dispatch");

    assert_eq!(
        outcome,
        DispatchOutcome::Issue(ClassifyOutcome::Validated {
            commit: "2222222".to_string()
        })
    );
    unknown.assert_calls(1);
    known.assert_calls(1);
    never.assert_calls(0);
    labels.assert_calls(0);
}

#[tokio::test]
async fn integration_issue_labeler_treats_server_errors_as_invalid_candidates() {
    let server = MockServer::start();
    let unauthorized = server.mock(|when, then| {
        when.method(GET)
            .path("/repos/test-owner/test-repo/commits/abc1234");
        then.status(401).json_body(json!({ "message": "Bad credentials" }));
    });
    let labels = server.mock(|when, then| {
        when.method(POST)
            .path("/repos/test-owner/test-repo/issues/31/labels")
            .json_body(json!({ "labels": [MISSING_HASH_LABEL] }));
        then.status(200).json_body(json!([]));
    });

    let payload = issue_event_payload("Looks like abc1234 but not valid.");
    let event = LabelerEvent::from_payload("issues", None, &payload).expect("event");
    let outcome = dispatch(&Deployment::IssueHash, &event, &client_for(&server))
        .await
        .expect("dispatch");

    assert_eq!(
        outcome,
        DispatchOutcome::Issue(ClassifyOutcome::LabeledInvalid { probed: 1 })
    );
    unauthorized.assert_calls(1);
    labels.assert_calls(1);
}

#[tokio::test]
async fn integration_issue_labeler_surfaces_label_write_failure() {
    let server = MockServer::start();
    let labels = server.mock(|when, then| {
        when.method(POST)
            .path("/repos/override/repo/issues/31/labels");
        then.status(500).body("upstream exploded");
    });

    let payload = issue_event_payload("nothing to see");
    let event = LabelerEvent::from_payload(
        "issues",
        Some(RepoRef::new("override", "repo")),
        &payload,
    )
    .expect("event");
    let error = dispatch(&Deployment::IssueHash, &event, &client_for(&server))
        .await
        .expect_err("write failure");

    let LabelerError::LabelMutationFailed { label, source } = error else {
        panic!("expected label mutation failure");
    };
    assert_eq!(label, MISSING_HASH_LABEL);
    assert!(format!("{source:#}").contains("upstream exploded"));
    labels.assert_calls(1);
}
