// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::sync::Arc;

use axum::{Router, http::StatusCode};
use crewsheet::ResetPolicy;
use crewsheet_domain::SiteId;
use serde_json::json;

use crate::tests::helpers::{
    RecordingEndpoint, create_default_app, create_test_app, get_json, hours_of, post, post_empty,
};

/// Site 1 gets A at 10h and B off, then site 2 is opened with defaults.
async fn create_two_pending_contexts(app: &Router) {
    post(app, "/entries/adjust", json!({ "workerId": 1, "delta": 2 })).await;
    post(app, "/entries/toggle", json!({ "workerId": 2 })).await;
    post(app, "/context/site", json!({ "siteId": 2 })).await;
}

#[tokio::test]
async fn test_review_lists_pending_contexts() {
    let app: Router = create_default_app();
    create_two_pending_contexts(&app).await;

    let (status, review) = post_empty(&app, "/review").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(review["phase"], "Review");
    assert_eq!(review["contextCount"], 2);
    assert_eq!(review["items"][0]["contextKey"], "2024-02-01@1");
    assert_eq!(review["items"][0]["workerCount"], 1);
    assert_eq!(review["items"][0]["totalHours"], 10.0);
    assert_eq!(review["items"][1]["siteName"], "River Bridge");
    assert_eq!(review["grandTotalHours"], 26.0);
}

#[tokio::test]
async fn test_edit_one_from_review() {
    let app: Router = create_default_app();
    create_two_pending_contexts(&app).await;
    post_empty(&app, "/review").await;

    let (status, session) = post(&app, "/review/edit", json!({ "key": "2024-02-01@1" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(session["phase"], "EditOne");
    assert!((hours_of(&session, 1) - 10.0).abs() < f64::EPSILON);

    post(&app, "/entries/set", json!({ "workerId": 1, "hours": 9 })).await;
    let (status, review) = post_empty(&app, "/review/done").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(review["phase"], "Review");
    assert_eq!(review["items"][0]["totalHours"], 9.0);
}

#[tokio::test]
async fn test_delete_from_review_and_cancel() {
    let app: Router = create_default_app();
    create_two_pending_contexts(&app).await;
    post_empty(&app, "/review").await;

    let (status, review) =
        post(&app, "/review/delete", json!({ "key": "2024-02-01@1" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(review["contextCount"], 1);
    assert_eq!(review["items"][0]["contextKey"], "2024-02-01@2");

    let (status, session) = post_empty(&app, "/review/cancel").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(session["phase"], "Flow");

    let (_, review) = post_empty(&app, "/review").await;
    assert_eq!(review["contextCount"], 1);
}

#[tokio::test]
async fn test_review_key_errors() {
    let app: Router = create_default_app();
    create_two_pending_contexts(&app).await;
    post_empty(&app, "/review").await;

    let (status, _) = post(&app, "/review/edit", json!({ "key": "2030-01-01@1" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = post(&app, "/review/delete", json!({ "key": "yesterday" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_edits_during_review_conflict() {
    let app: Router = create_default_app();
    post_empty(&app, "/review").await;

    let (status, body) = post(&app, "/entries/toggle", json!({ "workerId": 1 })).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], true);

    let (status, _) = post(&app, "/context/day", json!({ "day": "2024-02-02" })).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_confirm_submits_and_resets() {
    let endpoint: Arc<RecordingEndpoint> = Arc::new(RecordingEndpoint::default());
    let app: Router = create_test_app(endpoint.clone(), ResetPolicy::AllOrNothing);
    create_two_pending_contexts(&app).await;
    post_empty(&app, "/review").await;

    let (status, body) = post_empty(&app, "/review/confirm").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["submitted"], json!(["2024-02-01@1", "2024-02-01@2"]));
    assert_eq!(endpoint.call_count(), 2);

    let (_, session) = get_json(&app, "/session").await;
    assert_eq!(session["phase"], "Flow");
    assert_eq!(session["draftCount"], 0);
    assert_eq!(session["workingCount"], 2);

    // Only the freshly defaulted active context is pending.
    let (_, review) = post_empty(&app, "/review").await;
    assert_eq!(review["contextCount"], 1);
    assert_eq!(review["items"][0]["contextKey"], "2024-02-01@2");
    assert_eq!(review["items"][0]["workerCount"], 2);
}

#[tokio::test]
async fn test_confirm_with_nothing_to_send() {
    let endpoint: Arc<RecordingEndpoint> = Arc::new(RecordingEndpoint::default());
    let app: Router = create_test_app(endpoint.clone(), ResetPolicy::AllOrNothing);
    post(&app, "/entries/toggle", json!({ "workerId": 1 })).await;
    post(&app, "/entries/toggle", json!({ "workerId": 2 })).await;
    post_empty(&app, "/review").await;

    let (status, body) = post_empty(&app, "/review/confirm").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Nothing to submit");
    assert_eq!(endpoint.call_count(), 0);
}

#[tokio::test]
async fn test_confirm_partial_failure_is_bad_gateway() {
    let endpoint: Arc<RecordingEndpoint> =
        Arc::new(RecordingEndpoint::failing_for(vec![SiteId::new(2)]));
    let app: Router = create_test_app(endpoint.clone(), ResetPolicy::AllOrNothing);
    create_two_pending_contexts(&app).await;
    post_empty(&app, "/review").await;

    let (status, body) = post_empty(&app, "/review/confirm").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["message"].as_str().unwrap().contains("2024-02-01@2"));

    let (_, review) = post_empty(&app, "/review").await;
    assert_eq!(review["contextCount"], 2);
}

#[tokio::test]
async fn test_confirm_partial_failure_per_context() {
    let endpoint: Arc<RecordingEndpoint> =
        Arc::new(RecordingEndpoint::failing_for(vec![SiteId::new(2)]));
    let app: Router = create_test_app(endpoint, ResetPolicy::PerContext);
    create_two_pending_contexts(&app).await;
    post_empty(&app, "/review").await;

    let (status, _) = post_empty(&app, "/review/confirm").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);

    let (_, review) = post_empty(&app, "/review").await;
    assert_eq!(review["contextCount"], 1);
    assert_eq!(review["items"][0]["contextKey"], "2024-02-01@2");
}

#[tokio::test]
async fn test_confirm_outside_review_conflicts() {
    let app: Router = create_default_app();

    let (status, _) = post_empty(&app, "/review/confirm").await;

    assert_eq!(status, StatusCode::CONFLICT);
}
