// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use crewsheet::{Drafting, ResetPolicy, RosterStore};
use crewsheet_api::{
    Site, SiteCatalog, StaticSiteCatalog, SubmitEndpoint, SubmitError, SubmitRequest,
};
use crewsheet_domain::{RosterMember, SiteId, WorkerId};
use serde_json::Value;
use time::macros::date;
use tokio::sync::Mutex;
use tower::ServiceExt;

use crate::{AppState, build_router};

/// Records every submit call and fails for the chosen sites.
#[derive(Debug, Default)]
pub struct RecordingEndpoint {
    failing_sites: Vec<SiteId>,
    calls: std::sync::Mutex<Vec<SubmitRequest>>,
}

impl RecordingEndpoint {
    pub fn failing_for(sites: Vec<SiteId>) -> Self {
        Self {
            failing_sites: sites,
            calls: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl SubmitEndpoint for RecordingEndpoint {
    async fn submit(&self, request: &SubmitRequest) -> Result<(), SubmitError> {
        self.calls.lock().unwrap().push(request.clone());
        if self.failing_sites.contains(&request.site_id) {
            return Err(SubmitError::Rejected {
                status: 503,
                message: String::from("try later"),
            });
        }
        Ok(())
    }
}

fn create_test_catalog() -> Arc<dyn SiteCatalog> {
    Arc::new(StaticSiteCatalog::new(vec![
        Site::new(SiteId::new(1), String::from("North Yard")),
        Site::new(SiteId::new(2), String::from("River Bridge")),
    ]))
}

/// Session over roster `[{1, "A"}, {2, "B"}]` opened on 2024-02-01 at site 1.
fn create_test_session() -> Drafting {
    let roster: RosterStore = RosterStore::with_members(vec![
        RosterMember::new(WorkerId::new(1), String::from("A")),
        RosterMember::new(WorkerId::new(2), String::from("B")),
    ]);
    Drafting::with_roster(roster, date!(2024 - 02 - 01), SiteId::new(1))
}

pub fn create_test_app(endpoint: Arc<RecordingEndpoint>, policy: ResetPolicy) -> Router {
    let endpoint: Arc<dyn SubmitEndpoint> = endpoint;
    let app_state: AppState = AppState {
        session: Arc::new(Mutex::new(create_test_session())),
        catalog: create_test_catalog(),
        endpoint,
        reset_policy: policy,
    };
    build_router(app_state)
}

pub fn create_default_app() -> Router {
    create_test_app(
        Arc::new(RecordingEndpoint::default()),
        ResetPolicy::AllOrNothing,
    )
}

/// Sends one request and returns the status with the JSON body, or
/// `Value::Null` when the body is not JSON.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request: Request<Body> = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status: StatusCode = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, "POST", uri, Some(body)).await
}

pub async fn post_empty(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, "POST", uri, None).await
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, "GET", uri, None).await
}

/// Returns the `hours` of a worker's entry in an active context response.
pub fn hours_of(session: &Value, worker_id: i64) -> f64 {
    session["entries"]
        .as_array()
        .unwrap()
        .iter()
        .find(|e| e["workerId"] == worker_id)
        .unwrap()["hours"]
        .as_f64()
        .unwrap()
}
