// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod config;
mod http_endpoint;

#[cfg(test)]
mod tests;

use axum::{
    Json, Router,
    extract::State as AxumState,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use crewsheet::{Drafting, ResetPolicy};
use crewsheet_api::{
    ActiveContextResponse, AddWorkerRequest, AdjustHoursRequest, ApiError,
    ConfirmSubmissionResponse, ContextKeyRequest, ListRosterResponse, ListSitesResponse,
    RenameRosterMemberRequest, ReviewResponse, SelectDayRequest, SelectSiteRequest,
    SetHoursRequest, SiteCatalog, StaticSiteCatalog, SubmitEndpoint, WorkerRequest,
    add_roster_member, add_worker, adjust_hours, cancel_review, confirm_submission,
    delete_pending, edit_pending, finish_editing, get_session, list_roster, list_sites,
    open_review, remove_roster_member, remove_worker, rename_roster_member, select_day,
    select_site, set_hours, start_session, toggle_working,
};
use crewsheet_domain::SiteId;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use time::Date;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

use crate::config::Args;
use crate::http_endpoint::HttpSubmitEndpoint;

/// Application state shared across handlers.
///
/// The drafting session sits behind one async mutex. The lock is held for
/// the whole of a submission so no edit can interleave with a batch.
#[derive(Clone)]
struct AppState {
    /// The operator's drafting session.
    session: Arc<Mutex<Drafting>>,
    /// Known job sites.
    catalog: Arc<dyn SiteCatalog>,
    /// The remote timesheet backend.
    endpoint: Arc<dyn SubmitEndpoint>,
    /// Reconciliation after a partially failed batch.
    reset_policy: ResetPolicy,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match &err {
            ApiError::DomainRuleViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::PhaseConflict { .. } => StatusCode::CONFLICT,
            ApiError::SubmissionFailed { .. } => {
                warn!(error = %err, "Batch submission failed");
                StatusCode::BAD_GATEWAY
            }
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Handler for GET `/session` endpoint.
async fn handle_get_session(
    AxumState(app_state): AxumState<AppState>,
) -> Json<ActiveContextResponse> {
    info!("Handling get_session request");
    let session = app_state.session.lock().await;
    Json(get_session(&session, app_state.catalog.as_ref()))
}

/// Handler for POST `/context/day` endpoint.
async fn handle_select_day(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<SelectDayRequest>,
) -> Result<Json<ActiveContextResponse>, HttpError> {
    info!(day = %req.day, "Handling select_day request");
    let mut session = app_state.session.lock().await;
    let response: ActiveContextResponse =
        select_day(&mut session, app_state.catalog.as_ref(), &req)?;
    Ok(Json(response))
}

/// Handler for POST `/context/site` endpoint.
async fn handle_select_site(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<SelectSiteRequest>,
) -> Result<Json<ActiveContextResponse>, HttpError> {
    info!(site_id = req.site_id, "Handling select_site request");
    let mut session = app_state.session.lock().await;
    let response: ActiveContextResponse =
        select_site(&mut session, app_state.catalog.as_ref(), &req)?;
    Ok(Json(response))
}

/// Handler for POST `/entries/adjust` endpoint.
async fn handle_adjust_hours(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<AdjustHoursRequest>,
) -> Result<Json<ActiveContextResponse>, HttpError> {
    info!(
        worker_id = req.worker_id,
        delta = req.delta,
        "Handling adjust_hours request"
    );
    let mut session = app_state.session.lock().await;
    let response: ActiveContextResponse =
        adjust_hours(&mut session, app_state.catalog.as_ref(), &req)?;
    Ok(Json(response))
}

/// Handler for POST `/entries/set` endpoint.
async fn handle_set_hours(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<SetHoursRequest>,
) -> Result<Json<ActiveContextResponse>, HttpError> {
    info!(
        worker_id = req.worker_id,
        hours = req.hours,
        "Handling set_hours request"
    );
    let mut session = app_state.session.lock().await;
    let response: ActiveContextResponse =
        set_hours(&mut session, app_state.catalog.as_ref(), &req)?;
    Ok(Json(response))
}

/// Handler for POST `/entries/toggle` endpoint.
async fn handle_toggle_working(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<WorkerRequest>,
) -> Result<Json<ActiveContextResponse>, HttpError> {
    info!(worker_id = req.worker_id, "Handling toggle_working request");
    let mut session = app_state.session.lock().await;
    let response: ActiveContextResponse =
        toggle_working(&mut session, app_state.catalog.as_ref(), &req)?;
    Ok(Json(response))
}

/// Handler for POST `/entries/add` endpoint.
async fn handle_add_worker(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<AddWorkerRequest>,
) -> Result<Json<ActiveContextResponse>, HttpError> {
    info!(worker_id = req.worker_id, "Handling add_worker request");
    let mut session = app_state.session.lock().await;
    let response: ActiveContextResponse =
        add_worker(&mut session, app_state.catalog.as_ref(), &req)?;
    Ok(Json(response))
}

/// Handler for POST `/entries/remove` endpoint.
async fn handle_remove_worker(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<WorkerRequest>,
) -> Result<Json<ActiveContextResponse>, HttpError> {
    info!(worker_id = req.worker_id, "Handling remove_worker request");
    let mut session = app_state.session.lock().await;
    let response: ActiveContextResponse =
        remove_worker(&mut session, app_state.catalog.as_ref(), &req)?;
    Ok(Json(response))
}

/// Handler for GET `/roster` endpoint.
async fn handle_list_roster(
    AxumState(app_state): AxumState<AppState>,
) -> Json<ListRosterResponse> {
    info!("Handling list_roster request");
    let session = app_state.session.lock().await;
    Json(list_roster(&session))
}

/// Handler for POST `/roster/add` endpoint.
async fn handle_add_roster_member(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<AddWorkerRequest>,
) -> Result<Json<ListRosterResponse>, HttpError> {
    info!(worker_id = req.worker_id, "Handling add_roster_member request");
    let mut session = app_state.session.lock().await;
    let response: ListRosterResponse = add_roster_member(&mut session, req)?;
    Ok(Json(response))
}

/// Handler for POST `/roster/remove` endpoint.
async fn handle_remove_roster_member(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<WorkerRequest>,
) -> Result<Json<ListRosterResponse>, HttpError> {
    info!(
        worker_id = req.worker_id,
        "Handling remove_roster_member request"
    );
    let mut session = app_state.session.lock().await;
    let response: ListRosterResponse = remove_roster_member(&mut session, &req)?;
    Ok(Json(response))
}

/// Handler for POST `/roster/rename` endpoint.
async fn handle_rename_roster_member(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<RenameRosterMemberRequest>,
) -> Result<Json<ListRosterResponse>, HttpError> {
    info!(
        worker_id = req.worker_id,
        "Handling rename_roster_member request"
    );
    let mut session = app_state.session.lock().await;
    let response: ListRosterResponse = rename_roster_member(&mut session, req)?;
    Ok(Json(response))
}

/// Handler for GET `/sites` endpoint.
async fn handle_list_sites(
    AxumState(app_state): AxumState<AppState>,
) -> Json<ListSitesResponse> {
    info!("Handling list_sites request");
    Json(list_sites(app_state.catalog.as_ref()))
}

/// Handler for POST `/review` endpoint.
///
/// Enters or refreshes the review.
async fn handle_open_review(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ReviewResponse>, HttpError> {
    info!("Handling open_review request");
    let mut session = app_state.session.lock().await;
    let response: ReviewResponse = open_review(&mut session, app_state.catalog.as_ref())?;
    Ok(Json(response))
}

/// Handler for POST `/review/edit` endpoint.
async fn handle_edit_pending(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<ContextKeyRequest>,
) -> Result<Json<ActiveContextResponse>, HttpError> {
    info!(key = %req.key, "Handling edit_pending request");
    let mut session = app_state.session.lock().await;
    let response: ActiveContextResponse =
        edit_pending(&mut session, app_state.catalog.as_ref(), &req)?;
    Ok(Json(response))
}

/// Handler for POST `/review/done` endpoint.
async fn handle_finish_editing(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ReviewResponse>, HttpError> {
    info!("Handling finish_editing request");
    let mut session = app_state.session.lock().await;
    let response: ReviewResponse = finish_editing(&mut session, app_state.catalog.as_ref())?;
    Ok(Json(response))
}

/// Handler for POST `/review/delete` endpoint.
async fn handle_delete_pending(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<ContextKeyRequest>,
) -> Result<Json<ReviewResponse>, HttpError> {
    info!(key = %req.key, "Handling delete_pending request");
    let mut session = app_state.session.lock().await;
    let response: ReviewResponse =
        delete_pending(&mut session, app_state.catalog.as_ref(), &req)?;
    Ok(Json(response))
}

/// Handler for POST `/review/cancel` endpoint.
async fn handle_cancel_review(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ActiveContextResponse>, HttpError> {
    info!("Handling cancel_review request");
    let mut session = app_state.session.lock().await;
    let response: ActiveContextResponse =
        cancel_review(&mut session, app_state.catalog.as_ref())?;
    Ok(Json(response))
}

/// Handler for POST `/review/confirm` endpoint.
///
/// Submits every pending context to the backend.
async fn handle_confirm_submission(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ConfirmSubmissionResponse>, HttpError> {
    info!(policy = %app_state.reset_policy, "Handling confirm_submission request");
    let mut session = app_state.session.lock().await;
    let response: ConfirmSubmissionResponse = confirm_submission(
        &mut session,
        app_state.endpoint.as_ref(),
        app_state.reset_policy,
    )
    .await?;
    drop(session);

    info!(
        submitted = response.submitted.len(),
        "Finished confirm_submission request"
    );
    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/session", get(handle_get_session))
        .route("/context/day", post(handle_select_day))
        .route("/context/site", post(handle_select_site))
        .route("/entries/adjust", post(handle_adjust_hours))
        .route("/entries/set", post(handle_set_hours))
        .route("/entries/toggle", post(handle_toggle_working))
        .route("/entries/add", post(handle_add_worker))
        .route("/entries/remove", post(handle_remove_worker))
        .route("/roster", get(handle_list_roster))
        .route("/roster/add", post(handle_add_roster_member))
        .route("/roster/remove", post(handle_remove_roster_member))
        .route("/roster/rename", post(handle_rename_roster_member))
        .route("/sites", get(handle_list_sites))
        .route("/review", post(handle_open_review))
        .route("/review/edit", post(handle_edit_pending))
        .route("/review/done", post(handle_finish_editing))
        .route("/review/delete", post(handle_delete_pending))
        .route("/review/cancel", post(handle_cancel_review))
        .route("/review/confirm", post(handle_confirm_submission))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Crewsheet Server");

    let catalog: StaticSiteCatalog = args.catalog();
    let (start_day, start_site): (Date, SiteId) = args.start_context(&catalog)?.decode();
    let drafting: Drafting = start_session(&args.operator()?, start_day, start_site, &catalog)?;

    let endpoint: HttpSubmitEndpoint = HttpSubmitEndpoint::new(&args.submit_url);
    info!(
        url = %endpoint.url(),
        sites = catalog.sites().len(),
        "Submitting timesheets to backend"
    );

    let app_state: AppState = AppState {
        session: Arc::new(Mutex::new(drafting)),
        catalog: Arc::new(catalog),
        endpoint: Arc::new(endpoint),
        reset_policy: args.reset_policy.into(),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
