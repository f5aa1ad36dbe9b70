// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crewsheet::Drafting;

use crate::tests::helpers::{create_test_catalog, create_test_session};
use crate::{
    ActiveContextResponse, AdjustHoursRequest, ApiError, ContextKeyRequest, ReviewResponse,
    SelectSiteRequest, SetHoursRequest, StaticSiteCatalog, WorkerRequest, adjust_hours,
    cancel_review, delete_pending, edit_pending, finish_editing, open_review, select_site,
    set_hours, toggle_working,
};

/// Site 1 has A at 10h and B off; site 2 has defaults and is active.
fn create_pending_session(catalog: &StaticSiteCatalog) -> Drafting {
    let mut drafting: Drafting = create_test_session();
    adjust_hours(
        &mut drafting,
        catalog,
        &AdjustHoursRequest {
            worker_id: 1,
            delta: 2.0,
        },
    )
    .unwrap();
    toggle_working(&mut drafting, catalog, &WorkerRequest { worker_id: 2 }).unwrap();
    select_site(&mut drafting, catalog, &SelectSiteRequest { site_id: 2 }).unwrap();
    drafting
}

fn key_request(key: &str) -> ContextKeyRequest {
    ContextKeyRequest {
        key: String::from(key),
    }
}

#[test]
fn test_open_review_reports_items_and_totals() {
    let catalog: StaticSiteCatalog = create_test_catalog();
    let mut drafting: Drafting = create_pending_session(&catalog);

    let review: ReviewResponse = open_review(&mut drafting, &catalog).unwrap();

    assert_eq!(review.phase, "Review");
    assert_eq!(review.context_count, 2);
    assert!((review.grand_total_hours - 26.0).abs() < f64::EPSILON);

    let first = &review.items[0];
    assert_eq!(first.context_key, "2024-02-01@1");
    assert_eq!(first.site_name.as_deref(), Some("North Yard"));
    assert_eq!(first.worker_count, 1);
    assert!((first.total_hours - 10.0).abs() < f64::EPSILON);
}

#[test]
fn test_edit_from_review_and_finish() {
    let catalog: StaticSiteCatalog = create_test_catalog();
    let mut drafting: Drafting = create_pending_session(&catalog);
    open_review(&mut drafting, &catalog).unwrap();

    let active: ActiveContextResponse =
        edit_pending(&mut drafting, &catalog, &key_request("2024-02-01@1")).unwrap();
    assert_eq!(active.phase, "EditOne");
    assert_eq!(active.context_key, "2024-02-01@1");

    set_hours(
        &mut drafting,
        &catalog,
        &SetHoursRequest {
            worker_id: 1,
            hours: 12.0,
        },
    )
    .unwrap();
    let review: ReviewResponse = finish_editing(&mut drafting, &catalog).unwrap();

    assert_eq!(review.phase, "Review");
    assert!((review.items[0].total_hours - 12.0).abs() < f64::EPSILON);
}

#[test]
fn test_delete_from_review() {
    let catalog: StaticSiteCatalog = create_test_catalog();
    let mut drafting: Drafting = create_pending_session(&catalog);
    open_review(&mut drafting, &catalog).unwrap();

    let review: ReviewResponse =
        delete_pending(&mut drafting, &catalog, &key_request("2024-02-01@1")).unwrap();

    assert_eq!(review.context_count, 1);
    assert_eq!(review.items[0].context_key, "2024-02-01@2");
}

#[test]
fn test_malformed_key_is_invalid_input() {
    let catalog: StaticSiteCatalog = create_test_catalog();
    let mut drafting: Drafting = create_pending_session(&catalog);
    open_review(&mut drafting, &catalog).unwrap();

    let result: Result<ReviewResponse, ApiError> =
        delete_pending(&mut drafting, &catalog, &key_request("2024-02-01"));

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "key"
    ));
}

#[test]
fn test_missing_pending_context_is_not_found() {
    let catalog: StaticSiteCatalog = create_test_catalog();
    let mut drafting: Drafting = create_pending_session(&catalog);
    open_review(&mut drafting, &catalog).unwrap();

    let result: Result<ActiveContextResponse, ApiError> =
        edit_pending(&mut drafting, &catalog, &key_request("2025-01-01@1"));

    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_edits_during_review_are_phase_conflicts() {
    let catalog: StaticSiteCatalog = create_test_catalog();
    let mut drafting: Drafting = create_pending_session(&catalog);
    open_review(&mut drafting, &catalog).unwrap();

    let result: Result<ActiveContextResponse, ApiError> =
        toggle_working(&mut drafting, &catalog, &WorkerRequest { worker_id: 1 });

    assert!(matches!(
        result,
        Err(ApiError::PhaseConflict { ref phase, .. }) if phase == "Review"
    ));
}

#[test]
fn test_cancel_review_returns_to_flow() {
    let catalog: StaticSiteCatalog = create_test_catalog();
    let mut drafting: Drafting = create_pending_session(&catalog);
    open_review(&mut drafting, &catalog).unwrap();

    let active: ActiveContextResponse = cancel_review(&mut drafting, &catalog).unwrap();

    assert_eq!(active.phase, "Flow");
    assert_eq!(active.context_key, "2024-02-01@2");
}

#[test]
fn test_finish_editing_outside_edit_one_is_rejected() {
    let catalog: StaticSiteCatalog = create_test_catalog();
    let mut drafting: Drafting = create_test_session();

    let result: Result<ReviewResponse, ApiError> = finish_editing(&mut drafting, &catalog);

    assert!(matches!(result, Err(ApiError::PhaseConflict { .. })));
}
