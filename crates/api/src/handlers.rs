// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Every state-changing handler translates its request into a core
//! `Command`, applies it and renders the resulting read model.

use std::str::FromStr;

use crewsheet::{ActiveContext, Command, Drafting, SummaryItem, Transition, apply};
use crewsheet_domain::{
    ContextKey, RosterMember, SiteId, TimeEntry, WorkerId, parse_site_id, parse_worker_id,
    validate_full_name,
};
use tracing::debug;

use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    ActiveContextResponse, AddWorkerRequest, AdjustHoursRequest, ContextKeyRequest,
    ListRosterResponse, ListSitesResponse, RenameRosterMemberRequest, ReviewResponse,
    RosterMemberInfo, SelectDayRequest, SelectSiteRequest, SetHoursRequest, SiteInfo,
    SummaryItemInfo, TimeEntryInfo, WorkerRequest,
};
use crate::sites::SiteCatalog;

fn run(drafting: &mut Drafting, command: Command) -> Result<Transition, ApiError> {
    apply(drafting, command).map_err(translate_core_error)
}

fn worker_id(value: i64) -> Result<WorkerId, ApiError> {
    parse_worker_id(value).map_err(translate_domain_error)
}

fn context_key(request: &ContextKeyRequest) -> Result<ContextKey, ApiError> {
    ContextKey::from_str(&request.key).map_err(translate_domain_error)
}

fn site_name(catalog: &dyn SiteCatalog, site_id: SiteId) -> Option<String> {
    catalog.find(site_id).map(|site| site.name)
}

fn entry_info(entry: &TimeEntry) -> TimeEntryInfo {
    TimeEntryInfo {
        worker_id: entry.worker_id.value(),
        full_name: entry.full_name.clone(),
        hours: entry.hours().value(),
        is_overtime: entry.is_overtime(),
        is_working: entry.is_working(),
    }
}

fn active_response(drafting: &Drafting, catalog: &dyn SiteCatalog) -> ActiveContextResponse {
    let active: &ActiveContext = drafting.active();
    ActiveContextResponse {
        phase: drafting.phase().to_string(),
        context_key: active.key().to_string(),
        day: active.day(),
        site_id: active.site_id().value(),
        site_name: site_name(catalog, active.site_id()),
        entries: active.entries().iter().map(entry_info).collect(),
        working_count: active.working_count(),
        total_hours: active.total_hours(),
        draft_count: drafting.drafts().len(),
    }
}

fn review_response(
    drafting: &Drafting,
    items: &[SummaryItem],
    catalog: &dyn SiteCatalog,
) -> ReviewResponse {
    let items: Vec<SummaryItemInfo> = items
        .iter()
        .map(|item| SummaryItemInfo {
            context_key: item.key.to_string(),
            day: item.day,
            site_id: item.site_id.value(),
            site_name: site_name(catalog, item.site_id),
            worker_count: item.worker_count,
            total_hours: item.total_hours,
        })
        .collect();
    let grand_total_hours: f64 = items.iter().map(|i| i.total_hours).sum();

    ReviewResponse {
        phase: drafting.phase().to_string(),
        context_count: items.len(),
        grand_total_hours,
        items,
    }
}

fn roster_response(drafting: &Drafting) -> ListRosterResponse {
    ListRosterResponse {
        members: drafting
            .roster()
            .list()
            .iter()
            .map(|m| RosterMemberInfo {
                worker_id: m.id.value(),
                full_name: m.full_name.clone(),
            })
            .collect(),
    }
}

fn reviewed(
    drafting: &Drafting,
    transition: Transition,
    catalog: &dyn SiteCatalog,
) -> Result<ReviewResponse, ApiError> {
    match transition {
        Transition::Reviewed(items) => Ok(review_response(drafting, &items, catalog)),
        Transition::Updated { .. } => Err(ApiError::Internal {
            message: String::from("Review command did not produce a summary"),
        }),
    }
}

fn log_change(operation: &'static str, transition: &Transition) {
    if let Transition::Updated { changed } = transition {
        debug!(operation, changed, "Handled entry operation");
    }
}

/// Returns the session phase and the active context.
///
/// This is a read-only operation.
#[must_use]
pub fn get_session(drafting: &Drafting, catalog: &dyn SiteCatalog) -> ActiveContextResponse {
    active_response(drafting, catalog)
}

/// Opens another day at the current site.
///
/// # Errors
///
/// Returns an error if the session is not in the `Flow` phase.
pub fn select_day(
    drafting: &mut Drafting,
    catalog: &dyn SiteCatalog,
    request: &SelectDayRequest,
) -> Result<ActiveContextResponse, ApiError> {
    run(drafting, Command::SelectDay { day: request.day })?;
    Ok(active_response(drafting, catalog))
}

/// Opens another site on the current day.
///
/// # Errors
///
/// Returns an error if:
/// - The site id is not positive
/// - The site is not in the catalog
/// - The session is not in the `Flow` phase
pub fn select_site(
    drafting: &mut Drafting,
    catalog: &dyn SiteCatalog,
    request: &SelectSiteRequest,
) -> Result<ActiveContextResponse, ApiError> {
    let site_id: SiteId = parse_site_id(request.site_id).map_err(translate_domain_error)?;
    if !catalog.contains(site_id) {
        return Err(ApiError::ResourceNotFound {
            resource_type: String::from("Site"),
            message: format!("Site {site_id} is not in the catalog"),
        });
    }

    run(drafting, Command::SelectSite { site_id })?;
    Ok(active_response(drafting, catalog))
}

/// Shifts a worker's hours in the active context.
///
/// Unknown workers are ignored.
///
/// # Errors
///
/// Returns an error if the worker id is not positive or entries are not
/// editable in the current phase.
pub fn adjust_hours(
    drafting: &mut Drafting,
    catalog: &dyn SiteCatalog,
    request: &AdjustHoursRequest,
) -> Result<ActiveContextResponse, ApiError> {
    let command: Command = Command::AdjustHours {
        worker_id: worker_id(request.worker_id)?,
        delta: request.delta,
    };
    let transition: Transition = run(drafting, command)?;
    log_change("adjust_hours", &transition);
    Ok(active_response(drafting, catalog))
}

/// Sets a worker's hours in the active context.
///
/// Unknown workers are ignored.
///
/// # Errors
///
/// Returns an error if the worker id is not positive or entries are not
/// editable in the current phase.
pub fn set_hours(
    drafting: &mut Drafting,
    catalog: &dyn SiteCatalog,
    request: &SetHoursRequest,
) -> Result<ActiveContextResponse, ApiError> {
    let command: Command = Command::SetHours {
        worker_id: worker_id(request.worker_id)?,
        hours: request.hours,
    };
    let transition: Transition = run(drafting, command)?;
    log_change("set_hours", &transition);
    Ok(active_response(drafting, catalog))
}

/// Flips a worker's presence in the active context.
///
/// # Errors
///
/// Returns an error if the worker id is not positive or entries are not
/// editable in the current phase.
pub fn toggle_working(
    drafting: &mut Drafting,
    catalog: &dyn SiteCatalog,
    request: &WorkerRequest,
) -> Result<ActiveContextResponse, ApiError> {
    let command: Command = Command::ToggleWorking {
        worker_id: worker_id(request.worker_id)?,
    };
    let transition: Transition = run(drafting, command)?;
    log_change("toggle_working", &transition);
    Ok(active_response(drafting, catalog))
}

/// Adds a worker to the active context only.
///
/// # Errors
///
/// Returns an error if:
/// - The worker id is not positive
/// - The name is blank
/// - Entries are not editable in the current phase
pub fn add_worker(
    drafting: &mut Drafting,
    catalog: &dyn SiteCatalog,
    request: &AddWorkerRequest,
) -> Result<ActiveContextResponse, ApiError> {
    let full_name: String =
        validate_full_name(&request.full_name).map_err(translate_domain_error)?;
    let member: RosterMember = RosterMember::new(worker_id(request.worker_id)?, full_name);
    let transition: Transition = run(drafting, Command::AddWorker { member })?;
    log_change("add_worker", &transition);
    Ok(active_response(drafting, catalog))
}

/// Removes a worker from the active context only.
///
/// # Errors
///
/// Returns an error if the worker id is not positive or entries are not
/// editable in the current phase.
pub fn remove_worker(
    drafting: &mut Drafting,
    catalog: &dyn SiteCatalog,
    request: &WorkerRequest,
) -> Result<ActiveContextResponse, ApiError> {
    let command: Command = Command::RemoveWorker {
        worker_id: worker_id(request.worker_id)?,
    };
    let transition: Transition = run(drafting, command)?;
    log_change("remove_worker", &transition);
    Ok(active_response(drafting, catalog))
}

/// Lists the crew roster.
///
/// This is a read-only operation.
#[must_use]
pub fn list_roster(drafting: &Drafting) -> ListRosterResponse {
    roster_response(drafting)
}

/// Adds a crew member to the roster and to the active context.
///
/// # Errors
///
/// Returns an error if:
/// - The worker id is not positive
/// - The name is blank
/// - Entries are not editable in the current phase
pub fn add_roster_member(
    drafting: &mut Drafting,
    request: AddWorkerRequest,
) -> Result<ListRosterResponse, ApiError> {
    let member: RosterMember = RosterMember::new(worker_id(request.worker_id)?, request.full_name);
    run(drafting, Command::AddRosterMember { member })?;
    Ok(roster_response(drafting))
}

/// Removes a crew member from the roster. Drafts are left alone.
///
/// # Errors
///
/// Returns an error if the worker id is not positive or entries are not
/// editable in the current phase.
pub fn remove_roster_member(
    drafting: &mut Drafting,
    request: &WorkerRequest,
) -> Result<ListRosterResponse, ApiError> {
    let command: Command = Command::RemoveRosterMember {
        worker_id: worker_id(request.worker_id)?,
    };
    run(drafting, command)?;
    Ok(roster_response(drafting))
}

/// Renames a crew member in the roster and the active context.
///
/// # Errors
///
/// Returns an error if:
/// - The worker id is not positive
/// - The name is blank
/// - Entries are not editable in the current phase
pub fn rename_roster_member(
    drafting: &mut Drafting,
    request: RenameRosterMemberRequest,
) -> Result<ListRosterResponse, ApiError> {
    let command: Command = Command::RenameRosterMember {
        worker_id: worker_id(request.worker_id)?,
        full_name: request.full_name,
    };
    run(drafting, command)?;
    Ok(roster_response(drafting))
}

/// Lists the site catalog.
///
/// This is a read-only operation.
#[must_use]
pub fn list_sites(catalog: &dyn SiteCatalog) -> ListSitesResponse {
    ListSitesResponse {
        sites: catalog
            .sites()
            .into_iter()
            .map(|site| SiteInfo {
                site_id: site.id.value(),
                name: site.name,
            })
            .collect(),
    }
}

/// Enters or refreshes the review and returns the pending summary.
///
/// An empty item list means there is nothing to send.
///
/// # Errors
///
/// Returns an error unless the session is in `Flow` or `Review`.
pub fn open_review(
    drafting: &mut Drafting,
    catalog: &dyn SiteCatalog,
) -> Result<ReviewResponse, ApiError> {
    let transition: Transition = run(drafting, Command::OpenReview)?;
    reviewed(drafting, transition, catalog)
}

/// Opens one pending context for editing from the review.
///
/// # Errors
///
/// Returns an error if:
/// - The key is malformed
/// - No draft exists for the key
/// - The session is not in `Review`
pub fn edit_pending(
    drafting: &mut Drafting,
    catalog: &dyn SiteCatalog,
    request: &ContextKeyRequest,
) -> Result<ActiveContextResponse, ApiError> {
    let key: ContextKey = context_key(request)?;
    run(drafting, Command::EditPending { key })?;
    Ok(active_response(drafting, catalog))
}

/// Returns from single-context editing to the review.
///
/// # Errors
///
/// Returns an error unless the session is in `EditOne`.
pub fn finish_editing(
    drafting: &mut Drafting,
    catalog: &dyn SiteCatalog,
) -> Result<ReviewResponse, ApiError> {
    let transition: Transition = run(drafting, Command::FinishEditing)?;
    reviewed(drafting, transition, catalog)
}

/// Discards one pending context from the review.
///
/// # Errors
///
/// Returns an error if:
/// - The key is malformed
/// - No draft exists for the key
/// - The session is not in `Review`
pub fn delete_pending(
    drafting: &mut Drafting,
    catalog: &dyn SiteCatalog,
    request: &ContextKeyRequest,
) -> Result<ReviewResponse, ApiError> {
    let key: ContextKey = context_key(request)?;
    let transition: Transition = run(drafting, Command::DeletePending { key })?;
    reviewed(drafting, transition, catalog)
}

/// Leaves the review and returns to normal editing.
///
/// # Errors
///
/// Returns an error unless the session is in `Review`.
pub fn cancel_review(
    drafting: &mut Drafting,
    catalog: &dyn SiteCatalog,
) -> Result<ActiveContextResponse, ApiError> {
    run(drafting, Command::CancelReview)?;
    Ok(active_response(drafting, catalog))
}
