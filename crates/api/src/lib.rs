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
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod endpoint;
mod error;
mod handlers;
mod operator;
mod request_response;
mod sites;
mod submission;

#[cfg(test)]
mod tests;

// Re-export public types
pub use endpoint::{SubmitEndpoint, SubmitError, SubmitLine, SubmitRequest};
pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{
    add_roster_member, add_worker, adjust_hours, cancel_review, delete_pending, edit_pending,
    finish_editing, get_session, list_roster, list_sites, open_review, remove_roster_member,
    remove_worker, rename_roster_member, select_day, select_site, set_hours, toggle_working,
};
pub use operator::{Operator, start_session};
pub use request_response::{
    ActiveContextResponse, AddWorkerRequest, AdjustHoursRequest, ConfirmSubmissionResponse,
    ContextKeyRequest, ListRosterResponse, ListSitesResponse, RenameRosterMemberRequest,
    ReviewResponse, RosterMemberInfo, SelectDayRequest, SelectSiteRequest, SetHoursRequest,
    SiteInfo, SummaryItemInfo, TimeEntryInfo, WorkerRequest,
};
pub use sites::{Site, SiteCatalog, StaticSiteCatalog};
pub use submission::confirm_submission;
