// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Field names are `camelCase` on the wire and days are `YYYY-MM-DD`.

use crewsheet_domain::calendar_day;
use serde::{Deserialize, Serialize};
use time::Date;

/// API request to open another day at the current site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectDayRequest {
    /// The day to open.
    #[serde(with = "calendar_day")]
    pub day: Date,
}

/// API request to open another site on the current day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectSiteRequest {
    /// The site to open.
    pub site_id: i64,
}

/// API request to shift a worker's hours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustHoursRequest {
    /// The worker.
    pub worker_id: i64,
    /// Signed change in hours.
    pub delta: f64,
}

/// API request to set a worker's hours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetHoursRequest {
    /// The worker.
    pub worker_id: i64,
    /// The new value. Clamped to the daily bounds.
    pub hours: f64,
}

/// API request naming a single worker.
///
/// Used for toggling presence, removing a worker from the active context and
/// removing a crew member from the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerRequest {
    /// The worker.
    pub worker_id: i64,
}

/// API request carrying a worker identity.
///
/// Used for adding a worker to the active context and to the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddWorkerRequest {
    /// The worker.
    pub worker_id: i64,
    /// The display name.
    pub full_name: String,
}

/// API request to rename a crew member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameRosterMemberRequest {
    /// The worker.
    pub worker_id: i64,
    /// The new display name.
    pub full_name: String,
}

/// API request naming a pending context from the review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextKeyRequest {
    /// The context key, as `YYYY-MM-DD@<siteId>`.
    pub key: String,
}

/// One entry of the active context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntryInfo {
    /// The worker.
    pub worker_id: i64,
    /// The display name recorded on this entry.
    pub full_name: String,
    /// Hours, also kept while the worker is marked absent.
    pub hours: f64,
    /// Whether `hours` exceeds a standard shift.
    pub is_overtime: bool,
    /// Whether the worker is marked as present.
    pub is_working: bool,
}

/// API response describing the session and its active context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveContextResponse {
    /// The session phase.
    pub phase: String,
    /// The active context key.
    pub context_key: String,
    /// The active day.
    #[serde(with = "calendar_day")]
    pub day: Date,
    /// The active site.
    pub site_id: i64,
    /// The active site's display name, when the catalog knows it.
    pub site_name: Option<String>,
    /// Entries in display order.
    pub entries: Vec<TimeEntryInfo>,
    /// Number of workers marked as present.
    pub working_count: usize,
    /// Sum of hours over workers marked as present.
    pub total_hours: f64,
    /// Number of stored drafts, not counting unsaved edits.
    pub draft_count: usize,
}

/// A crew member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterMemberInfo {
    /// The worker.
    pub worker_id: i64,
    /// The display name.
    pub full_name: String,
}

/// API response listing the crew roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRosterResponse {
    /// Members in insertion order.
    pub members: Vec<RosterMemberInfo>,
}

/// A job site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteInfo {
    /// The site identifier.
    pub site_id: i64,
    /// The display name.
    pub name: String,
}

/// API response listing the site catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSitesResponse {
    /// Every known site.
    pub sites: Vec<SiteInfo>,
}

/// One row of the pending-submission summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryItemInfo {
    /// The context key.
    pub context_key: String,
    /// The calendar day.
    #[serde(with = "calendar_day")]
    pub day: Date,
    /// The job site.
    pub site_id: i64,
    /// The site's display name, when the catalog knows it.
    pub site_name: Option<String>,
    /// Number of workers marked as present.
    pub worker_count: usize,
    /// Sum of hours over workers marked as present.
    pub total_hours: f64,
}

/// API response for the review screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    /// The session phase.
    pub phase: String,
    /// Pending contexts sorted by day, then site.
    pub items: Vec<SummaryItemInfo>,
    /// Number of pending contexts.
    pub context_count: usize,
    /// Sum of hours across every pending context.
    pub grand_total_hours: f64,
}

/// API response for a confirmed submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmSubmissionResponse {
    /// Context keys accepted by the remote endpoint.
    pub submitted: Vec<String>,
    /// A human-readable outcome.
    pub message: String,
}
