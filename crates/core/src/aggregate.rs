// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::repository::DraftRepository;
use crate::submission::{PendingContext, SubmissionLine};
use crewsheet_domain::{ContextKey, SiteId, TimeEntry};
use time::Date;

/// One row of the pending-submission summary.
///
/// Derived from a draft on demand; never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryItem {
    /// The context this row describes.
    pub key: ContextKey,
    /// The calendar day.
    pub day: Date,
    /// The job site.
    pub site_id: SiteId,
    /// Number of workers marked as present.
    pub worker_count: usize,
    /// Sum of hours over workers marked as present.
    pub total_hours: f64,
}

fn working_entries(entries: &[TimeEntry]) -> impl Iterator<Item = &TimeEntry> {
    entries.iter().filter(|e| e.is_working())
}

/// Builds the pending summary from every draft.
///
/// Drafts without a single working entry are left out. Rows are sorted by
/// day, then site.
#[must_use]
pub fn summarize_drafts(drafts: &DraftRepository) -> Vec<SummaryItem> {
    let mut items: Vec<SummaryItem> = drafts
        .iter()
        .filter_map(|(key, entries)| {
            let worker_count: usize = working_entries(entries).count();
            if worker_count == 0 {
                return None;
            }
            let total_hours: f64 = working_entries(entries).map(|e| e.hours().value()).sum();
            let (day, site_id): (Date, SiteId) = key.decode();
            Some(SummaryItem {
                key,
                day,
                site_id,
                worker_count,
                total_hours,
            })
        })
        .collect();

    items.sort_by_key(|item| (item.day, item.site_id));
    items
}

/// Builds one submission batch item per draft that has working entries.
#[must_use]
pub fn pending_contexts(drafts: &DraftRepository) -> Vec<PendingContext> {
    drafts
        .iter()
        .filter_map(|(key, entries)| {
            let lines: Vec<SubmissionLine> = working_entries(entries)
                .map(|e| SubmissionLine {
                    worker_id: e.worker_id,
                    hours: e.hours(),
                })
                .collect();
            if lines.is_empty() {
                return None;
            }
            let (day, site_id): (Date, SiteId) = key.decode();
            Some(PendingContext {
                key,
                day,
                site_id,
                lines,
            })
        })
        .collect()
}
