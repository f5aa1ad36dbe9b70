// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Drafting, RosterStore};
use crewsheet_domain::{ContextKey, RosterMember, SiteId, TimeEntry, WorkerId};
use time::Date;
use time::macros::date;

pub const SITE_ONE: SiteId = SiteId::new(1);
pub const SITE_TWO: SiteId = SiteId::new(2);
pub const WORKER_A: WorkerId = WorkerId::new(1);
pub const WORKER_B: WorkerId = WorkerId::new(2);

pub const fn test_day() -> Date {
    date!(2024 - 02 - 01)
}

pub fn create_test_member(id: i64, name: &str) -> RosterMember {
    RosterMember::new(WorkerId::new(id), String::from(name))
}

pub fn create_test_roster() -> RosterStore {
    RosterStore::with_members(vec![create_test_member(1, "A"), create_test_member(2, "B")])
}

/// Session over roster `[{1, "A"}, {2, "B"}]` opened on 2024-02-01 at site 1.
pub fn create_test_drafting() -> Drafting {
    Drafting::with_roster(create_test_roster(), test_day(), SITE_ONE)
}

pub fn entry_for(entries: &[TimeEntry], worker_id: WorkerId) -> &TimeEntry {
    entries
        .iter()
        .find(|e| e.worker_id == worker_id)
        .unwrap()
}

pub fn hours_of(entries: &[TimeEntry], worker_id: WorkerId) -> f64 {
    entry_for(entries, worker_id).hours().value()
}

pub const fn key(day: Date, site_id: SiteId) -> ContextKey {
    ContextKey::encode(day, site_id)
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
