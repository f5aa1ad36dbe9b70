// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Mutations on the active entry list.
//!
//! Every operation is total: an unknown worker id is absorbed and reported
//! as "no change". Each method returns whether the list changed.

use crate::state::ActiveContext;
use crewsheet_domain::{Attendance, Hours, RosterMember, TimeEntry, WorkerId};

impl ActiveContext {
    fn entry_mut(&mut self, worker_id: WorkerId) -> Option<&mut TimeEntry> {
        self.entries.iter_mut().find(|e| e.worker_id == worker_id)
    }

    fn contains_worker(&self, worker_id: WorkerId) -> bool {
        self.entries.iter().any(|e| e.worker_id == worker_id)
    }

    fn mark_edited(&mut self, changed: bool) -> bool {
        if changed {
            self.detached = false;
        }
        changed
    }

    /// Shifts a worker's hours by `delta`, clamped to the daily bounds.
    ///
    /// Adjusting hours marks the worker as present. Non-finite deltas are
    /// ignored.
    pub fn adjust_hours(&mut self, worker_id: WorkerId, delta: f64) -> bool {
        if !delta.is_finite() {
            return false;
        }
        let changed: bool = match self.entry_mut(worker_id) {
            Some(entry) => {
                let before: Attendance = entry.attendance();
                entry.adjust_hours(delta);
                entry.attendance() != before
            }
            None => false,
        };
        self.mark_edited(changed)
    }

    /// Sets a worker's hours, clamped to the daily bounds.
    ///
    /// Setting hours marks the worker as present. Non-finite values are
    /// ignored.
    pub fn set_hours(&mut self, worker_id: WorkerId, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        let changed: bool = match self.entry_mut(worker_id) {
            Some(entry) => {
                let before: Attendance = entry.attendance();
                entry.set_hours(Hours::new(value));
                entry.attendance() != before
            }
            None => false,
        };
        self.mark_edited(changed)
    }

    /// Flips whether a worker is marked as present. Hours are kept.
    pub fn toggle_working(&mut self, worker_id: WorkerId) -> bool {
        let changed: bool = match self.entry_mut(worker_id) {
            Some(entry) => {
                entry.toggle_working();
                true
            }
            None => false,
        };
        self.mark_edited(changed)
    }

    /// Appends a default entry for `member` unless the worker is already listed.
    pub fn add_worker(&mut self, member: &RosterMember) -> bool {
        if self.contains_worker(member.id) {
            return false;
        }
        self.entries.push(TimeEntry::from_member(member));
        self.mark_edited(true)
    }

    /// Removes a worker's entry from this context only.
    pub fn remove_worker(&mut self, worker_id: WorkerId) -> bool {
        let before: usize = self.entries.len();
        self.entries.retain(|e| e.worker_id != worker_id);
        let changed: bool = self.entries.len() != before;
        self.mark_edited(changed)
    }

    /// Updates the display name on a worker's entry, if present.
    ///
    /// Renaming does not count as an edit of the context.
    pub(crate) fn rename_worker(&mut self, worker_id: WorkerId, full_name: &str) -> bool {
        match self.entry_mut(worker_id) {
            Some(entry) if entry.full_name != full_name => {
                entry.full_name = full_name.to_string();
                true
            }
            _ => false,
        }
    }
}
