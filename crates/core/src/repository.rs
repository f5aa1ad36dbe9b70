// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crewsheet_domain::{ContextKey, TimeEntry};
use std::collections::BTreeMap;

/// In-memory store of drafted entry lists, one per (day, site) context.
///
/// Lists are stored by value: callers hand over a snapshot on persist and
/// receive a borrow on load. A missing key ("never visited") is distinct
/// from a key mapped to an empty list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftRepository {
    drafts: BTreeMap<ContextKey, Vec<TimeEntry>>,
}

impl DraftRepository {
    /// Creates an empty repository.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            drafts: BTreeMap::new(),
        }
    }

    /// Stores `entries` under `key`, replacing any previous list wholesale.
    pub fn persist(&mut self, key: ContextKey, entries: Vec<TimeEntry>) {
        self.drafts.insert(key, entries);
    }

    /// Returns the stored list for `key`, or `None` if it was never persisted.
    #[must_use]
    pub fn load(&self, key: &ContextKey) -> Option<&[TimeEntry]> {
        self.drafts.get(key).map(Vec::as_slice)
    }

    /// Removes the draft for `key` entirely.
    ///
    /// Returns whether a draft was present.
    pub fn delete(&mut self, key: &ContextKey) -> bool {
        self.drafts.remove(key).is_some()
    }

    /// Checks if a draft exists for `key`.
    #[must_use]
    pub fn contains(&self, key: &ContextKey) -> bool {
        self.drafts.contains_key(key)
    }

    /// Iterates the stored keys in (day, site) order.
    pub fn keys(&self) -> impl Iterator<Item = ContextKey> + '_ {
        self.drafts.keys().copied()
    }

    /// Iterates the stored drafts in (day, site) order.
    pub fn iter(&self) -> impl Iterator<Item = (ContextKey, &[TimeEntry])> + '_ {
        self.drafts
            .iter()
            .map(|(key, entries)| (*key, entries.as_slice()))
    }

    /// Drops every draft.
    pub fn clear(&mut self) {
        self.drafts.clear();
    }

    /// Returns the number of stored drafts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.drafts.len()
    }

    /// Checks if no drafts are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }
}
