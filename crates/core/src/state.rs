// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::aggregate::SummaryItem;
use crate::roster::RosterStore;
use crewsheet_domain::{ContextKey, SiteId, TimeEntry};
use time::Date;

/// The phases of a drafting session.
///
/// Valid transitions are:
/// - `Flow` → `Review`
/// - `Review` → `EditOne` → `Review`
/// - `Review` → `Flow`
/// - `Review` → `Submitting` → `Flow`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Normal per-context editing.
    #[default]
    Flow,
    /// The pending summary is shown.
    Review,
    /// One pending context is being edited from the review screen.
    EditOne {
        /// The context being edited.
        key: ContextKey,
    },
    /// A batch submission is in flight.
    Submitting,
}

impl Phase {
    /// Returns the phase name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Flow => "Flow",
            Self::Review => "Review",
            Self::EditOne { .. } => "EditOne",
            Self::Submitting => "Submitting",
        }
    }

    /// Returns whether the active entries may be edited.
    #[must_use]
    pub const fn allows_entry_edits(&self) -> bool {
        matches!(self, Self::Flow | Self::EditOne { .. })
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The context currently open for editing.
///
/// This is a working copy. It only reaches the draft repository when the
/// session persists it.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveContext {
    day: Date,
    site_id: SiteId,
    pub(crate) entries: Vec<TimeEntry>,
    /// Set when the working copy was re-defaulted after its draft was
    /// discarded. A detached context is not persisted until it is edited.
    pub(crate) detached: bool,
}

impl ActiveContext {
    /// Creates an active context from an existing entry list.
    #[must_use]
    pub const fn new(day: Date, site_id: SiteId, entries: Vec<TimeEntry>) -> Self {
        Self {
            day,
            site_id,
            entries,
            detached: false,
        }
    }

    /// Creates an active context with one default entry per roster member.
    #[must_use]
    pub fn defaulted(day: Date, site_id: SiteId, roster: &RosterStore) -> Self {
        let entries: Vec<TimeEntry> = roster.list().iter().map(TimeEntry::from_member).collect();
        Self::new(day, site_id, entries)
    }

    /// Returns the key of this context.
    #[must_use]
    pub const fn key(&self) -> ContextKey {
        ContextKey::encode(self.day, self.site_id)
    }

    /// Returns the calendar day.
    #[must_use]
    pub const fn day(&self) -> Date {
        self.day
    }

    /// Returns the site.
    #[must_use]
    pub const fn site_id(&self) -> SiteId {
        self.site_id
    }

    /// Returns the entries in display order.
    #[must_use]
    pub fn entries(&self) -> &[TimeEntry] {
        &self.entries
    }

    /// Returns whether this working copy is waiting for an edit before it
    /// becomes a draft again.
    #[must_use]
    pub const fn is_detached(&self) -> bool {
        self.detached
    }

    /// Sum of hours over working entries.
    #[must_use]
    pub fn total_hours(&self) -> f64 {
        self.entries
            .iter()
            .filter(|e| e.is_working())
            .map(|e| e.hours().value())
            .sum()
    }

    /// Number of working entries.
    #[must_use]
    pub fn working_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_working()).count()
    }
}

/// The result of applying a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// The command edited state. `changed` is false for absorbed no-ops.
    Updated {
        /// Whether anything observable changed.
        changed: bool,
    },
    /// The command produced a fresh pending summary.
    Reviewed(Vec<SummaryItem>),
}
