// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crewsheet_domain::{ContextKey, RosterMember, SiteId, WorkerId};
use time::Date;

/// A command represents operator intent as data only.
///
/// Every synchronous entry point of the drafting session has a command.
/// Submission is not a command: it needs the remote endpoint and is driven
/// through `Drafting::begin_submission` / `Drafting::complete_submission`.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Open another day at the current site.
    SelectDay {
        /// The day to open.
        day: Date,
    },
    /// Open another site on the current day.
    SelectSite {
        /// The site to open.
        site_id: SiteId,
    },
    /// Open a (day, site) context in one step.
    SelectContext {
        /// The day to open.
        day: Date,
        /// The site to open.
        site_id: SiteId,
    },
    /// Shift a worker's hours.
    AdjustHours {
        /// The worker.
        worker_id: WorkerId,
        /// Signed change in hours.
        delta: f64,
    },
    /// Set a worker's hours.
    SetHours {
        /// The worker.
        worker_id: WorkerId,
        /// The new value, clamped.
        hours: f64,
    },
    /// Flip a worker's presence.
    ToggleWorking {
        /// The worker.
        worker_id: WorkerId,
    },
    /// Add a worker to the active context only.
    AddWorker {
        /// The worker to add.
        member: RosterMember,
    },
    /// Remove a worker from the active context only.
    RemoveWorker {
        /// The worker.
        worker_id: WorkerId,
    },
    /// Add a crew member to the roster (and the active context).
    AddRosterMember {
        /// The new member.
        member: RosterMember,
    },
    /// Remove a crew member from the roster.
    RemoveRosterMember {
        /// The worker.
        worker_id: WorkerId,
    },
    /// Rename a crew member.
    RenameRosterMember {
        /// The worker.
        worker_id: WorkerId,
        /// The new display name.
        full_name: String,
    },
    /// Enter or refresh the review.
    OpenReview,
    /// Edit one pending context from the review.
    EditPending {
        /// The context to edit.
        key: ContextKey,
    },
    /// Return from single-context editing to the review.
    FinishEditing,
    /// Discard one pending context from the review.
    DeletePending {
        /// The context to discard.
        key: ContextKey,
    },
    /// Leave the review.
    CancelReview,
}

impl Command {
    /// Returns the command name, used for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SelectDay { .. } => "SelectDay",
            Self::SelectSite { .. } => "SelectSite",
            Self::SelectContext { .. } => "SelectContext",
            Self::AdjustHours { .. } => "AdjustHours",
            Self::SetHours { .. } => "SetHours",
            Self::ToggleWorking { .. } => "ToggleWorking",
            Self::AddWorker { .. } => "AddWorker",
            Self::RemoveWorker { .. } => "RemoveWorker",
            Self::AddRosterMember { .. } => "AddRosterMember",
            Self::RemoveRosterMember { .. } => "RemoveRosterMember",
            Self::RenameRosterMember { .. } => "RenameRosterMember",
            Self::OpenReview => "OpenReview",
            Self::EditPending { .. } => "EditPending",
            Self::FinishEditing => "FinishEditing",
            Self::DeletePending { .. } => "DeletePending",
            Self::CancelReview => "CancelReview",
        }
    }
}
