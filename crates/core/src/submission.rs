// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Data exchanged between the drafting session and whatever issues the
//! remote submit calls.

use crewsheet_domain::{ContextKey, Hours, SiteId, WorkerId};
use time::Date;

/// One worker's line in a submitted context.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubmissionLine {
    /// The worker.
    pub worker_id: WorkerId,
    /// Hours worked.
    pub hours: Hours,
}

/// A context ready to be sent: its decoded key and working lines.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingContext {
    /// The draft key.
    pub key: ContextKey,
    /// The calendar day.
    pub day: Date,
    /// The job site.
    pub site_id: SiteId,
    /// Working entries only. Never empty.
    pub lines: Vec<SubmissionLine>,
}

/// Per-context outcome of a batch submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionReport {
    /// Contexts the remote endpoint accepted.
    pub succeeded: Vec<ContextKey>,
    /// Contexts the remote endpoint rejected or could not be reached for.
    pub failed: Vec<ContextKey>,
}

impl SubmissionReport {
    /// Returns whether every call succeeded.
    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}

/// How local drafts are reconciled after a batch with failures.
///
/// A fully successful batch always clears every draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResetPolicy {
    /// Keep every draft if any call failed, including the ones the remote
    /// side already accepted. Retrying resubmits those.
    #[default]
    AllOrNothing,
    /// Drop the drafts that were accepted and keep only the failed ones.
    PerContext,
}

impl ResetPolicy {
    /// Returns the policy name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AllOrNothing => "all-or-nothing",
            Self::PerContext => "per-context",
        }
    }
}

impl std::fmt::Display for ResetPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
