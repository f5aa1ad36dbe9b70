// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// Lower bound for hours recorded against a single day.
pub const MIN_HOURS: f64 = 0.0;

/// Upper bound for hours recorded against a single day.
pub const MAX_HOURS: f64 = 24.0;

/// Length of a regular shift. Anything above this is overtime.
pub const STANDARD_SHIFT_HOURS: f64 = 8.0;

/// Identifies a crew member.
///
/// Worker identifiers come from the identity provider and are opaque
/// positive integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkerId(i64);

impl WorkerId {
    /// Creates a new `WorkerId`.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for WorkerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifies a job site (an "object" in the site catalog).
///
/// The drafting engine treats site identifiers as opaque foreign keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteId(i64);

impl SiteId {
    /// Creates a new `SiteId`.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for SiteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A number of hours worked on a single day.
///
/// The only way to build a value is through [`Hours::new`], which clamps
/// into `[MIN_HOURS, MAX_HOURS]`. Non-finite input clamps to zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Hours(f64);

impl Hours {
    /// Creates a clamped `Hours` value.
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Self(value.clamp(MIN_HOURS, MAX_HOURS))
        } else {
            Self(MIN_HOURS)
        }
    }

    /// The default value for a freshly loaded entry.
    #[must_use]
    pub const fn standard_shift() -> Self {
        Self(STANDARD_SHIFT_HOURS)
    }

    /// Returns the raw number of hours.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Returns whether this amount counts as overtime.
    #[must_use]
    pub fn is_overtime(self) -> bool {
        self.0 > STANDARD_SHIFT_HOURS
    }

    /// Returns these hours shifted by `delta`, clamped.
    #[must_use]
    pub fn adjusted(self, delta: f64) -> Self {
        Self::new(self.0 + delta)
    }
}

impl From<f64> for Hours {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Hours> for f64 {
    fn from(hours: Hours) -> Self {
        hours.0
    }
}

/// Whether a worker was present on a given day.
///
/// `NotWorking` keeps the last recorded hours so that toggling the worker
/// back restores them instead of resetting to a default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Attendance {
    /// The worker was on site for the given hours.
    Working {
        /// Hours worked.
        hours: Hours,
    },
    /// The worker did not work this day.
    NotWorking {
        /// Hours recorded before the worker was marked absent.
        hours: Hours,
    },
}

impl Attendance {
    /// Returns the recorded hours regardless of presence.
    #[must_use]
    pub const fn hours(&self) -> Hours {
        match self {
            Self::Working { hours } | Self::NotWorking { hours } => *hours,
        }
    }

    /// Returns whether this attendance counts towards submission.
    #[must_use]
    pub const fn is_working(&self) -> bool {
        matches!(self, Self::Working { .. })
    }

    /// Returns the opposite presence with the same hours.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Working { hours } => Self::NotWorking { hours },
            Self::NotWorking { hours } => Self::Working { hours },
        }
    }
}

/// A member of the foreman's crew (the "brigade").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterMember {
    /// The worker's identifier. Identity of the member.
    pub id: WorkerId,
    /// The worker's display name.
    pub full_name: String,
}

impl RosterMember {
    /// Creates a new roster member.
    ///
    /// # Arguments
    ///
    /// * `id` - The worker identifier
    /// * `full_name` - The worker's display name
    #[must_use]
    pub const fn new(id: WorkerId, full_name: String) -> Self {
        Self { id, full_name }
    }
}

/// Attendance and hours for one worker within one (day, site) context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    /// The worker this entry belongs to.
    pub worker_id: WorkerId,
    /// The worker's display name at the time the entry was last touched.
    pub full_name: String,
    /// Presence and hours.
    attendance: Attendance,
}

impl TimeEntry {
    /// Creates the default entry for a roster member: a standard shift, working.
    #[must_use]
    pub fn from_member(member: &RosterMember) -> Self {
        Self {
            worker_id: member.id,
            full_name: member.full_name.clone(),
            attendance: Attendance::Working {
                hours: Hours::standard_shift(),
            },
        }
    }

    /// Creates an entry with explicit attendance.
    #[must_use]
    pub const fn new(worker_id: WorkerId, full_name: String, attendance: Attendance) -> Self {
        Self {
            worker_id,
            full_name,
            attendance,
        }
    }

    /// Returns the presence state.
    #[must_use]
    pub const fn attendance(&self) -> Attendance {
        self.attendance
    }

    /// Returns the recorded hours.
    #[must_use]
    pub const fn hours(&self) -> Hours {
        self.attendance.hours()
    }

    /// Returns whether the recorded hours exceed a standard shift.
    #[must_use]
    pub fn is_overtime(&self) -> bool {
        self.hours().is_overtime()
    }

    /// Returns whether the worker is marked as present.
    #[must_use]
    pub const fn is_working(&self) -> bool {
        self.attendance.is_working()
    }

    /// Sets the hours. Recording hours always marks the worker present.
    pub const fn set_hours(&mut self, hours: Hours) {
        self.attendance = Attendance::Working { hours };
    }

    /// Shifts the hours by `delta`. Marks the worker present.
    pub fn adjust_hours(&mut self, delta: f64) {
        self.set_hours(self.hours().adjusted(delta));
    }

    /// Flips presence, keeping the hours.
    pub const fn toggle_working(&mut self) {
        self.attendance = self.attendance.toggled();
    }
}

/// Parses a positive worker identifier.
///
/// # Errors
///
/// Returns `DomainError::InvalidWorkerId` for zero or negative values.
pub const fn parse_worker_id(value: i64) -> Result<WorkerId, DomainError> {
    if value <= 0 {
        return Err(DomainError::InvalidWorkerId(value));
    }
    Ok(WorkerId::new(value))
}

/// Parses a positive site identifier.
///
/// # Errors
///
/// Returns `DomainError::InvalidSiteId` for zero or negative values.
pub const fn parse_site_id(value: i64) -> Result<SiteId, DomainError> {
    if value <= 0 {
        return Err(DomainError::InvalidSiteId(value));
    }
    Ok(SiteId::new(value))
}
