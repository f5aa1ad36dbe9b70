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
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod context_key;
mod error;
mod types;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types
pub use context_key::{ContextKey, DAY_FORMAT};
pub use error::DomainError;
pub use types::{
    Attendance, Hours, MAX_HOURS, MIN_HOURS, RosterMember, STANDARD_SHIFT_HOURS, SiteId,
    TimeEntry, WorkerId, parse_site_id, parse_worker_id,
};
pub use validation::{calendar_day, parse_day, validate_full_name};
