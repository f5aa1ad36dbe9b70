// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Addressing for drafts.
//!
//! A draft is addressed by the calendar day and job site it records. The
//! key keeps only the calendar date, so two timestamps on the same day map to
//! the same key regardless of their time-of-day component.

use crate::error::DomainError;
use crate::types::{SiteId, parse_site_id};
use crate::validation::parse_day;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

/// Wire format for calendar days (`YYYY-MM-DD`).
pub const DAY_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

const SEPARATOR: char = '@';

/// Identifies one (day, site) drafting context.
///
/// Keys order by day first, then site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContextKey {
    day: Date,
    site_id: SiteId,
}

impl ContextKey {
    /// Encodes a (day, site) pair into a key.
    #[must_use]
    pub const fn encode(day: Date, site_id: SiteId) -> Self {
        Self { day, site_id }
    }

    /// Encodes a timestamp and site, discarding the time of day.
    #[must_use]
    pub const fn from_datetime(at: OffsetDateTime, site_id: SiteId) -> Self {
        Self::encode(at.date(), site_id)
    }

    /// Decodes the key back into its (day, site) pair.
    #[must_use]
    pub const fn decode(self) -> (Date, SiteId) {
        (self.day, self.site_id)
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
}

impl std::fmt::Display for ContextKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let day: String = self.day.format(DAY_FORMAT).map_err(|_| std::fmt::Error)?;
        write!(f, "{day}{SEPARATOR}{}", self.site_id)
    }
}

impl FromStr for ContextKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = |reason: &str| DomainError::MalformedContextKey {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let (day_part, site_part) = s
            .split_once(SEPARATOR)
            .ok_or_else(|| malformed("missing '@' separator"))?;

        let day: Date = parse_day(day_part).map_err(|e| malformed(&e.to_string()))?;
        let site_value: i64 = site_part
            .parse()
            .map_err(|_| malformed("site id is not an integer"))?;

        let site_id: SiteId = parse_site_id(site_value).map_err(|e| malformed(&e.to_string()))?;

        Ok(Self::encode(day, site_id))
    }
}

impl TryFrom<String> for ContextKey {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ContextKey> for String {
    fn from(key: ContextKey) -> Self {
        key.to_string()
    }
}
