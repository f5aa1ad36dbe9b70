// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The remote timesheet backend, seen from the drafting engine.

use async_trait::async_trait;
use crewsheet::PendingContext;
use crewsheet_domain::{SiteId, WorkerId, calendar_day};
use serde::Serialize;
use thiserror::Error;
use time::Date;

/// One worker's hours in a submit call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitLine {
    /// The worker.
    pub worker_id: WorkerId,
    /// Hours worked.
    pub hours: f64,
}

/// The payload of one submit call: a single (day, site) context.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmitRequest {
    /// The calendar day, sent as `YYYY-MM-DD`.
    #[serde(rename = "date", with = "calendar_day")]
    pub day: Date,
    /// The job site.
    #[serde(rename = "objectId")]
    pub site_id: SiteId,
    /// Working entries only.
    pub entries: Vec<SubmitLine>,
}

impl From<&PendingContext> for SubmitRequest {
    fn from(pending: &PendingContext) -> Self {
        Self {
            day: pending.day,
            site_id: pending.site_id,
            entries: pending
                .lines
                .iter()
                .map(|line| SubmitLine {
                    worker_id: line.worker_id,
                    hours: line.hours.value(),
                })
                .collect(),
        }
    }
}

/// Failure of a single submit call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The backend could not be reached or did not answer.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("Rejected with status {status}: {message}")]
    Rejected {
        /// The HTTP status code returned by the backend.
        status: u16,
        /// The response body, or the status reason when the body is empty.
        message: String,
    },
}

/// A remote endpoint accepting one timesheet context per call.
#[async_trait]
pub trait SubmitEndpoint: Send + Sync {
    /// Submits one context.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend did not accept the context.
    async fn submit(&self, request: &SubmitRequest) -> Result<(), SubmitError>;
}
