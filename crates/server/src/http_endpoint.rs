// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `SubmitEndpoint` backed by the remote REST backend.

use async_trait::async_trait;
use crewsheet_api::{SubmitEndpoint, SubmitError, SubmitRequest};
use reqwest::{Client, StatusCode};
use tracing::debug;

/// Posts each context to `{base}/timesheets` as JSON.
///
/// Any non-2xx answer is a failure.
#[derive(Debug, Clone)]
pub struct HttpSubmitEndpoint {
    client: Client,
    url: String,
}

impl HttpSubmitEndpoint {
    /// Creates an endpoint for the backend at `base_url`.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            url: format!("{}/timesheets", base_url.trim_end_matches('/')),
        }
    }

    /// Returns the URL contexts are posted to.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl SubmitEndpoint for HttpSubmitEndpoint {
    async fn submit(&self, request: &SubmitRequest) -> Result<(), SubmitError> {
        let response: reqwest::Response = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        let status: StatusCode = response.status();
        if status.is_success() {
            debug!(site = %request.site_id, %status, "Backend accepted timesheet");
            return Ok(());
        }

        let body: String = response.text().await.unwrap_or_default();
        let message: String = if body.trim().is_empty() {
            status.canonical_reason().unwrap_or("no reason").to_string()
        } else {
            body
        };
        Err(SubmitError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}
