// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Batch submission of every pending context.

use crewsheet::{CoreError, Drafting, PendingContext, ResetPolicy, SubmissionReport};
use crewsheet_domain::ContextKey;
use futures::future::join_all;
use tracing::{info, warn};

use crate::endpoint::{SubmitEndpoint, SubmitError, SubmitRequest};
use crate::error::{ApiError, translate_core_error};
use crate::request_response::ConfirmSubmissionResponse;

async fn submit_one(
    endpoint: &dyn SubmitEndpoint,
    pending: &PendingContext,
) -> (ContextKey, Result<(), SubmitError>) {
    let request: SubmitRequest = SubmitRequest::from(pending);
    (pending.key, endpoint.submit(&request).await)
}

/// Confirms the review and submits every pending context.
///
/// The active context is persisted first. One call per context is issued
/// concurrently. When every call succeeds all drafts are cleared and the
/// active context is re-defaulted from the roster; otherwise `policy`
/// decides which drafts stay. The session returns to `Flow` either way.
///
/// When no draft has a working entry nothing is sent and the session stays
/// in `Review`.
///
/// # Errors
///
/// Returns an error if:
/// - The session is not in `Review`
/// - Any call fails (`ApiError::SubmissionFailed`)
pub async fn confirm_submission(
    drafting: &mut Drafting,
    endpoint: &dyn SubmitEndpoint,
    policy: ResetPolicy,
) -> Result<ConfirmSubmissionResponse, ApiError> {
    let batch: Vec<PendingContext> = match drafting.begin_submission() {
        Ok(batch) => batch,
        Err(CoreError::NothingToSubmit) => {
            info!("Nothing to submit");
            return Ok(ConfirmSubmissionResponse {
                submitted: Vec::new(),
                message: String::from("Nothing to submit"),
            });
        }
        Err(e) => return Err(translate_core_error(e)),
    };

    info!(contexts = batch.len(), %policy, "Submitting pending contexts");
    let outcomes: Vec<(ContextKey, Result<(), SubmitError>)> =
        join_all(batch.iter().map(|pending| submit_one(endpoint, pending))).await;

    let mut report: SubmissionReport = SubmissionReport::default();
    for (key, outcome) in outcomes {
        match outcome {
            Ok(()) => report.succeeded.push(key),
            Err(e) => {
                warn!(context = %key, error = %e, "Context submission failed");
                report.failed.push(key);
            }
        }
    }

    drafting
        .complete_submission(&report, policy)
        .map_err(translate_core_error)?;

    if report.all_succeeded() {
        info!(contexts = report.succeeded.len(), "Submission complete");
        Ok(ConfirmSubmissionResponse {
            submitted: report.succeeded.iter().map(ToString::to_string).collect(),
            message: format!("Submitted {} context(s)", report.succeeded.len()),
        })
    } else {
        warn!(
            failed = report.failed.len(),
            succeeded = report.succeeded.len(),
            "Submission incomplete"
        );
        Err(ApiError::SubmissionFailed {
            failed: report.failed,
            succeeded: report.succeeded,
        })
    }
}
