// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crewsheet::CoreError;
use crewsheet_domain::{ContextKey, DomainError};

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The operation is not available in the session's current phase.
    PhaseConflict {
        /// The phase the session is in.
        phase: String,
        /// A human-readable description of the rejected operation.
        message: String,
    },
    /// At least one context of a batch submission was not accepted.
    SubmissionFailed {
        /// Contexts the remote endpoint did not accept.
        failed: Vec<ContextKey>,
        /// Contexts the remote endpoint accepted.
        succeeded: Vec<ContextKey>,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

fn join_keys(keys: &[ContextKey]) -> String {
    keys.iter()
        .map(ToString::to_string)
        .collect::<Vec<String>>()
        .join(", ")
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::PhaseConflict { phase, message } => {
                write!(f, "Not allowed in {phase} phase: {message}")
            }
            Self::SubmissionFailed { failed, succeeded } => {
                write!(
                    f,
                    "Submission failed for {} context(s) [{}]; {} accepted [{}]",
                    failed.len(),
                    join_keys(failed),
                    succeeded.len(),
                    join_keys(succeeded)
                )
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidName(msg) => ApiError::InvalidInput {
            field: String::from("full_name"),
            message: msg,
        },
        DomainError::InvalidWorkerId(id) => ApiError::InvalidInput {
            field: String::from("worker_id"),
            message: format!("Worker id must be positive, got {id}"),
        },
        DomainError::InvalidSiteId(id) => ApiError::InvalidInput {
            field: String::from("site_id"),
            message: format!("Site id must be positive, got {id}"),
        },
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("day"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
        DomainError::MalformedContextKey { input, reason } => ApiError::InvalidInput {
            field: String::from("key"),
            message: format!("Malformed context key '{input}': {reason}"),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::InvalidPhase { phase, action } => ApiError::PhaseConflict {
            phase: phase.to_string(),
            message: format!("Cannot {action}"),
        },
        CoreError::UnknownContext(key) => ApiError::ResourceNotFound {
            resource_type: String::from("Pending context"),
            message: format!("No pending draft for context {key}"),
        },
        CoreError::NothingToSubmit => ApiError::DomainRuleViolation {
            rule: String::from("nothing_to_submit"),
            message: String::from("No pending context has a working entry"),
        },
    }
}
