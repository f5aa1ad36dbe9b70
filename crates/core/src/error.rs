// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::state::Phase;
use crewsheet_domain::{ContextKey, DomainError};

/// Errors that can occur during drafting transitions.
///
/// A transition that returns an error leaves the drafting state untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The action is not available in the current phase.
    InvalidPhase {
        /// The phase the session was in.
        phase: Phase,
        /// The attempted action.
        action: &'static str,
    },
    /// No pending draft exists for the context.
    UnknownContext(ContextKey),
    /// Confirmation was requested with no working entries in any draft.
    NothingToSubmit,
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::InvalidPhase { phase, action } => {
                write!(f, "Cannot {action} while in {phase} phase")
            }
            Self::UnknownContext(key) => write!(f, "No pending draft for context {key}"),
            Self::NothingToSubmit => write!(f, "Nothing to submit"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
