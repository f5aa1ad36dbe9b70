// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A worker's display name is empty or invalid.
    InvalidName(String),
    /// A worker identifier is not a positive integer.
    InvalidWorkerId(i64),
    /// A site identifier is not a positive integer.
    InvalidSiteId(i64),
    /// Failed to parse a calendar day from a string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// A string could not be decoded into a context key.
    MalformedContextKey {
        /// The rejected input.
        input: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidWorkerId(id) => {
                write!(f, "Invalid worker id {id}: must be a positive integer")
            }
            Self::InvalidSiteId(id) => {
                write!(f, "Invalid site id {id}: must be a positive integer")
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::MalformedContextKey { input, reason } => {
                write!(f, "Malformed context key '{input}': {reason}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
