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

mod aggregate;
mod apply;
mod command;
mod drafting;
mod error;
mod lifecycle;
mod repository;
mod roster;
mod state;
mod submission;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use aggregate::{SummaryItem, pending_contexts, summarize_drafts};
pub use apply::apply;
pub use command::Command;
pub use drafting::Drafting;
pub use error::CoreError;
pub use repository::DraftRepository;
pub use roster::RosterStore;
pub use state::{ActiveContext, Phase, Transition};
pub use submission::{PendingContext, ResetPolicy, SubmissionLine, SubmissionReport};
