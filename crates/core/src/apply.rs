// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::drafting::Drafting;
use crate::error::CoreError;
use crate::state::Transition;
use tracing::debug;

/// Applies a command to the drafting session.
///
/// Transitions are atomic: they either succeed completely or fail without
/// side effects.
///
/// # Arguments
///
/// * `drafting` - The session to transition
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(Transition::Updated)` for editing and navigation commands
/// * `Ok(Transition::Reviewed)` for commands that produce a fresh summary
/// * `Err(CoreError)` if the command is not valid in the current phase or
///   violates a domain rule
///
/// # Errors
///
/// Returns an error if:
/// - The command is not available in the current phase
/// - A display name is blank
/// - A review command names a context with no pending draft
pub fn apply(drafting: &mut Drafting, command: Command) -> Result<Transition, CoreError> {
    let name: &'static str = command.name();

    let transition: Transition = match command {
        Command::SelectDay { day } => {
            drafting.select_day(day)?;
            Transition::Updated { changed: true }
        }
        Command::SelectSite { site_id } => {
            drafting.select_site(site_id)?;
            Transition::Updated { changed: true }
        }
        Command::SelectContext { day, site_id } => {
            drafting.select_context(day, site_id)?;
            Transition::Updated { changed: true }
        }
        Command::AdjustHours { worker_id, delta } => Transition::Updated {
            changed: drafting.adjust_hours(worker_id, delta)?,
        },
        Command::SetHours { worker_id, hours } => Transition::Updated {
            changed: drafting.set_hours(worker_id, hours)?,
        },
        Command::ToggleWorking { worker_id } => Transition::Updated {
            changed: drafting.toggle_working(worker_id)?,
        },
        Command::AddWorker { member } => Transition::Updated {
            changed: drafting.add_worker(&member)?,
        },
        Command::RemoveWorker { worker_id } => Transition::Updated {
            changed: drafting.remove_worker(worker_id)?,
        },
        Command::AddRosterMember { member } => Transition::Updated {
            changed: drafting.add_roster_member(member)?,
        },
        Command::RemoveRosterMember { worker_id } => Transition::Updated {
            changed: drafting.remove_roster_member(worker_id)?,
        },
        Command::RenameRosterMember {
            worker_id,
            full_name,
        } => Transition::Updated {
            changed: drafting.rename_roster_member(worker_id, &full_name)?,
        },
        Command::OpenReview => Transition::Reviewed(drafting.open_review()?),
        Command::EditPending { key } => {
            drafting.edit_pending(key)?;
            Transition::Updated { changed: true }
        }
        Command::FinishEditing => Transition::Reviewed(drafting.finish_editing()?),
        Command::DeletePending { key } => Transition::Reviewed(drafting.delete_pending(key)?),
        Command::CancelReview => {
            drafting.cancel_review()?;
            Transition::Updated { changed: true }
        }
    };

    debug!(command = name, phase = %drafting.phase(), "Applied command");
    Ok(transition)
}
