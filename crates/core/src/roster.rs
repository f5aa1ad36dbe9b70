// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crewsheet_domain::{RosterMember, WorkerId};

/// The foreman's base crew list, independent of any day or site.
///
/// Supplies the default entries for contexts that have no draft yet.
/// Changes here never rewrite persisted drafts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterStore {
    members: Vec<RosterMember>,
}

impl RosterStore {
    /// Creates an empty roster.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            members: Vec::new(),
        }
    }

    /// Creates a roster from a list of members, keeping the first occurrence
    /// of each id.
    #[must_use]
    pub fn with_members(members: Vec<RosterMember>) -> Self {
        let mut roster: Self = Self::new();
        for member in members {
            roster.add(member);
        }
        roster
    }

    /// Adds a member. Adding an id that is already present is a no-op.
    ///
    /// Returns whether the member was added.
    pub fn add(&mut self, member: RosterMember) -> bool {
        if self.contains(member.id) {
            return false;
        }
        self.members.push(member);
        true
    }

    /// Removes a member from the roster.
    ///
    /// Returns whether the member was present.
    pub fn remove(&mut self, id: WorkerId) -> bool {
        let before: usize = self.members.len();
        self.members.retain(|m| m.id != id);
        self.members.len() != before
    }

    /// Changes a member's display name.
    ///
    /// Returns whether the member was present.
    pub fn rename(&mut self, id: WorkerId, full_name: &str) -> bool {
        match self.members.iter_mut().find(|m| m.id == id) {
            Some(member) => {
                member.full_name = full_name.to_string();
                true
            }
            None => false,
        }
    }

    /// Returns the members in insertion order.
    #[must_use]
    pub fn list(&self) -> &[RosterMember] {
        &self.members
    }

    /// Looks up a member by id.
    #[must_use]
    pub fn get(&self, id: WorkerId) -> Option<&RosterMember> {
        self.members.iter().find(|m| m.id == id)
    }

    /// Checks if a member with `id` exists.
    #[must_use]
    pub fn contains(&self, id: WorkerId) -> bool {
        self.get(id).is_some()
    }
}
