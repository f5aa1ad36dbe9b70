// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::aggregate::{SummaryItem, pending_contexts, summarize_drafts};
use crate::error::CoreError;
use crate::repository::DraftRepository;
use crate::roster::RosterStore;
use crate::state::{ActiveContext, Phase};
use crate::submission::{PendingContext, ResetPolicy, SubmissionReport};
use crewsheet_domain::{ContextKey, RosterMember, SiteId, WorkerId, validate_full_name};
use time::Date;
use tracing::debug;

/// A foreman's timesheet drafting session.
///
/// Owns the roster, every draft, the context open for editing and the
/// review phase. All operations run synchronously on the caller's thread.
/// Operations that return an error have not modified the session.
#[derive(Debug, Clone, PartialEq)]
pub struct Drafting {
    roster: RosterStore,
    drafts: DraftRepository,
    active: ActiveContext,
    phase: Phase,
}

impl Drafting {
    /// Starts a session for an operator, seeding the roster with them.
    ///
    /// # Arguments
    ///
    /// * `operator` - The foreman's own identity
    /// * `day` - The day to open first
    /// * `site_id` - The site to open first
    #[must_use]
    pub fn new(operator: RosterMember, day: Date, site_id: SiteId) -> Self {
        Self::with_roster(RosterStore::with_members(vec![operator]), day, site_id)
    }

    /// Starts a session over an existing roster.
    #[must_use]
    pub fn with_roster(roster: RosterStore, day: Date, site_id: SiteId) -> Self {
        let active: ActiveContext = ActiveContext::defaulted(day, site_id, &roster);
        Self {
            roster,
            drafts: DraftRepository::new(),
            active,
            phase: Phase::Flow,
        }
    }

    /// Returns the crew roster.
    #[must_use]
    pub const fn roster(&self) -> &RosterStore {
        &self.roster
    }

    /// Returns the stored drafts.
    #[must_use]
    pub const fn drafts(&self) -> &DraftRepository {
        &self.drafts
    }

    /// Returns the context open for editing.
    #[must_use]
    pub const fn active(&self) -> &ActiveContext {
        &self.active
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    fn require(&self, allowed: bool, action: &'static str) -> Result<(), CoreError> {
        if allowed {
            Ok(())
        } else {
            Err(CoreError::InvalidPhase {
                phase: self.phase,
                action,
            })
        }
    }

    fn require_editable(&self, action: &'static str) -> Result<(), CoreError> {
        self.require(self.phase.allows_entry_edits(), action)
    }

    fn persist_active(&mut self) {
        if self.active.is_detached() {
            debug!(context = %self.active.key(), "Skipping persist of detached context");
            return;
        }
        let key: ContextKey = self.active.key();
        self.drafts.persist(key, self.active.entries().to_vec());
        debug!(context = %key, entries = self.active.entries().len(), "Persisted draft");
    }

    fn load_or_default(&self, key: ContextKey) -> ActiveContext {
        let (day, site_id): (Date, SiteId) = key.decode();
        match self.drafts.load(&key) {
            Some(entries) => ActiveContext::new(day, site_id, entries.to_vec()),
            None => ActiveContext::defaulted(day, site_id, &self.roster),
        }
    }

    fn detached_default(&self, key: ContextKey) -> ActiveContext {
        let mut active: ActiveContext = self.load_or_default(key);
        active.detached = true;
        active
    }

    fn switch_to(&mut self, key: ContextKey) {
        self.persist_active();
        self.active = self.load_or_default(key);
        debug!(context = %key, entries = self.active.entries().len(), "Switched context");
    }

    // ---- context switching ----------------------------------------------

    /// Opens another day at the current site.
    ///
    /// # Errors
    ///
    /// Returns an error outside the `Flow` phase.
    pub fn select_day(&mut self, day: Date) -> Result<(), CoreError> {
        self.require(self.phase == Phase::Flow, "select a day")?;
        self.switch_to(ContextKey::encode(day, self.active.site_id()));
        Ok(())
    }

    /// Opens another site on the current day.
    ///
    /// # Errors
    ///
    /// Returns an error outside the `Flow` phase.
    pub fn select_site(&mut self, site_id: SiteId) -> Result<(), CoreError> {
        self.require(self.phase == Phase::Flow, "select a site")?;
        self.switch_to(ContextKey::encode(self.active.day(), site_id));
        Ok(())
    }

    /// Opens an arbitrary (day, site) context in one step.
    ///
    /// # Errors
    ///
    /// Returns an error outside the `Flow` phase.
    pub fn select_context(&mut self, day: Date, site_id: SiteId) -> Result<(), CoreError> {
        self.require(self.phase == Phase::Flow, "select a context")?;
        self.switch_to(ContextKey::encode(day, site_id));
        Ok(())
    }

    // ---- entry lifecycle --------------------------------------------------

    /// Shifts a worker's hours in the active context.
    ///
    /// # Errors
    ///
    /// Returns an error when entries are not editable in the current phase.
    pub fn adjust_hours(&mut self, worker_id: WorkerId, delta: f64) -> Result<bool, CoreError> {
        self.require_editable("adjust hours")?;
        Ok(self.active.adjust_hours(worker_id, delta))
    }

    /// Sets a worker's hours in the active context.
    ///
    /// # Errors
    ///
    /// Returns an error when entries are not editable in the current phase.
    pub fn set_hours(&mut self, worker_id: WorkerId, value: f64) -> Result<bool, CoreError> {
        self.require_editable("set hours")?;
        Ok(self.active.set_hours(worker_id, value))
    }

    /// Flips a worker's presence in the active context.
    ///
    /// # Errors
    ///
    /// Returns an error when entries are not editable in the current phase.
    pub fn toggle_working(&mut self, worker_id: WorkerId) -> Result<bool, CoreError> {
        self.require_editable("toggle attendance")?;
        Ok(self.active.toggle_working(worker_id))
    }

    /// Adds a worker to the active context only.
    ///
    /// # Errors
    ///
    /// Returns an error when entries are not editable in the current phase.
    pub fn add_worker(&mut self, member: &RosterMember) -> Result<bool, CoreError> {
        self.require_editable("add a worker")?;
        Ok(self.active.add_worker(member))
    }

    /// Removes a worker from the active context only.
    ///
    /// # Errors
    ///
    /// Returns an error when entries are not editable in the current phase.
    pub fn remove_worker(&mut self, worker_id: WorkerId) -> Result<bool, CoreError> {
        self.require_editable("remove a worker")?;
        Ok(self.active.remove_worker(worker_id))
    }

    // ---- roster -----------------------------------------------------------

    /// Adds a crew member to the roster and to the active context.
    ///
    /// The roster ignores ids it already knows, but the worker is still
    /// added to the active context if missing there.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank or entries are not editable.
    pub fn add_roster_member(&mut self, member: RosterMember) -> Result<bool, CoreError> {
        self.require_editable("add a roster member")?;
        let full_name: String = validate_full_name(&member.full_name)?;
        let member: RosterMember = RosterMember::new(member.id, full_name);

        let in_context: bool = self.active.add_worker(&member);
        let in_roster: bool = self.roster.add(member);
        Ok(in_roster || in_context)
    }

    /// Removes a crew member from the roster. Drafts are left alone.
    ///
    /// # Errors
    ///
    /// Returns an error when entries are not editable in the current phase.
    pub fn remove_roster_member(&mut self, worker_id: WorkerId) -> Result<bool, CoreError> {
        self.require_editable("remove a roster member")?;
        Ok(self.roster.remove(worker_id))
    }

    /// Renames a crew member in the roster and in the active context.
    ///
    /// Persisted drafts keep the name they were recorded with.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank or entries are not editable.
    pub fn rename_roster_member(
        &mut self,
        worker_id: WorkerId,
        full_name: &str,
    ) -> Result<bool, CoreError> {
        self.require_editable("rename a roster member")?;
        let full_name: String = validate_full_name(full_name)?;

        let in_roster: bool = self.roster.rename(worker_id, &full_name);
        let in_context: bool = self.active.rename_worker(worker_id, &full_name);
        Ok(in_roster || in_context)
    }

    // ---- aggregation and review ---------------------------------------------

    /// Persists the active context and summarizes every pending draft.
    pub fn summarize(&mut self) -> Vec<SummaryItem> {
        self.persist_active();
        summarize_drafts(&self.drafts)
    }

    /// Enters (or refreshes) the review phase.
    ///
    /// An empty summary means there is nothing to send.
    ///
    /// # Errors
    ///
    /// Returns an error unless the session is in `Flow` or `Review`.
    pub fn open_review(&mut self) -> Result<Vec<SummaryItem>, CoreError> {
        self.require(
            matches!(self.phase, Phase::Flow | Phase::Review),
            "open the review",
        )?;
        self.phase = Phase::Review;
        Ok(self.summarize())
    }

    /// Opens one pending context for editing from the review.
    ///
    /// # Errors
    ///
    /// Returns an error outside `Review` or if no draft exists for `key`.
    pub fn edit_pending(&mut self, key: ContextKey) -> Result<(), CoreError> {
        self.require(self.phase == Phase::Review, "edit a pending context")?;
        if !self.drafts.contains(&key) {
            return Err(CoreError::UnknownContext(key));
        }
        self.switch_to(key);
        self.phase = Phase::EditOne { key };
        Ok(())
    }

    /// Leaves single-context editing and returns to the review.
    ///
    /// # Errors
    ///
    /// Returns an error outside `EditOne`.
    pub fn finish_editing(&mut self) -> Result<Vec<SummaryItem>, CoreError> {
        self.require(
            matches!(self.phase, Phase::EditOne { .. }),
            "finish editing",
        )?;
        self.phase = Phase::Review;
        Ok(self.summarize())
    }

    /// Discards a pending draft from the review.
    ///
    /// If the draft backed the active context, the active context is reset
    /// to roster defaults and is not persisted again until edited.
    ///
    /// # Errors
    ///
    /// Returns an error outside `Review` or if no draft exists for `key`.
    pub fn delete_pending(&mut self, key: ContextKey) -> Result<Vec<SummaryItem>, CoreError> {
        self.require(self.phase == Phase::Review, "delete a pending context")?;
        if !self.drafts.delete(&key) {
            return Err(CoreError::UnknownContext(key));
        }
        debug!(context = %key, "Deleted pending draft");

        if self.active.key() == key {
            self.active = self.detached_default(key);
        }
        Ok(self.summarize())
    }

    /// Leaves the review and returns to normal editing.
    ///
    /// # Errors
    ///
    /// Returns an error outside `Review`.
    pub fn cancel_review(&mut self) -> Result<(), CoreError> {
        self.require(self.phase == Phase::Review, "cancel the review")?;
        self.phase = Phase::Flow;
        Ok(())
    }

    // ---- submission -------------------------------------------------------

    /// Confirms the review and hands out the batch to submit.
    ///
    /// The active context is persisted first. Drafts with no working
    /// entries are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error outside `Review`, or `CoreError::NothingToSubmit`
    /// when no draft has a working entry (the session stays in `Review`).
    pub fn begin_submission(&mut self) -> Result<Vec<PendingContext>, CoreError> {
        self.require(self.phase == Phase::Review, "confirm submission")?;
        self.persist_active();

        let batch: Vec<PendingContext> = pending_contexts(&self.drafts);
        if batch.is_empty() {
            return Err(CoreError::NothingToSubmit);
        }
        self.phase = Phase::Submitting;
        debug!(contexts = batch.len(), "Submission started");
        Ok(batch)
    }

    /// Reconciles local drafts with the outcome of a batch and returns to
    /// `Flow`.
    ///
    /// A fully successful batch clears every draft and re-defaults the
    /// active context from the roster. Otherwise `policy` decides.
    ///
    /// # Errors
    ///
    /// Returns an error outside `Submitting`.
    pub fn complete_submission(
        &mut self,
        report: &SubmissionReport,
        policy: ResetPolicy,
    ) -> Result<(), CoreError> {
        self.require(self.phase == Phase::Submitting, "complete submission")?;
        self.phase = Phase::Flow;

        if report.all_succeeded() {
            self.reset();
            return Ok(());
        }

        match policy {
            ResetPolicy::AllOrNothing => {
                debug!(
                    failed = report.failed.len(),
                    "Batch had failures; keeping every draft"
                );
            }
            ResetPolicy::PerContext => {
                for key in &report.succeeded {
                    self.drafts.delete(key);
                }
                let active_key: ContextKey = self.active.key();
                if report.succeeded.contains(&active_key) {
                    self.active = self.load_or_default(active_key);
                }
                debug!(
                    cleared = report.succeeded.len(),
                    kept = report.failed.len(),
                    "Batch had failures; cleared accepted drafts"
                );
            }
        }
        Ok(())
    }

    /// Drops every draft and re-defaults the active context.
    ///
    /// The fresh context is an ordinary working copy, the same as at session
    /// start, and is persisted by the next switch or summary.
    fn reset(&mut self) {
        self.drafts.clear();
        self.active =
            ActiveContext::defaulted(self.active.day(), self.active.site_id(), &self.roster);
        debug!("Drafts reset");
    }
}
