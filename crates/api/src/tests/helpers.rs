// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use std::sync::Mutex;

use async_trait::async_trait;
use crewsheet::{Drafting, RosterStore};
use crewsheet_domain::{RosterMember, SiteId, WorkerId};
use time::Date;
use time::macros::date;

use crate::{Site, StaticSiteCatalog, SubmitEndpoint, SubmitError, SubmitRequest};

pub const SITE_ONE: SiteId = SiteId::new(1);
pub const SITE_TWO: SiteId = SiteId::new(2);
pub const UNKNOWN_SITE: SiteId = SiteId::new(99);

pub const fn test_day() -> Date {
    date!(2024 - 02 - 01)
}

pub fn create_test_catalog() -> StaticSiteCatalog {
    StaticSiteCatalog::new(vec![
        Site::new(SITE_ONE, String::from("North Yard")),
        Site::new(SITE_TWO, String::from("River Bridge")),
    ])
}

/// Session over roster `[{1, "A"}, {2, "B"}]` opened on 2024-02-01 at site 1.
pub fn create_test_session() -> Drafting {
    let roster: RosterStore = RosterStore::with_members(vec![
        RosterMember::new(WorkerId::new(1), String::from("A")),
        RosterMember::new(WorkerId::new(2), String::from("B")),
    ]);
    Drafting::with_roster(roster, test_day(), SITE_ONE)
}

/// An in-process endpoint that records every call and fails for chosen sites.
#[derive(Debug, Default)]
pub struct FakeEndpoint {
    failing_sites: Vec<SiteId>,
    calls: Mutex<Vec<SubmitRequest>>,
}

impl FakeEndpoint {
    pub fn accepting() -> Self {
        Self::default()
    }

    pub fn failing_for(sites: Vec<SiteId>) -> Self {
        Self {
            failing_sites: sites,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<SubmitRequest> {
        let mut calls: Vec<SubmitRequest> = self.calls.lock().unwrap().clone();
        calls.sort_by_key(|c| (c.day, c.site_id));
        calls
    }
}

#[async_trait]
impl SubmitEndpoint for FakeEndpoint {
    async fn submit(&self, request: &SubmitRequest) -> Result<(), SubmitError> {
        self.calls.lock().unwrap().push(request.clone());
        if self.failing_sites.contains(&request.site_id) {
            return Err(SubmitError::Rejected {
                status: 500,
                message: String::from("backend unavailable"),
            });
        }
        Ok(())
    }
}
