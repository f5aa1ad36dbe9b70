// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crewsheet_domain::SiteId;

/// A job site the operator may record time against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Site {
    /// The site identifier.
    pub id: SiteId,
    /// The display name.
    pub name: String,
}

impl Site {
    /// Creates a new site.
    #[must_use]
    pub const fn new(id: SiteId, name: String) -> Self {
        Self { id, name }
    }
}

/// The set of valid job sites.
pub trait SiteCatalog: Send + Sync {
    /// Returns every site in display order.
    fn sites(&self) -> Vec<Site>;

    /// Looks up a site by id.
    fn find(&self, id: SiteId) -> Option<Site> {
        self.sites().into_iter().find(|s| s.id == id)
    }

    /// Returns whether `id` names a known site.
    fn contains(&self, id: SiteId) -> bool {
        self.find(id).is_some()
    }
}

/// A fixed site catalog, typically built from configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticSiteCatalog {
    sites: Vec<Site>,
}

impl StaticSiteCatalog {
    /// Creates a catalog. Later duplicates of an id are dropped.
    #[must_use]
    pub fn new(sites: Vec<Site>) -> Self {
        let mut unique: Vec<Site> = Vec::with_capacity(sites.len());
        for site in sites {
            if !unique.iter().any(|s| s.id == site.id) {
                unique.push(site);
            }
        }
        Self { sites: unique }
    }

    /// Returns the first configured site, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Site> {
        self.sites.first()
    }
}

impl SiteCatalog for StaticSiteCatalog {
    fn sites(&self) -> Vec<Site> {
        self.sites.clone()
    }

    fn find(&self, id: SiteId) -> Option<Site> {
        self.sites.iter().find(|s| s.id == id).cloned()
    }
}
