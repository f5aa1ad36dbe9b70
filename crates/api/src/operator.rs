// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Operator identity and session start.

use crewsheet::Drafting;
use crewsheet_domain::{RosterMember, SiteId, WorkerId, validate_full_name};
use time::Date;
use tracing::info;

use crate::error::{ApiError, translate_domain_error};
use crate::sites::SiteCatalog;

/// The foreman operating the session, as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operator {
    /// The operator's own worker id.
    pub worker_id: WorkerId,
    /// The operator's display name.
    pub display_name: String,
}

impl Operator {
    /// Creates a new operator identity.
    #[must_use]
    pub const fn new(worker_id: WorkerId, display_name: String) -> Self {
        Self {
            worker_id,
            display_name,
        }
    }
}

/// Starts a drafting session for `operator`.
///
/// The roster is seeded with the operator and the first context opened is
/// (`day`, `site_id`).
///
/// # Errors
///
/// Returns an error if:
/// - The operator's display name is blank
/// - `site_id` is not in the catalog
pub fn start_session(
    operator: &Operator,
    day: Date,
    site_id: SiteId,
    catalog: &dyn SiteCatalog,
) -> Result<Drafting, ApiError> {
    let display_name: String =
        validate_full_name(&operator.display_name).map_err(translate_domain_error)?;
    if !catalog.contains(site_id) {
        return Err(ApiError::ResourceNotFound {
            resource_type: String::from("Site"),
            message: format!("Site {site_id} is not in the catalog"),
        });
    }

    let seed: RosterMember = RosterMember::new(operator.worker_id, display_name);
    info!(operator = %operator.worker_id, %day, site = %site_id, "Drafting session started");
    Ok(Drafting::new(seed, day, site_id))
}
