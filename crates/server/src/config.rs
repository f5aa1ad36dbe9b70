// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Command-line configuration.

use clap::{Parser, ValueEnum};
use crewsheet::ResetPolicy;
use crewsheet_api::{Operator, Site, SiteCatalog, StaticSiteCatalog};
use crewsheet_domain::{
    ContextKey, DomainError, SiteId, WorkerId, parse_day, parse_site_id, parse_worker_id,
    validate_full_name,
};
use thiserror::Error;
use time::{Date, OffsetDateTime};

/// Crewsheet Server - HTTP shell for the crew timesheet drafting engine
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    pub port: u16,

    /// Base URL of the remote timesheet backend
    #[arg(long, env = "CREWSHEET_SUBMIT_URL")]
    pub submit_url: String,

    /// The foreman's own worker id
    #[arg(long, env = "CREWSHEET_OPERATOR_ID")]
    pub operator_id: i64,

    /// The foreman's display name
    #[arg(long, env = "CREWSHEET_OPERATOR_NAME")]
    pub operator_name: String,

    /// A job site as `ID=NAME`. Repeat for every site.
    #[arg(long = "site", value_parser = parse_site_arg, required = true)]
    pub sites: Vec<Site>,

    /// What to keep when a batch submission partially fails
    #[arg(long, value_enum, default_value_t = ResetPolicyArg::AllOrNothing)]
    pub reset_policy: ResetPolicyArg,

    /// First day to open (`YYYY-MM-DD`). Defaults to today (UTC).
    #[arg(long, value_parser = parse_day_arg)]
    pub start_date: Option<Date>,

    /// First site to open. Defaults to the first `--site`.
    #[arg(long)]
    pub start_site: Option<i64>,
}

/// Command-line spelling of `ResetPolicy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ResetPolicyArg {
    /// Keep every draft if any call failed.
    AllOrNothing,
    /// Drop accepted drafts, keep failed ones.
    PerContext,
}

impl From<ResetPolicyArg> for ResetPolicy {
    fn from(arg: ResetPolicyArg) -> Self {
        match arg {
            ResetPolicyArg::AllOrNothing => Self::AllOrNothing,
            ResetPolicyArg::PerContext => Self::PerContext,
        }
    }
}

/// Configuration errors detected after parsing.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A value failed domain validation.
    #[error("Invalid configuration: {0}")]
    Invalid(#[from] DomainError),

    /// `--start-site` does not name a configured site.
    #[error("Start site {0} is not one of the configured sites")]
    UnknownStartSite(SiteId),

    /// No site was configured.
    #[error("At least one --site is required")]
    NoSites,
}

/// Parses a `--site ID=NAME` argument.
///
/// # Errors
///
/// Returns a message if the separator is missing, the id is not a positive
/// integer or the name is blank.
pub fn parse_site_arg(value: &str) -> Result<Site, String> {
    let (id, name) = value
        .split_once('=')
        .ok_or_else(|| format!("expected ID=NAME, got '{value}'"))?;
    let id: i64 = id
        .trim()
        .parse()
        .map_err(|_| format!("site id '{id}' is not an integer"))?;
    let id: SiteId = parse_site_id(id).map_err(|e| e.to_string())?;
    let name: String = validate_full_name(name).map_err(|e| e.to_string())?;
    Ok(Site::new(id, name))
}

fn parse_day_arg(value: &str) -> Result<Date, String> {
    parse_day(value).map_err(|e| e.to_string())
}

impl Args {
    /// Builds the site catalog from the `--site` arguments.
    #[must_use]
    pub fn catalog(&self) -> StaticSiteCatalog {
        StaticSiteCatalog::new(self.sites.clone())
    }

    /// Returns the operator identity.
    ///
    /// # Errors
    ///
    /// Returns an error if the operator id is not positive.
    pub fn operator(&self) -> Result<Operator, ConfigError> {
        let worker_id: WorkerId = parse_worker_id(self.operator_id)?;
        Ok(Operator::new(worker_id, self.operator_name.clone()))
    }

    /// Returns the site the session opens on.
    ///
    /// # Errors
    ///
    /// Returns an error if `--start-site` is invalid or unknown, or if no
    /// site is configured.
    pub fn start_site(&self, catalog: &StaticSiteCatalog) -> Result<SiteId, ConfigError> {
        match self.start_site {
            Some(raw) => {
                let site_id: SiteId = parse_site_id(raw)?;
                if catalog.contains(site_id) {
                    Ok(site_id)
                } else {
                    Err(ConfigError::UnknownStartSite(site_id))
                }
            }
            None => catalog.first().map(|s| s.id).ok_or(ConfigError::NoSites),
        }
    }

    /// Returns the context the session opens on.
    ///
    /// Without `--start-date` the session opens on today's date in UTC.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Args::start_site`].
    pub fn start_context(&self, catalog: &StaticSiteCatalog) -> Result<ContextKey, ConfigError> {
        let site_id: SiteId = self.start_site(catalog)?;
        Ok(match self.start_date {
            Some(day) => ContextKey::encode(day, site_id),
            None => ContextKey::from_datetime(OffsetDateTime::now_utc(), site_id),
        })
    }
}
