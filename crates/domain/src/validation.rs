// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::context_key::DAY_FORMAT;
use crate::error::DomainError;
use time::Date;

/// Validates and normalizes a worker's display name.
///
/// Surrounding whitespace is trimmed.
///
/// # Arguments
///
/// * `name` - The raw display name
///
/// # Returns
///
/// * `Ok(String)` with the trimmed name
/// * `Err(DomainError::InvalidName)` if nothing remains after trimming
///
/// # Errors
///
/// Returns an error if the name is empty or whitespace only.
pub fn validate_full_name(name: &str) -> Result<String, DomainError> {
    let trimmed: &str = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Name cannot be empty",
        )));
    }
    Ok(trimmed.to_string())
}

/// Parses a `YYYY-MM-DD` calendar day.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid date.
pub fn parse_day(value: &str) -> Result<Date, DomainError> {
    Date::parse(value, DAY_FORMAT).map_err(|e| DomainError::DateParseError {
        date_string: value.to_string(),
        error: e.to_string(),
    })
}

// Serde adapter for `time::Date` fields in the `YYYY-MM-DD` wire format.
time::serde::format_description!(pub calendar_day, Date, "[year]-[month]-[day]");
