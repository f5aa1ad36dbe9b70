// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Attendance, DomainError, Hours, MAX_HOURS, MIN_HOURS, RosterMember, SiteId, TimeEntry,
    WorkerId, parse_site_id, parse_worker_id,
};

fn create_test_member() -> RosterMember {
    RosterMember::new(WorkerId::new(1), String::from("Ivan Petrov"))
}

#[test]
fn test_hours_clamp_to_bounds() {
    assert!((Hours::new(-3.0).value() - MIN_HOURS).abs() < f64::EPSILON);
    assert!((Hours::new(30.0).value() - MAX_HOURS).abs() < f64::EPSILON);
    assert!((Hours::new(7.5).value() - 7.5).abs() < f64::EPSILON);
}

#[test]
fn test_hours_non_finite_clamps_to_zero() {
    assert!(Hours::new(f64::NAN).value().abs() < f64::EPSILON);
    assert!(Hours::new(f64::INFINITY).value().abs() < f64::EPSILON);
}

#[test]
fn test_hours_overtime_is_strictly_above_standard_shift() {
    assert!(!Hours::new(8.0).is_overtime());
    assert!(Hours::new(8.5).is_overtime());
    assert!(!Hours::new(0.0).is_overtime());
}

#[test]
fn test_hours_adjusted_clamps() {
    let hours: Hours = Hours::new(23.0).adjusted(5.0);
    assert!((hours.value() - MAX_HOURS).abs() < f64::EPSILON);

    let hours: Hours = Hours::new(1.0).adjusted(-5.0);
    assert!(hours.value().abs() < f64::EPSILON);
}

#[test]
fn test_hours_deserialize_clamps() {
    let hours: Hours = serde_json::from_str("99").unwrap();
    assert!((hours.value() - MAX_HOURS).abs() < f64::EPSILON);
}

#[test]
fn test_default_entry_from_member() {
    let entry: TimeEntry = TimeEntry::from_member(&create_test_member());

    assert_eq!(entry.worker_id, WorkerId::new(1));
    assert_eq!(entry.full_name, "Ivan Petrov");
    assert!(entry.is_working());
    assert!(!entry.is_overtime());
    assert!((entry.hours().value() - 8.0).abs() < f64::EPSILON);
}

#[test]
fn test_adjust_hours_recomputes_overtime() {
    let mut entry: TimeEntry = TimeEntry::from_member(&create_test_member());

    entry.adjust_hours(2.0);
    assert!((entry.hours().value() - 10.0).abs() < f64::EPSILON);
    assert!(entry.is_overtime());

    entry.adjust_hours(-3.0);
    assert!((entry.hours().value() - 7.0).abs() < f64::EPSILON);
    assert!(!entry.is_overtime());
}

#[test]
fn test_adjust_hours_marks_worker_present() {
    let mut entry: TimeEntry = TimeEntry::from_member(&create_test_member());
    entry.toggle_working();
    assert!(!entry.is_working());

    entry.adjust_hours(1.0);
    assert!(entry.is_working());
    assert!((entry.hours().value() - 9.0).abs() < f64::EPSILON);
}

#[test]
fn test_toggle_working_keeps_hours() {
    let mut entry: TimeEntry = TimeEntry::from_member(&create_test_member());
    entry.set_hours(Hours::new(11.0));

    entry.toggle_working();
    assert_eq!(
        entry.attendance(),
        Attendance::NotWorking {
            hours: Hours::new(11.0)
        }
    );

    entry.toggle_working();
    assert_eq!(
        entry.attendance(),
        Attendance::Working {
            hours: Hours::new(11.0)
        }
    );
}

#[test]
fn test_parse_ids_reject_non_positive() {
    assert_eq!(parse_worker_id(5), Ok(WorkerId::new(5)));
    assert_eq!(parse_worker_id(0), Err(DomainError::InvalidWorkerId(0)));
    assert_eq!(parse_site_id(2), Ok(SiteId::new(2)));
    assert_eq!(parse_site_id(-1), Err(DomainError::InvalidSiteId(-1)));
}

#[test]
fn test_attendance_serializes_with_status_tag() {
    let attendance: Attendance = Attendance::NotWorking {
        hours: Hours::new(6.0),
    };
    let json: String = serde_json::to_string(&attendance).unwrap();
    assert_eq!(json, r#"{"status":"not_working","hours":6.0}"#);
}
