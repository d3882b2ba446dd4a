use super::*;
use crate::{StudentDraft, StudentField};

#[test]
fn coercer_collects_every_failure_in_one_pass() {
    let mut c = Coercer::new();
    let _ = c.required_text("Name", "   ");
    let _ = c.id("Course", "x1");
    let _ = c.number("Score", "");
    let _ = c.date("Date", "2024-13-01");
    let err = c.finish(()).unwrap_err();
    assert_eq!(err.missing, vec!["Name", "Score"]);
    assert_eq!(err.malformed, vec!["Course", "Date"]);
    assert_eq!(err.to_string(), "required: Name, Score; invalid: Course, Date");
}

#[test]
fn optional_values_are_none_when_blank() {
    let mut c = Coercer::new();
    assert_eq!(c.optional_id("Program", " "), None);
    assert_eq!(c.optional_number("Marks", ""), None);
    assert_eq!(c.optional_date("Date", ""), None);
    assert_eq!(c.optional_text("  "), None);
    assert_eq!(c.optional_id("Program", " 12 "), Some(12));
    assert!(c.finish(()).is_ok());
}

#[test]
fn ids_are_trimmed_and_parsed() {
    let mut c = Coercer::new();
    assert_eq!(c.id("Student", " 5 "), 5);
    assert!(c.finish(()).is_ok());
}

#[test]
fn non_finite_numbers_are_malformed() {
    let mut c = Coercer::new();
    let _ = c.number("Score", "NaN");
    assert_eq!(c.finish(()).unwrap_err().malformed, vec!["Score"]);
}

#[test]
fn iso_dates_must_exist_on_the_calendar() {
    assert!(is_iso_date("2024-01-01"));
    assert!(is_iso_date("1999-12-31"));
    assert!(is_iso_date("2024-02-29"));
    assert!(!is_iso_date("2023-02-29"));
    assert!(!is_iso_date("2024-02-31"));
    assert!(!is_iso_date("2024-04-31"));
    assert!(!is_iso_date(" 2024-01-01"));
    assert!(!is_iso_date("2024-1-01"));
    assert!(!is_iso_date("2024-00-10"));
    assert!(!is_iso_date("2024-02-32"));
    assert!(!is_iso_date("2024/02/03"));
    assert!(!is_iso_date("20ab-02-03"));
}

#[test]
fn validation_error_message_variants() {
    let only_missing = ValidationError { missing: vec!["Name"], malformed: vec![] };
    assert_eq!(only_missing.to_string(), "required: Name");
    let only_bad = ValidationError { missing: vec![], malformed: vec!["Date"] };
    assert_eq!(only_bad.to_string(), "invalid: Date");
}

#[test]
fn missing_reports_blank_required_fields_in_order() {
    let mut draft = StudentDraft::default();
    assert_eq!(draft.missing(), vec![StudentField::FirstName, StudentField::LastName]);
    draft.set_field(StudentField::LastName, "Hopper".to_owned());
    assert_eq!(draft.missing(), vec![StudentField::FirstName]);
    draft.set_field(StudentField::FirstName, "  ".to_owned());
    assert_eq!(draft.missing(), vec![StudentField::FirstName]);
}

#[test]
fn for_fields_uses_labels() {
    let err = ValidationError::for_fields(&[StudentField::FirstName, StudentField::DateOfBirth]);
    assert_eq!(err.missing, vec!["First name", "Date of birth"]);
}

#[test]
fn impossible_date_is_malformed_not_sent() {
    let mut c = Coercer::new();
    assert_eq!(c.date("Date", "2024-02-31"), "2024-02-31");
    assert_eq!(c.finish(()).unwrap_err().malformed, vec!["Date"]);
}

#[test]
fn ownership_fields_default_to_reference_fields() {
    assert_eq!(StudentDraft::ownership_fields(), vec![StudentField::Classroom]);
}

#[test]
fn ownership_changes_ignore_other_fields_and_whitespace() {
    let original = StudentDraft { id: Some(3), first_name: "Ada".to_owned(), classroom: "1".to_owned(), ..Default::default() };
    let mut edited = original.clone();
    edited.set_field(StudentField::FirstName, "Grace".to_owned());
    edited.set_field(StudentField::Classroom, " 1 ".to_owned());
    assert!(edited.ownership_changes(&original).is_empty());

    edited.set_field(StudentField::Classroom, "2".to_owned());
    assert_eq!(edited.ownership_changes(&original), vec!["Classroom"]);

    edited.set_field(StudentField::Classroom, String::new());
    assert_eq!(edited.ownership_changes(&original), vec!["Classroom"]);
}
