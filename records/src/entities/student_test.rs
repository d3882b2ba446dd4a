use super::*;
use serde_json::json;

fn ada() -> Student {
    Student {
        id: 3,
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: None,
        date_of_birth: Some("2010-12-10".to_owned()),
        classroom: Some(1),
    }
}

#[test]
fn payload_renames_camel_case_fields() {
    let draft = StudentDraft::from_record(&ada());
    let body = serde_json::to_value(draft.to_payload().unwrap()).unwrap();
    assert_eq!(
        body,
        json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": null,
            "date_of_birth": "2010-12-10",
            "classroom": 1
        })
    );
    assert_eq!(StudentDraft::field_named("dateOfBirth"), Some(StudentField::DateOfBirth));
}

#[test]
fn from_record_keeps_id_and_renders_classroom() {
    let draft = StudentDraft::from_record(&ada());
    assert_eq!(draft.id, Some(3));
    assert_eq!(draft.classroom, "1");
    assert_eq!(draft.email, "");
}

#[test]
fn malformed_classroom_and_birth_date_are_reported() {
    let mut draft = StudentDraft::from_record(&ada());
    draft.set_field(StudentField::Classroom, "4A".to_owned());
    draft.set_field(StudentField::DateOfBirth, "2010-13-10".to_owned());
    assert_eq!(draft.to_payload().unwrap_err().malformed, vec!["Date of birth", "Classroom"]);
}

#[test]
fn names_are_required() {
    assert_eq!(StudentDraft::default().to_payload().unwrap_err().missing, vec!["First name", "Last name"]);
}
