use super::*;
use serde_json::json;

fn filled() -> AttendanceDraft {
    let mut draft = AttendanceDraft::default();
    draft.set_field(AttendanceField::Student, "12".to_owned());
    draft.set_field(AttendanceField::ClassInstance, "5".to_owned());
    draft.set_field(AttendanceField::Date, "2024-01-01".to_owned());
    draft.set_field(AttendanceField::Status, "present".to_owned());
    draft
}

#[test]
fn empty_student_is_reported_missing() {
    let mut draft = filled();
    draft.set_field(AttendanceField::Student, String::new());
    assert_eq!(draft.missing(), vec![AttendanceField::Student]);
    let err = draft.to_payload().unwrap_err();
    assert_eq!(err.missing, vec!["Student"]);
}

#[test]
fn payload_renames_class_instance_and_coerces_ids() {
    let body = serde_json::to_value(filled().to_payload().unwrap()).unwrap();
    assert_eq!(
        body,
        json!({ "student": 12, "class_instance": 5, "date": "2024-01-01", "status": "present" })
    );
}

#[test]
fn set_field_touches_only_one_field() {
    let before = filled();
    let mut after = before.clone();
    after.set_field(AttendanceField::Status, "late".to_owned());
    assert_eq!(after.status, "late");
    assert_eq!(after.student, before.student);
    assert_eq!(after.class_instance, before.class_instance);
    assert_eq!(after.date, before.date);
}

#[test]
fn status_is_canonicalized_and_checked() {
    let mut draft = filled();
    draft.set_field(AttendanceField::Status, "ABSENT".to_owned());
    assert_eq!(draft.to_payload().unwrap().status, "absent");

    draft.set_field(AttendanceField::Status, "on holiday".to_owned());
    assert_eq!(draft.to_payload().unwrap_err().malformed, vec!["Status"]);
}

#[test]
fn bad_date_is_malformed() {
    let mut draft = filled();
    draft.set_field(AttendanceField::Date, "01/01/2024".to_owned());
    assert_eq!(draft.to_payload().unwrap_err().malformed, vec!["Date"]);
}

#[test]
fn field_lookup_uses_form_shape_names() {
    assert_eq!(AttendanceDraft::field_named("classInstance"), Some(AttendanceField::ClassInstance));
    assert_eq!(AttendanceDraft::field_named("class_instance"), None);
}
