use super::*;
use serde_json::json;

#[test]
fn payload_renames_enrolled_on_and_coerces_ids() {
    let mut draft = EnrollmentDraft::default();
    draft.set_field(EnrollmentField::Student, "12".to_owned());
    draft.set_field(EnrollmentField::Course, " 3".to_owned());
    draft.set_field(EnrollmentField::EnrolledOn, "2024-09-02".to_owned());
    let body = serde_json::to_value(draft.to_payload().unwrap()).unwrap();
    assert_eq!(body, json!({ "student": 12, "course": 3, "enrolled_on": "2024-09-02" }));
    assert_eq!(EnrollmentDraft::field_named("enrolledOn"), Some(EnrollmentField::EnrolledOn));
}

#[test]
fn student_and_course_are_required() {
    let err = EnrollmentDraft::default().to_payload().unwrap_err();
    assert_eq!(err.missing, vec!["Student", "Course"]);
}

#[test]
fn non_numeric_course_is_malformed() {
    let record = Enrollment { id: 5, student: 12, course: 3, enrolled_on: None };
    let mut draft = EnrollmentDraft::from_record(&record);
    assert_eq!(draft.course, "3");
    assert_eq!(draft.to_payload().unwrap().enrolled_on, None);
    draft.set_field(EnrollmentField::Course, "Algebra".to_owned());
    assert_eq!(draft.to_payload().unwrap_err().malformed, vec!["Course"]);
}
