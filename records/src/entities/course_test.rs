use super::*;
use serde_json::json;

#[test]
fn payload_coerces_program_id() {
    let mut draft = CourseDraft::default();
    draft.set_field(CourseField::Code, " MTH101 ".to_owned());
    draft.set_field(CourseField::Name, "Algebra".to_owned());
    draft.set_field(CourseField::Program, "4".to_owned());
    let body = serde_json::to_value(draft.to_payload().unwrap()).unwrap();
    assert_eq!(body, json!({ "name": "Algebra", "code": "MTH101", "description": null, "program": 4 }));
}

#[test]
fn blank_code_and_name_are_missing() {
    let err = CourseDraft::default().to_payload().unwrap_err();
    assert_eq!(err.missing, vec!["Name", "Code"]);
    assert_eq!(CourseDraft::default().missing(), vec![CourseField::Code, CourseField::Name]);
}

#[test]
fn from_record_fills_optional_fields_with_blanks() {
    let record = Course { id: 2, name: "Physics".to_owned(), code: "PHY".to_owned(), description: None, program: None };
    let draft = CourseDraft::from_record(&record);
    assert_eq!(draft.id, Some(2));
    assert_eq!(draft.program, "");
    assert_eq!(draft.description, "");
    assert_eq!(draft.to_payload().unwrap().program, None);
}
