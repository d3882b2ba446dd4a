use super::*;
use serde_json::json;

#[test]
fn payload_coerces_school_id() {
    let mut draft = ProgramDraft::default();
    draft.set_field(ProgramField::Name, "Sciences".to_owned());
    draft.set_field(ProgramField::Description, "  ".to_owned());
    draft.set_field(ProgramField::School, "2".to_owned());
    let body = serde_json::to_value(draft.to_payload().unwrap()).unwrap();
    assert_eq!(body, json!({ "name": "Sciences", "description": null, "school": 2 }));
}

#[test]
fn name_is_required() {
    assert_eq!(ProgramDraft::default().to_payload().unwrap_err().missing, vec!["Name"]);
}

#[test]
fn from_record_keeps_id_for_updates() {
    let record = Program { id: 9, name: "Arts".to_owned(), description: Some("Music".to_owned()), school: Some(2) };
    let draft = ProgramDraft::from_record(&record);
    assert_eq!(draft.id(), Some(9));
    assert_eq!(draft.school, "2");
    assert_eq!(draft.ownership_changes(&draft.clone()), Vec::<&str>::new());
}
