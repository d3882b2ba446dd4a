use super::*;
use serde_json::json;

#[test]
fn school_blank_contacts_become_null() {
    let mut draft = SchoolDraft::default();
    draft.set_field(SchoolField::Name, "North High".to_owned());
    draft.set_field(SchoolField::Email, " office@north.test ".to_owned());
    let body = serde_json::to_value(draft.to_payload().unwrap()).unwrap();
    assert_eq!(body, json!({ "name": "North High", "address": null, "phone": null, "email": "office@north.test" }));
    assert_eq!(SchoolDraft::default().to_payload().unwrap_err().missing, vec!["Name"]);
}

#[test]
fn branch_requires_numeric_school() {
    let mut draft = BranchDraft::default();
    draft.set_field(BranchField::Name, "Annex".to_owned());
    assert_eq!(draft.to_payload().unwrap_err().missing, vec!["School"]);

    draft.set_field(BranchField::School, "3".to_owned());
    let body = serde_json::to_value(draft.to_payload().unwrap()).unwrap();
    assert_eq!(body, json!({ "name": "Annex", "school": 3, "address": null }));
}

#[test]
fn branch_from_record_without_school_is_blank() {
    let record = Branch { id: 4, name: "Annex".to_owned(), school: None, address: None };
    let draft = BranchDraft::from_record(&record);
    assert_eq!(draft.id, Some(4));
    assert_eq!(draft.school, "");
}
