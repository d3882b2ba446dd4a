use super::*;
use records::{Course, RefKind, RefOption};
use workflow::Resource;

#[test]
fn form_title_distinguishes_new_and_edit() {
    assert_eq!(form_title(&Course::ENDPOINT, None), "Courses / New");
    assert_eq!(form_title(&Course::ENDPOINT, Some(12)), "Courses / Edit #12");
}

#[test]
fn parse_id_accepts_only_numbers() {
    assert_eq!(parse_id(Some("42".to_owned())), Some(42));
    assert_eq!(parse_id(Some("new".to_owned())), None);
    assert_eq!(parse_id(None), None);
}

#[test]
fn option_errors_lists_failed_collections_only() {
    let mut options = ReferenceOptions::default();
    options.insert(RefKind::Program, Resource::new(vec![RefOption { id: 1, label: "Arts".to_owned() }]));
    let mut failed = Resource::default();
    failed.error = Some("Failed to load teachers. Please try again.".to_owned());
    options.insert(RefKind::Teacher, failed);
    assert_eq!(option_errors(&options), vec!["Failed to load teachers. Please try again.".to_owned()]);
}

#[test]
fn reassign_prompt_names_the_moved_fields() {
    assert_eq!(reassign_prompt(&["Classroom"]), "Saving changes the classroom of this record. Continue?");
    assert_eq!(
        reassign_prompt(&["Teacher", "Students"]),
        "Saving changes the teacher, students of this record. Continue?"
    );
}
