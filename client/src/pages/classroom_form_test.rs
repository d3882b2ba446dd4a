use super::*;

fn student(id: i64, first: &str, last: &str) -> Student {
    Student {
        id,
        first_name: first.to_owned(),
        last_name: last.to_owned(),
        email: None,
        date_of_birth: None,
        classroom: None,
    }
}

#[test]
fn candidates_exclude_students_already_on_the_roster() {
    let students = vec![student(1, "Lin", "Wu"), student(2, "Ada", "Byron")];
    let mut draft = ClassroomDraft::default();
    draft.add_student(&students[0]);
    assert_eq!(roster_candidates(&students, &draft), vec![(2, "Ada Byron".to_owned())]);
}

#[test]
fn picking_adds_once_in_selection_order() {
    let students = vec![student(1, "Lin", "Wu"), student(2, "Ada", "Byron")];
    let mut draft = ClassroomDraft::default();
    assert!(add_picked(&mut draft, &students, "2"));
    assert!(add_picked(&mut draft, &students, "1"));
    assert!(!add_picked(&mut draft, &students, "2"));
    assert_eq!(draft.students.ids(), &[2, 1]);
}

#[test]
fn picking_placeholder_or_unknown_id_is_ignored() {
    let students = vec![student(1, "Lin", "Wu")];
    let mut draft = ClassroomDraft::default();
    assert!(!add_picked(&mut draft, &students, ""));
    assert!(!add_picked(&mut draft, &students, "9"));
    assert!(draft.students.is_empty());
}
