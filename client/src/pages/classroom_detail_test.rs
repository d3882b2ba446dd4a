use super::*;
use workflow::Resource;

fn classroom(program: Option<i64>) -> Classroom {
    Classroom { id: 2, name: "2B".to_owned(), program, teacher: Some(4), students: vec![5, 6] }
}

#[test]
fn rows_are_empty_until_the_classroom_loads() {
    assert!(detail_rows(&ClassroomDetail::default()).is_empty());
}

#[test]
fn rows_show_the_program_name_once_resolved() {
    let detail = ClassroomDetail {
        classroom: Resource::new(Some(classroom(Some(7)))),
        program_name: Resource::new(Some("Arts".to_owned())),
    };
    assert_eq!(
        detail_rows(&detail),
        vec![
            ("Name", "2B".to_owned()),
            ("Program", "Arts".to_owned()),
            ("Teacher", "#4".to_owned()),
            ("Students", "2".to_owned()),
        ]
    );
}

#[test]
fn rows_fall_back_to_the_program_id_when_its_fetch_failed() {
    let mut program_name = Resource::default();
    program_name.error = Some("Failed to load program. Please try again.".to_owned());
    let detail = ClassroomDetail { classroom: Resource::new(Some(classroom(Some(7)))), program_name };
    assert_eq!(detail_rows(&detail)[1], ("Program", "#7".to_owned()));
}

#[test]
fn rows_mark_a_classroom_without_program() {
    let detail = ClassroomDetail { classroom: Resource::new(Some(classroom(None))), ..ClassroomDetail::default() };
    assert_eq!(detail_rows(&detail)[1], ("Program", "-".to_owned()));
}
