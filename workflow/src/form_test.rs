use super::*;
use crate::testing::{ScriptedTransport, signed_in};
use crate::transport::HttpMethod;
use futures::executor::block_on;
use records::{
    AttendanceDraft, AttendanceField, Classroom, ClassroomDraft, ClassroomField, CourseDraft, CourseField, Student,
    StudentDraft, StudentField,
};
use serde_json::json;

fn attendance(student: &str) -> FormController<AttendanceDraft> {
    let mut form = FormController::new(AttendanceDraft::default());
    form.set_field(AttendanceField::Student, student.to_owned());
    form.set_field(AttendanceField::ClassInstance, "12".to_owned());
    form.set_field(AttendanceField::Date, "2024-03-01".to_owned());
    form.set_field(AttendanceField::Status, "Present".to_owned());
    form
}

// =============================================================
// Field edits and validation
// =============================================================

#[test]
fn set_field_touches_one_field() {
    let mut form = FormController::new(CourseDraft::default());
    form.set_field(CourseField::Name, "Algebra".to_owned());
    let mut expected = CourseDraft::default();
    expected.name = "Algebra".to_owned();
    assert_eq!(form.draft(), &expected);
}

#[test]
fn validate_lists_blank_required_fields() {
    let mut form = FormController::new(CourseDraft::default());
    form.set_field(CourseField::Name, "  ".to_owned());
    assert_eq!(form.validate(), vec![CourseField::Code, CourseField::Name]);
    form.set_field(CourseField::Code, "MTH".to_owned());
    assert_eq!(form.missing(), &[CourseField::Name]);
}

// =============================================================
// Submission
// =============================================================

#[test]
fn attendance_without_student_issues_no_request() {
    let transport = ScriptedTransport::default();
    let api = signed_in(&transport);
    let mut form = attendance("");
    let before = form.draft().clone();

    let err = block_on(form.submit(&api)).unwrap_err();
    assert!(matches!(err, FormError::Validation(_)));
    assert!(transport.requests().is_empty());
    assert_eq!(form.draft(), &before);
    assert_eq!(form.missing(), &[AttendanceField::Student]);
    assert!(!form.is_busy());
}

#[test]
fn new_record_posts_coerced_body_once_then_navigates() {
    let transport =
        ScriptedTransport::default().reply(HttpMethod::Post, "/api/academics/attendances/", 201, &json!({ "id": 1 }));
    let api = signed_in(&transport);
    let mut form = attendance("5");

    let next = block_on(form.submit(&api)).unwrap();
    assert_eq!(next, Navigate("/attendance".to_owned()));
    let sent = transport.requests();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].method, HttpMethod::Post);
    assert_eq!(
        sent[0].body,
        Some(json!({ "student": 5, "class_instance": 12, "date": "2024-03-01", "status": "present" }))
    );
}

#[test]
fn existing_record_puts_to_item_path() {
    let transport = ScriptedTransport::default().reply(
        HttpMethod::Put,
        "/api/academics/classrooms/2/",
        200,
        &json!({ "id": 2, "name": "2B" }),
    );
    let api = signed_in(&transport);
    let record = Classroom { id: 2, name: "2A".to_owned(), program: Some(7), teacher: None, students: vec![5] };
    let mut form = FormController::new(ClassroomDraft::from_record(&record));
    form.set_field(ClassroomField::Name, "2B".to_owned());
    form.draft_mut().add_student(&Student {
        id: 6,
        first_name: "Lin".to_owned(),
        last_name: "Wu".to_owned(),
        email: None,
        date_of_birth: None,
        classroom: None,
    });

    let held = block_on(form.submit(&api)).unwrap_err();
    assert_eq!(held, FormError::Unconfirmed(vec!["Students"]));
    assert!(transport.requests().is_empty());

    form.confirm_changes();
    let next = block_on(form.submit(&api)).unwrap();
    assert_eq!(next, Navigate("/classrooms".to_owned()));
    assert_eq!(transport.count(HttpMethod::Put), 1);
    assert_eq!(
        transport.requests()[0].body,
        Some(json!({ "name": "2B", "program": 7, "teacher": null, "students": [5, 6] }))
    );
}

#[test]
fn rejection_keeps_draft_and_stores_message() {
    let transport = ScriptedTransport::default().reply(
        HttpMethod::Post,
        "/api/academics/courses/",
        400,
        &json!({ "code": ["course with this code already exists."] }),
    );
    let api = signed_in(&transport);
    let mut form = FormController::new(CourseDraft::default());
    form.set_field(CourseField::Code, "MTH".to_owned());
    form.set_field(CourseField::Name, "Algebra".to_owned());
    let before = form.draft().clone();

    let err = block_on(form.submit(&api)).unwrap_err();
    assert!(matches!(err, FormError::Api(ApiError::Rejected { status: 400, .. })));
    assert_eq!(form.draft(), &before);
    assert_eq!(form.error(), Some("Failed to save: code: course with this code already exists."));
    assert!(!form.is_busy());
}

#[test]
fn malformed_value_is_a_validation_error() {
    let transport = ScriptedTransport::default();
    let api = signed_in(&transport);
    let mut form = attendance("five");
    let err = block_on(form.submit(&api)).unwrap_err();
    assert!(matches!(err, FormError::Validation(ref v) if v.malformed == vec!["Student"]));
    assert!(transport.requests().is_empty());
}

#[test]
fn second_prepare_while_busy_is_refused() {
    let mut form = attendance("5");
    let first = form.prepare().unwrap();
    assert_eq!(first.method, Method::Post);
    assert_eq!(first.path, "/api/academics/attendances/");
    assert_eq!(form.prepare(), Err(FormError::Busy));
    let failed = form.finish(Err(ApiError::Unauthenticated)).unwrap_err();
    assert!(failed.requires_login());
    assert!(form.prepare().is_ok());
}

// =============================================================
// Edits bound to the route
// =============================================================

fn loaded_student() -> StudentDraft {
    StudentDraft {
        id: Some(3),
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        classroom: "1".to_owned(),
        ..StudentDraft::default()
    }
}

#[test]
fn edit_form_without_its_record_never_submits() {
    let transport = ScriptedTransport::default();
    let api = signed_in(&transport);
    let mut form = FormController::<AttendanceDraft>::for_route(Some(7));
    form.set_field(AttendanceField::Student, "5".to_owned());
    form.set_field(AttendanceField::ClassInstance, "12".to_owned());
    form.set_field(AttendanceField::Date, "2024-03-01".to_owned());
    form.set_field(AttendanceField::Status, "present".to_owned());

    assert!(!form.is_loaded());
    assert_eq!(block_on(form.submit(&api)), Err(FormError::NotLoaded));
    assert!(transport.requests().is_empty());
    assert!(form.error().is_some());
    assert!(!form.is_busy());
}

#[test]
fn draft_for_another_record_is_ignored() {
    let mut form = FormController::<StudentDraft>::for_route(Some(4));
    form.load(loaded_student());
    assert!(!form.is_loaded());
    assert_eq!(form.draft(), &StudentDraft::default());

    form.load(StudentDraft::default());
    assert!(!form.is_loaded());
}

#[test]
fn loaded_edit_puts_to_the_route_id() {
    let mut form = FormController::<StudentDraft>::for_route(Some(3));
    form.load(loaded_student());
    form.set_field(StudentField::Email, "ada@school.test".to_owned());
    let submission = form.prepare().unwrap();
    assert_eq!(submission.method, Method::Put);
    assert_eq!(submission.path, "/api/academics/students/3/");
}

#[test]
fn reassigning_classroom_waits_for_confirmation() {
    let transport =
        ScriptedTransport::default().reply(HttpMethod::Put, "/api/academics/students/3/", 200, &json!({ "id": 3 }));
    let api = signed_in(&transport);
    let mut form = FormController::new(loaded_student());
    form.set_field(StudentField::Classroom, "2".to_owned());
    assert_eq!(form.ownership_changes(), vec!["Classroom"]);

    assert_eq!(block_on(form.submit(&api)), Err(FormError::Unconfirmed(vec!["Classroom"])));
    assert_eq!(transport.count(HttpMethod::Put), 0);
    assert!(!form.is_busy());

    form.confirm_changes();
    form.set_field(StudentField::Classroom, "5".to_owned());
    assert_eq!(block_on(form.submit(&api)), Err(FormError::Unconfirmed(vec!["Classroom"])));
    assert_eq!(transport.count(HttpMethod::Put), 0);

    form.confirm_changes();
    assert!(block_on(form.submit(&api)).is_ok());
    assert_eq!(transport.count(HttpMethod::Put), 1);
    assert_eq!(transport.requests()[0].body.as_ref().map(|b| b["classroom"].clone()), Some(json!(5)));
}

#[test]
fn new_record_with_owner_needs_no_confirmation() {
    let mut form = FormController::new(StudentDraft::default());
    form.set_field(StudentField::FirstName, "Lin".to_owned());
    form.set_field(StudentField::LastName, "Wu".to_owned());
    form.set_field(StudentField::Classroom, "2".to_owned());
    assert!(form.ownership_changes().is_empty());
    assert_eq!(form.prepare().map(|s| s.method), Ok(Method::Post));
}

#[test]
fn unauthorized_save_clears_session_and_keeps_draft() {
    let transport =
        ScriptedTransport::default().reply(HttpMethod::Put, "/api/academics/students/3/", 401, &json!({ "detail": "expired" }));
    let api = signed_in(&transport);
    let mut form = FormController::new(loaded_student());
    form.set_field(StudentField::Email, "ada@school.test".to_owned());
    let before = form.draft().clone();

    let err = block_on(form.submit(&api)).unwrap_err();
    assert!(err.requires_login());
    assert!(!api.session().is_authenticated());
    assert_eq!(form.draft(), &before);
    assert_eq!(transport.count(HttpMethod::Put), 1);
}
