use super::*;
use crate::testing::{ScriptedTransport, signed_in, signed_out};
use crate::transport::HttpMethod;
use futures::executor::block_on;
use records::{AttendanceDraft, ClassroomDraft, ProgramDraft, SchoolDraft};
use serde_json::json;

fn teacher_json() -> serde_json::Value {
    json!([{ "id": 4, "first_name": "Ada", "last_name": "Byron", "email": "ada@school.test" }])
}

// =============================================================
// Resource
// =============================================================

#[test]
fn resolve_success_replaces_data_and_clears_error() {
    let mut resource = Resource::new(vec![1]);
    resource.error = Some("old".to_owned());
    resource.start();
    assert!(resource.loading);
    assert_eq!(resource.resolve(Ok(vec![2, 3]), "load numbers"), LoadStatus::Ready);
    assert_eq!(resource, Resource::new(vec![2, 3]));
}

#[test]
fn resolve_failure_keeps_previous_data() {
    let mut resource = Resource::new(vec![1]);
    resource.start();
    let status = resource.resolve(Err(ApiError::Unreachable("down".to_owned())), "load numbers");
    assert_eq!(status, LoadStatus::Failed);
    assert_eq!(resource.data, vec![1]);
    assert!(!resource.loading);
    assert_eq!(resource.error.as_deref(), Some("Failed to load numbers. Please try again."));
}

#[test]
fn resolve_unauthenticated_asks_for_login() {
    let mut resource: Resource<Vec<i64>> = Resource::default();
    assert_eq!(resource.resolve(Err(ApiError::Unauthenticated), "load"), LoadStatus::LoginRequired);
}

// =============================================================
// Gate
// =============================================================

#[test]
fn gate_redirects_without_token() {
    let transport = ScriptedTransport::default();
    let api = signed_out(&transport);
    assert_eq!(gate(api.session()), Err(Navigate::login()));
    assert!(transport.requests().is_empty());
}

#[test]
fn gate_passes_with_token() {
    let transport = ScriptedTransport::default();
    assert_eq!(gate(signed_in(&transport).session()), Ok(()));
}

// =============================================================
// Reference options
// =============================================================

#[test]
fn reference_kinds_follow_field_order_without_duplicates() {
    assert_eq!(reference_kinds::<AttendanceDraft>(), vec![RefKind::Student, RefKind::Classroom]);
    assert_eq!(reference_kinds::<ClassroomDraft>(), vec![RefKind::Program, RefKind::Teacher]);
    assert!(reference_kinds::<SchoolDraft>().is_empty());
}

#[test]
fn load_options_maps_records_to_labels() {
    let transport =
        ScriptedTransport::default().reply(HttpMethod::Get, "/api/auth/teacher/", 200, &teacher_json());
    let api = signed_in(&transport);
    let options = block_on(load_options(&api, RefKind::Teacher)).unwrap();
    assert_eq!(options, vec![RefOption { id: 4, label: "Ada Byron".to_owned() }]);
}

#[test]
fn form_page_for_new_record_skips_record_fetch() {
    let transport = ScriptedTransport::default().reply(
        HttpMethod::Get,
        "/api/schools/",
        200,
        &json!({ "results": [{ "id": 9, "name": "North" }], "count": 1 }),
    );
    let api = signed_in(&transport);
    let page = block_on(load_form_page::<ProgramDraft, _, _>(&api, None));
    assert_eq!(page.draft.data, ProgramDraft::default());
    assert_eq!(page.options[&RefKind::School].data, vec![RefOption { id: 9, label: "North".to_owned() }]);
    assert_eq!(transport.count(HttpMethod::Get), 1);
}

#[test]
fn form_page_for_existing_record_prefills_draft() {
    let transport = ScriptedTransport::default()
        .reply(
            HttpMethod::Get,
            "/api/academics/programs/3/",
            200,
            &json!({ "id": 3, "name": "Science", "school": 9 }),
        )
        .reply(HttpMethod::Get, "/api/schools/", 500, &json!({}));
    let api = signed_in(&transport);
    let page = block_on(load_form_page::<ProgramDraft, _, _>(&api, Some(3)));
    assert_eq!(page.draft.data.id(), Some(3));
    assert_eq!(page.draft.data.value(records::ProgramField::Name), "Science");
    assert!(page.draft.error.is_none());
    assert!(page.options[&RefKind::School].error.is_some());
}

#[test]
fn failed_edit_load_cannot_turn_into_a_create() {
    let transport = ScriptedTransport::default()
        .unreachable(HttpMethod::Get, "/api/academics/attendances/7/")
        .reply(HttpMethod::Get, "/api/academics/students/", 200, &json!([]))
        .reply(HttpMethod::Get, "/api/academics/classrooms/", 200, &json!([]));
    let api = signed_in(&transport);
    let page = block_on(load_form_page::<AttendanceDraft, _, _>(&api, Some(7)));
    assert!(page.draft.error.is_some());

    let mut form = page.controller(Some(7));
    assert!(!form.is_loaded());
    assert_eq!(form.target(), Some(7));
    let err = block_on(form.submit(&api)).unwrap_err();
    assert_eq!(err, crate::FormError::NotLoaded);
    assert_eq!(transport.count(HttpMethod::Post), 0);
    assert_eq!(transport.count(HttpMethod::Put), 0);
}

#[test]
fn loaded_edit_page_controller_updates_the_record() {
    let transport = ScriptedTransport::default()
        .reply(HttpMethod::Get, "/api/academics/programs/3/", 200, &json!({ "id": 3, "name": "Science" }))
        .reply(HttpMethod::Get, "/api/schools/", 200, &json!([]));
    let api = signed_in(&transport);
    let page = block_on(load_form_page::<ProgramDraft, _, _>(&api, Some(3)));
    let mut form = page.controller(Some(3));
    assert!(form.is_loaded());
    let submission = form.prepare().unwrap();
    assert_eq!(submission.method, crate::Method::Put);
    assert_eq!(submission.path, "/api/academics/programs/3/");
}

// =============================================================
// Classroom pages
// =============================================================

#[test]
fn classroom_edit_settles_each_fetch_independently() {
    let transport = ScriptedTransport::default()
        .reply(HttpMethod::Get, "/api/academics/students/", 500, &json!({ "detail": "boom" }))
        .reply(HttpMethod::Get, "/api/auth/teacher/", 200, &teacher_json())
        .reply(HttpMethod::Get, "/api/academics/programs/", 200, &json!([{ "id": 7, "name": "Arts" }]))
        .reply(
            HttpMethod::Get,
            "/api/academics/classrooms/2/",
            200,
            &json!({ "id": 2, "name": "2B", "students": [5] }),
        );
    let api = signed_in(&transport);
    let edit = block_on(load_classroom_edit(&api, Some(2)));
    assert_eq!(edit.students.error.as_deref(), Some("Failed to load students: boom"));
    assert_eq!(edit.teachers.data.len(), 1);
    assert_eq!(edit.programs.data, vec![RefOption { id: 7, label: "Arts".to_owned() }]);
    assert_eq!(edit.classroom.data.as_ref().map(|c| c.students.clone()), Some(vec![5]));
    assert_eq!(edit.status(), LoadStatus::Failed);
    assert_eq!(edit.draft().students.names(), &["Student #5".to_owned()]);
    let options = edit.options();
    assert_eq!(options[&RefKind::Teacher].data, vec![RefOption { id: 4, label: "Ada Byron".to_owned() }]);
    assert_eq!(options[&RefKind::Program].data.len(), 1);
}

#[test]
fn classroom_edit_for_new_skips_classroom_and_resolves_nothing() {
    let transport = ScriptedTransport::default()
        .reply(
            HttpMethod::Get,
            "/api/academics/students/",
            200,
            &json!([{ "id": 5, "first_name": "Lin", "last_name": "Wu" }]),
        )
        .reply(HttpMethod::Get, "/api/auth/teacher/", 200, &json!([]))
        .reply(HttpMethod::Get, "/api/academics/programs/", 200, &json!([]));
    let api = signed_in(&transport);
    let edit = block_on(load_classroom_edit(&api, None));
    assert_eq!(edit.status(), LoadStatus::Ready);
    assert_eq!(edit.classroom.data, None);
    assert_eq!(edit.draft(), ClassroomDraft::default());
    assert_eq!(transport.requests().len(), 3);
}

#[test]
fn classroom_edit_with_missing_classroom_refuses_to_save() {
    let transport = ScriptedTransport::default()
        .reply(HttpMethod::Get, "/api/academics/students/", 200, &json!([]))
        .reply(HttpMethod::Get, "/api/auth/teacher/", 200, &json!([]))
        .reply(HttpMethod::Get, "/api/academics/programs/", 200, &json!([]))
        .reply(HttpMethod::Get, "/api/academics/classrooms/2/", 404, &json!({ "detail": "Not found." }));
    let api = signed_in(&transport);
    let edit = block_on(load_classroom_edit(&api, Some(2)));
    let mut form = edit.controller(Some(2));
    form.set_field(records::ClassroomField::Name, "2B".to_owned());
    assert_eq!(form.prepare(), Err(crate::FormError::NotLoaded));

    let mut create = edit.controller(None);
    create.set_field(records::ClassroomField::Name, "2B".to_owned());
    assert_eq!(create.prepare().map(|s| s.method), Ok(crate::Method::Post));
}

#[test]
fn classroom_edit_draft_uses_student_names() {
    let transport = ScriptedTransport::default()
        .reply(
            HttpMethod::Get,
            "/api/academics/students/",
            200,
            &json!([{ "id": 5, "first_name": "Lin", "last_name": "Wu" }]),
        )
        .reply(HttpMethod::Get, "/api/auth/teacher/", 200, &json!([]))
        .reply(HttpMethod::Get, "/api/academics/programs/", 200, &json!([]))
        .reply(
            HttpMethod::Get,
            "/api/academics/classrooms/2/",
            200,
            &json!({ "id": 2, "name": "2B", "students": [5] }),
        );
    let api = signed_in(&transport);
    let draft = block_on(load_classroom_edit(&api, Some(2))).draft();
    assert_eq!(draft.students.names(), &["Lin Wu".to_owned()]);
    assert_eq!(draft.id(), Some(2));
}

#[test]
fn classroom_detail_fetches_program_after_classroom() {
    let transport = ScriptedTransport::default()
        .reply(
            HttpMethod::Get,
            "/api/academics/classrooms/2/",
            200,
            &json!({ "id": 2, "name": "2B", "program": 7 }),
        )
        .reply(HttpMethod::Get, "/api/academics/programs/7/", 200, &json!({ "id": 7, "name": "Arts" }));
    let api = signed_in(&transport);
    let detail = block_on(load_classroom_detail(&api, 2));
    assert_eq!(detail.program_name.data.as_deref(), Some("Arts"));
    let urls: Vec<String> = transport.requests().into_iter().map(|r| r.url).collect();
    assert_eq!(
        urls,
        vec!["http://api.test/api/academics/classrooms/2/", "http://api.test/api/academics/programs/7/"]
    );
}

#[test]
fn classroom_detail_without_program_stops_after_one_fetch() {
    let transport = ScriptedTransport::default().reply(
        HttpMethod::Get,
        "/api/academics/classrooms/2/",
        200,
        &json!({ "id": 2, "name": "2B" }),
    );
    let api = signed_in(&transport);
    let detail = block_on(load_classroom_detail(&api, 2));
    assert_eq!(detail.program_name.data, None);
    assert_eq!(transport.requests().len(), 1);
}

#[test]
fn classroom_detail_failure_skips_program() {
    let transport = ScriptedTransport::default().reply(HttpMethod::Get, "/api/academics/classrooms/2/", 404, &json!({}));
    let api = signed_in(&transport);
    let detail = block_on(load_classroom_detail(&api, 2));
    assert_eq!(detail.classroom.error.as_deref(), Some("Failed to load classroom: not found"));
    assert_eq!(transport.requests().len(), 1);
}
