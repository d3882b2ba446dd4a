use super::*;
use crate::testing::{ScriptedTransport, signed_in, signed_out};
use futures::executor::block_on;
use records::{Classroom, Record};
use serde_json::json;

// =============================================================
// Auth header and missing token
// =============================================================

#[test]
fn authenticated_request_carries_bearer_token() {
    let transport = ScriptedTransport::default().reply(HttpMethod::Get, "/api/schools/", 200, &json!([]));
    let api = signed_in(&transport);
    block_on(api.request(Method::Get, "/api/schools/", None, true)).unwrap();
    let sent = transport.requests();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].bearer.as_deref(), Some("tok"));
    assert_eq!(sent[0].url, "http://api.test/api/schools/");
}

#[test]
fn unauthenticated_request_omits_bearer() {
    let transport = ScriptedTransport::default().reply(HttpMethod::Post, "/api/auth/login", 200, &json!({}));
    let api = signed_in(&transport);
    block_on(api.request(Method::Post, "/api/auth/login", Some(&json!({ "username": "a" })), false)).unwrap();
    let sent = transport.requests();
    assert_eq!(sent[0].bearer, None);
    assert_eq!(sent[0].body, Some(json!({ "username": "a" })));
}

#[test]
fn missing_token_fails_without_network() {
    let transport = ScriptedTransport::default();
    let api = signed_out(&transport);
    let err = block_on(api.get_list::<Classroom>(Classroom::ENDPOINT.collection)).unwrap_err();
    assert_eq!(err, ApiError::Unauthenticated);
    assert!(err.requires_login());
    assert!(transport.requests().is_empty());
}

// =============================================================
// Response classification
// =============================================================

#[test]
fn unauthorized_clears_session() {
    let transport =
        ScriptedTransport::default().reply(HttpMethod::Get, "/api/branches/", 401, &json!({ "detail": "expired" }));
    let api = signed_in(&transport);
    let err = block_on(api.request(Method::Get, "/api/branches/", None, true)).unwrap_err();
    assert_eq!(err, ApiError::Unauthenticated);
    assert_eq!(api.session().get(), None);
}

#[test]
fn unauthorized_without_auth_is_a_plain_rejection() {
    let transport = ScriptedTransport::default().reply(
        HttpMethod::Post,
        "/api/auth/login",
        401,
        &json!({ "detail": "Invalid credentials" }),
    );
    let api = signed_out(&transport);
    let err = block_on(api.request(Method::Post, "/api/auth/login", None, false)).unwrap_err();
    assert!(matches!(err, ApiError::Rejected { status: 401, ref message, .. } if message == "Invalid credentials"));
}

#[test]
fn rejected_carries_status_message_and_payload() {
    let payload = json!({ "name": ["This field is required."] });
    let transport =
        ScriptedTransport::default().reply(HttpMethod::Post, "/api/academics/courses/", 400, &payload);
    let api = signed_in(&transport);
    let err = block_on(api.post("/api/academics/courses/", &json!({}))).unwrap_err();
    assert_eq!(
        err,
        ApiError::Rejected { status: 400, message: "name: This field is required.".to_owned(), payload: Some(payload) }
    );
    assert_eq!(err.user_message("save course"), "Failed to save course: name: This field is required.");
}

#[test]
fn no_response_is_unreachable() {
    let transport = ScriptedTransport::default().unreachable(HttpMethod::Get, "/api/schools/");
    let api = signed_in(&transport);
    let err = block_on(api.request(Method::Get, "/api/schools/", None, true)).unwrap_err();
    assert!(matches!(err, ApiError::Unreachable(_)));
    assert_eq!(err.user_message("load schools"), "Failed to load schools. Please try again.");
    assert!(api.session().get().is_some());
}

#[test]
fn empty_success_body_is_null() {
    let transport = ScriptedTransport::default().reply(HttpMethod::Get, "/api/schools/1/", 204, &Value::Null);
    let api = signed_in(&transport);
    assert_eq!(block_on(api.request(Method::Get, "/api/schools/1/", None, true)), Ok(Value::Null));
}

#[test]
fn list_normalizes_both_envelopes() {
    let transport = ScriptedTransport::default()
        .reply(HttpMethod::Get, "/api/academics/classrooms/", 200, &json!({ "results": [{ "id": 1, "name": "A" }] }))
        .reply(HttpMethod::Get, "/api/academics/classrooms/", 200, &json!([{ "id": 1, "name": "A" }]));
    let api = signed_in(&transport);
    let wrapped: Vec<Classroom> = block_on(api.get_list(Classroom::ENDPOINT.collection)).unwrap();
    let bare: Vec<Classroom> = block_on(api.get_list(Classroom::ENDPOINT.collection)).unwrap();
    assert_eq!(wrapped.len(), 1);
    assert_eq!(wrapped, bare);
}

#[test]
fn wrong_shape_is_decode_error() {
    let transport =
        ScriptedTransport::default().reply(HttpMethod::Get, "/api/academics/classrooms/", 200, &json!({ "rows": [] }));
    let api = signed_in(&transport);
    let err = block_on(api.get_list::<Classroom>(Classroom::ENDPOINT.collection)).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

// =============================================================
// server_message
// =============================================================

#[test]
fn server_message_prefers_known_keys() {
    assert_eq!(server_message(400, Some(&json!({ "detail": "d", "message": "m" }))), "d");
    assert_eq!(server_message(400, Some(&json!({ "message": "m" }))), "m");
    assert_eq!(server_message(400, Some(&json!({ "error": "e" }))), "e");
    assert_eq!(server_message(400, Some(&json!({ "non_field_errors": ["bad pair"] }))), "bad pair");
    assert_eq!(server_message(400, Some(&json!("plain text"))), "plain text");
}

#[test]
fn server_message_falls_back_by_status() {
    assert_eq!(server_message(404, None), "not found");
    assert_eq!(server_message(503, Some(&json!({}))), "the server encountered an error");
    assert_eq!(server_message(418, None), "the request failed");
}
