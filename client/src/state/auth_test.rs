use super::*;

fn user(first: Option<&str>) -> User {
    User {
        id: 1,
        username: "admin".to_owned(),
        email: None,
        first_name: first.map(str::to_owned),
        last_name: None,
        role: None,
    }
}

#[test]
fn default_state_is_signed_out() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert_eq!(state.display_name(), "Signed out");
}

#[test]
fn display_name_prefers_full_name() {
    assert_eq!(AuthState::signed_in(user(Some("Ada"))).display_name(), "Ada");
    assert_eq!(AuthState::signed_in(user(None)).display_name(), "admin");
}
