//! Signed-in user shown in the page chrome.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<AuthState>` by the app root. Login fills it, logout
//! and auth failures empty it. The session token itself stays in storage.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use records::User;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
}

impl AuthState {
    #[must_use]
    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user) }
    }

    /// Name for the sidebar footer.
    pub fn display_name(&self) -> String {
        self.user.as_ref().map_or_else(|| "Signed out".to_owned(), User::display_name)
    }
}
