//! Login and logout: the only writers of the session.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use records::{LoginRequest, LoginResponse, Record, User};
use serde_json::Value;

use crate::Navigate;
use crate::api::{ApiClient, ApiError, Method};
use crate::session::{KeyValueStore, StorageError};
use crate::transport::Transport;

pub const LOGIN_PATH: &str = "/api/auth/login";
/// Landing page after a successful login.
pub const HOME_PAGE: &str = "/";

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum LoginError {
    #[error("username and password are required")]
    MissingCredentials,
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl LoginError {
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingCredentials => "Enter a username and password.".to_owned(),
            Self::Api(ApiError::Rejected { status: 400 | 401, .. }) => "Invalid username or password.".to_owned(),
            Self::Api(err) => err.user_message("sign in"),
            Self::Storage(_) => "Failed to sign in: the session could not be saved.".to_owned(),
        }
    }
}

/// Exchange credentials for a token, then load and persist the profile.
///
/// # Errors
///
/// Any failure leaves no session behind.
pub async fn login<T: Transport, S: KeyValueStore>(
    api: &ApiClient<T, S>,
    username: &str,
    password: &str,
) -> Result<User, LoginError> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(LoginError::MissingCredentials);
    }

    let credentials = LoginRequest { username: username.to_owned(), password: password.to_owned() };
    let body = serde_json::to_value(&credentials).map_err(|e| ApiError::Decode(e.to_string()))?;
    let reply = api.request(Method::Post, LOGIN_PATH, Some(&body), false).await?;
    let reply: LoginResponse = serde_json::from_value(reply).map_err(|e| ApiError::Decode(e.to_string()))?;

    api.session().set(&reply.token, &reply.id, &Value::Null)?;
    match fetch_profile(api, &reply).await {
        Ok(user) => {
            tracing::info!(user_id = %reply.id, username = %user.username, "signed in");
            Ok(user)
        }
        Err(err) => {
            api.session().clear();
            Err(err)
        }
    }
}

async fn fetch_profile<T: Transport, S: KeyValueStore>(
    api: &ApiClient<T, S>,
    reply: &LoginResponse,
) -> Result<User, LoginError> {
    let path = format!("{}{}/", User::ENDPOINT.collection, reply.id);
    let user: User = api.get_one(&path).await?;
    let info = serde_json::to_value(&user).map_err(|e| ApiError::Decode(e.to_string()))?;
    api.session().set(&reply.token, &reply.id, &info)?;
    Ok(user)
}

/// Drop the session and return to the login screen.
pub fn logout<T: Transport, S: KeyValueStore>(api: &ApiClient<T, S>) -> Navigate {
    api.session().clear();
    tracing::info!("signed out");
    Navigate::login()
}

/// Profile saved at login, if a session exists.
pub fn current_user<T: Transport, S: KeyValueStore>(api: &ApiClient<T, S>) -> Option<User> {
    let session = api.session().current()?;
    serde_json::from_value(session.user_info).ok()
}
