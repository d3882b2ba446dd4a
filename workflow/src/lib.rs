//! The page workflow shared by every admin screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! Session store -> resource loader -> form controller / list view -> API
//! client -> backend. The browser UI (`client`) and the terminal front end
//! (`cli`) plug in their own [`transport::Transport`] and
//! [`session::KeyValueStore`]; everything else lives here so both behave
//! identically and can be tested without a network.

pub mod api;
pub mod auth;
pub mod config;
pub mod form;
pub mod listing;
pub mod loader;
pub mod session;
pub mod transport;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use api::{ApiClient, ApiError, ConfirmedDelete, Method};
pub use config::{ApiConfig, ConfigError};
pub use form::{FormController, FormError, Submission};
pub use listing::{DeleteFlow, DeleteOutcome, DeleteState, ListView};
pub use loader::{LoadStatus, Resource};
pub use session::{KeyValueStore, MemoryStore, Session, SessionStore};
pub use transport::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};

/// Route of the login screen; every auth failure ends here.
pub const LOGIN_PAGE: &str = "/login";

/// A page transition requested by the workflow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigate(pub String);

impl Navigate {
    #[must_use]
    pub fn login() -> Self {
        Self(LOGIN_PAGE.to_owned())
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.0
    }
}
