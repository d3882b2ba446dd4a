//! CLI error type: every failure ends up as one line on stderr.

use workflow::auth::LoginError;
use workflow::{ApiError, ConfigError, FormError};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{}", .0.user_message())]
    Login(#[from] LoginError),
    #[error("{0}")]
    Api(#[from] ApiError),
    #[error("{0}")]
    Form(#[from] FormError),
    #[error("not signed in; run `school-cli login` first")]
    NotSignedIn,
    #[error("invalid --set `{0}`: expected field=value")]
    InvalidAssignment(String),
    #[error("unknown field `{field}` for {kind} (expected one of: {expected})")]
    UnknownField { kind: &'static str, field: String, expected: String },
    /// A load or delete failed; carries the message the web UI would show.
    #[error("{0}")]
    Failed(String),
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code: 2 for usage problems, 1 for everything else.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidAssignment(_) | Self::UnknownField { .. } | Self::Config(_) => 2,
            _ => 1,
        }
    }
}
