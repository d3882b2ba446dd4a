//! Collection response normalization.
//!
//! The backend returns collections either wrapped as `{"results": [...]}`
//! (paginated) or as a bare JSON array. Every list response passes through
//! [`ListEnvelope`] so callers only ever see `Vec<T>`.

#[cfg(test)]
#[path = "envelope_test.rs"]
mod envelope_test;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Either collection shape the backend produces.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Paginated {
        results: Vec<T>,
        #[serde(default)]
        count: Option<u64>,
        #[serde(default)]
        next: Option<String>,
    },
    Bare(Vec<T>),
}

impl<T> ListEnvelope<T> {
    /// Drop pagination metadata and keep the rows.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Paginated { results, .. } => results,
            Self::Bare(items) => items,
        }
    }
}

/// Decode a collection body of either shape into its rows.
///
/// # Errors
///
/// Returns the serde error when the body is neither a bare array nor an
/// object carrying a `results` array of `T`.
pub fn normalize<T: DeserializeOwned>(body: Value) -> Result<Vec<T>, serde_json::Error> {
    serde_json::from_value::<ListEnvelope<T>>(body).map(ListEnvelope::into_items)
}
