//! Create/edit form state: draft, validation, submission.
//!
//! DESIGN
//! ======
//! The controller owns a typed [`Draft`]. Submitting is split in two so a UI
//! can drive it across an await point: [`FormController::prepare`] validates
//! and builds the request, [`FormController::finish`] folds the response back
//! in. [`FormController::submit`] does both against an [`ApiClient`].
//!
//! The controller is bound to the route's record id up front. Whether a save
//! is a POST or a PUT comes from that id, never from whether the record
//! happened to load: an edit form whose record is missing refuses to save.
//!
//! An update that moves the record to another owner (see
//! [`Draft::ownership_changes`]) is held back until
//! [`FormController::confirm_changes`] approves that exact draft.
//!
//! ERROR HANDLING
//! ==============
//! Validation failures never reach the network. Any failure leaves the draft
//! untouched so the user can correct and retry.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use records::{Draft, Record, ValidationError};
use serde_json::Value;

use crate::Navigate;
use crate::api::{ApiClient, ApiError, Method};
use crate::session::KeyValueStore;
use crate::transport::Transport;

const SAVE_ACTION: &str = "save";

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum FormError {
    #[error("{0}")]
    Validation(ValidationError),
    #[error("{0}")]
    Api(ApiError),
    /// A submission is already in flight.
    #[error("already saving")]
    Busy,
    /// Editing a record that never loaded.
    #[error("the record could not be loaded, so it cannot be saved")]
    NotLoaded,
    /// The update reassigns these fields and has not been confirmed.
    #[error("confirm changes to: {}", .0.join(", "))]
    Unconfirmed(Vec<&'static str>),
}

impl FormError {
    #[must_use]
    pub fn requires_login(&self) -> bool {
        matches!(self, Self::Api(err) if err.requires_login())
    }
}

/// One ready-to-send create or update request.
#[derive(Clone, Debug, PartialEq)]
pub struct Submission {
    pub method: Method,
    pub path: String,
    pub body: Value,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormController<D: Draft> {
    /// Record id from the route; `None` creates.
    target: Option<i64>,
    /// The record as loaded, for edits.
    original: Option<D>,
    /// Draft the user approved ownership changes for.
    confirmed: Option<D>,
    draft: D,
    missing: Vec<D::Field>,
    error: Option<String>,
    busy: bool,
}

impl<D: Draft> FormController<D> {
    /// A form for `draft`, editing when it carries an id.
    #[must_use]
    pub fn new(draft: D) -> Self {
        let mut form = Self::for_route(draft.id());
        form.load(draft);
        form
    }

    /// An empty form for the route's record. With `Some(id)` nothing can be
    /// saved until [`FormController::load`] supplies that record.
    #[must_use]
    pub fn for_route(id: Option<i64>) -> Self {
        Self {
            target: id,
            original: None,
            confirmed: None,
            draft: D::default(),
            missing: Vec::new(),
            error: None,
            busy: false,
        }
    }

    /// Install the fetched record (or the empty draft when creating). A draft
    /// for a different id than the route's is ignored.
    pub fn load(&mut self, draft: D) {
        if draft.id() != self.target {
            tracing::warn!(route = ?self.target, draft = ?draft.id(), "ignoring draft for another record");
            return;
        }
        self.original = self.target.map(|_| draft.clone());
        self.confirmed = None;
        self.draft = draft;
        self.missing.clear();
        self.error = None;
    }

    /// Whether the form can be saved: creating, or the record has loaded.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.target.is_none() || self.original.is_some()
    }

    pub fn target(&self) -> Option<i64> {
        self.target
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    /// For edits that span several fields at once (e.g. roster changes).
    pub fn draft_mut(&mut self) -> &mut D {
        &mut self.draft
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.target.is_some()
    }

    /// Ownership fields the draft changes relative to the loaded record.
    #[must_use]
    pub fn ownership_changes(&self) -> Vec<&'static str> {
        self.original.as_ref().map(|original| self.draft.ownership_changes(original)).unwrap_or_default()
    }

    /// Approve the current draft's ownership changes. Any later edit needs
    /// a fresh approval.
    pub fn confirm_changes(&mut self) {
        self.confirmed = Some(self.draft.clone());
    }

    /// Required fields flagged by the last validation.
    pub fn missing(&self) -> &[D::Field] {
        &self.missing
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Overwrite one field; clears that field's missing flag.
    pub fn set_field(&mut self, field: D::Field, value: String) {
        self.draft.set_field(field, value);
        self.missing.retain(|f| *f != field);
    }

    /// Required fields that are blank. Also remembered for display.
    pub fn validate(&mut self) -> Vec<D::Field> {
        self.missing = self.draft.missing();
        self.missing.clone()
    }

    /// Validate and coerce the draft into a request, marking the form busy.
    ///
    /// # Errors
    ///
    /// `Busy` while a previous submission is unresolved, `NotLoaded` for an
    /// edit whose record never arrived, `Validation` when fields are missing
    /// or malformed, `Unconfirmed` for an unapproved change of owner. None of
    /// them touches the draft.
    pub fn prepare(&mut self) -> Result<Submission, FormError> {
        if self.busy {
            return Err(FormError::Busy);
        }
        if !self.is_loaded() {
            let err = FormError::NotLoaded;
            self.error = Some(err.to_string());
            return Err(err);
        }
        let missing = self.validate();
        if !missing.is_empty() {
            let err = ValidationError::for_fields(&missing);
            self.error = Some(err.to_string());
            return Err(FormError::Validation(err));
        }
        let payload = self.draft.to_payload().map_err(|err| {
            self.error = Some(err.to_string());
            FormError::Validation(err)
        })?;
        let body = serde_json::to_value(&payload).map_err(|e| {
            let err = ApiError::Decode(e.to_string());
            self.error = Some(err.user_message(SAVE_ACTION));
            FormError::Api(err)
        })?;

        let changes = self.ownership_changes();
        if !changes.is_empty() && self.confirmed.as_ref() != Some(&self.draft) {
            return Err(FormError::Unconfirmed(changes));
        }

        let endpoint = <D::Record as Record>::ENDPOINT;
        let (method, path) = match self.target {
            Some(id) => (Method::Put, endpoint.item(id)),
            None => (Method::Post, endpoint.collection.to_owned()),
        };
        self.error = None;
        self.busy = true;
        Ok(Submission { method, path, body })
    }

    /// Apply the server's answer to a prepared submission.
    ///
    /// # Errors
    ///
    /// Returns the API failure; the draft is kept and the display message
    /// stored in [`FormController::error`].
    pub fn finish(&mut self, result: Result<Value, ApiError>) -> Result<Navigate, FormError> {
        self.busy = false;
        match result {
            Ok(_) => {
                self.error = None;
                self.confirmed = None;
                Ok(Navigate(<D::Record as Record>::ENDPOINT.page.to_owned()))
            }
            Err(err) => {
                tracing::warn!(error = %err, "form submission failed");
                self.error = Some(err.user_message(SAVE_ACTION));
                Err(FormError::Api(err))
            }
        }
    }

    /// Validate, send exactly one POST or PUT, and resolve.
    ///
    /// # Errors
    ///
    /// See [`FormController::prepare`] and [`FormController::finish`].
    pub async fn submit<T: Transport, S: KeyValueStore>(&mut self, api: &ApiClient<T, S>) -> Result<Navigate, FormError> {
        let submission = self.prepare()?;
        let result = send(api, &submission).await;
        self.finish(result)
    }
}

/// Send a prepared submission.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn send<T: Transport, S: KeyValueStore>(
    api: &ApiClient<T, S>,
    submission: &Submission,
) -> Result<Value, ApiError> {
    api.request(submission.method, &submission.path, Some(&submission.body), true).await
}
