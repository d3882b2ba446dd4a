//! List pages: client-side filtering and the delete confirmation flow.
//!
//! DESIGN
//! ======
//! The fetched rows are never mutated by filtering; [`ListView::visible`]
//! recomputes from the query every time. Deleting goes through
//! [`DeleteFlow`], the only place a [`ConfirmedDelete`] can be minted, so a
//! DELETE is never sent without an explicit confirm.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use records::{Endpoint, Record};

use crate::api::{ApiClient, ApiError, ConfirmedDelete};
use crate::loader::{LoadStatus, Resource, load_list};
use crate::session::KeyValueStore;
use crate::transport::Transport;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeleteState {
    #[default]
    Idle,
    ConfirmPending {
        id: i64,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(i64),
    Failed(String),
    Cancelled,
}

/// `Idle -> ConfirmPending(id) -> Idle`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeleteFlow {
    state: DeleteState,
}

impl DeleteFlow {
    #[must_use]
    pub fn state(&self) -> DeleteState {
        self.state
    }

    /// Row awaiting confirmation, if any.
    #[must_use]
    pub fn pending(&self) -> Option<i64> {
        match self.state {
            DeleteState::ConfirmPending { id } => Some(id),
            DeleteState::Idle => None,
        }
    }

    /// Ask to delete `id`. Replaces any earlier pending request.
    pub fn request(&mut self, id: i64) {
        self.state = DeleteState::ConfirmPending { id };
    }

    pub fn cancel(&mut self) -> DeleteOutcome {
        self.state = DeleteState::Idle;
        DeleteOutcome::Cancelled
    }

    /// Consume the pending request. `None` when nothing was pending.
    pub fn confirm(&mut self, endpoint: &Endpoint) -> Option<ConfirmedDelete> {
        let id = self.pending()?;
        self.state = DeleteState::Idle;
        Some(ConfirmedDelete::new(id, endpoint.item(id)))
    }
}

/// Case-insensitive substring match over a record's search fields.
/// An empty or blank query matches everything.
#[must_use]
pub fn matches_query<R: Record>(record: &R, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    record.search_fields().iter().any(|field| field.to_lowercase().contains(&needle))
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListView<R> {
    pub rows: Resource<Vec<R>>,
    pub query: String,
    pub delete: DeleteFlow,
    pub delete_error: Option<String>,
}

impl<R> Default for ListView<R> {
    fn default() -> Self {
        Self { rows: Resource::new(Vec::new()), query: String::new(), delete: DeleteFlow::default(), delete_error: None }
    }
}

impl<R: Record> ListView<R> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// (Re)load every row.
    pub async fn load<T: Transport, S: KeyValueStore>(&mut self, api: &ApiClient<T, S>) -> LoadStatus {
        self.rows.start();
        let result = load_list::<R, _, _>(api).await;
        let action = format!("load {}", R::ENDPOINT.title.to_lowercase());
        self.rows.resolve(result, &action)
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Rows matching the current query, in fetched order.
    #[must_use]
    pub fn visible(&self) -> Vec<&R> {
        self.rows.data.iter().filter(|row| matches_query(*row, &self.query)).collect()
    }

    #[must_use]
    pub fn row(&self, id: i64) -> Option<&R> {
        self.rows.data.iter().find(|row| row.id() == id)
    }

    pub fn request_delete(&mut self, id: i64) {
        self.delete_error = None;
        self.delete.request(id);
    }

    pub fn cancel_delete(&mut self) -> DeleteOutcome {
        self.delete.cancel()
    }

    /// Drop the pending delete without sending it because the request could
    /// not be made. The reason is shown like a failed delete.
    pub fn abandon_delete(&mut self, message: impl Into<String>) -> DeleteOutcome {
        let message = message.into();
        if self.delete.pending().is_none() {
            return DeleteOutcome::Cancelled;
        }
        self.delete.cancel();
        self.delete_error = Some(message.clone());
        DeleteOutcome::Failed(message)
    }

    /// Take the pending confirmation as a DELETE permit.
    pub fn confirm_delete(&mut self) -> Option<ConfirmedDelete> {
        self.delete.confirm(&R::ENDPOINT)
    }

    /// Apply the DELETE response. The row is only removed on success.
    pub fn finish_delete(&mut self, id: i64, result: Result<(), ApiError>) -> DeleteOutcome {
        match result {
            Ok(()) => {
                self.rows.data.retain(|row| row.id() != id);
                self.delete_error = None;
                DeleteOutcome::Deleted(id)
            }
            Err(err) => {
                tracing::warn!(id, error = %err, "delete failed");
                let message = err.user_message("delete");
                self.delete_error = Some(message.clone());
                DeleteOutcome::Failed(message)
            }
        }
    }

    /// Confirm the pending delete and send it. Without a pending request
    /// nothing is sent and the outcome is `Cancelled`.
    pub async fn confirm_and_delete<T: Transport, S: KeyValueStore>(&mut self, api: &ApiClient<T, S>) -> DeleteOutcome {
        let Some(confirmed) = self.confirm_delete() else {
            return DeleteOutcome::Cancelled;
        };
        let id = confirmed.id();
        let result = api.delete(confirmed).await;
        self.finish_delete(id, result)
    }
}
