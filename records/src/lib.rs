//! Typed records and form drafts for the school administration backend.
//!
//! This crate owns the JSON shapes shared by the `workflow`, `client` and `cli`
//! crates. Every backend entity has a read-side [`Record`] type and, where the
//! UI can edit it, a [`Draft`] holding form-shape strings with an explicit
//! mapping to the API payload.

pub mod draft;
pub mod entities;
pub mod envelope;
pub mod selection;

pub use draft::{Coercer, Draft, FieldSpec, FormField, Input, ValidationError};
pub use entities::*;
pub use envelope::ListEnvelope;
pub use selection::LinkedSelection;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Route information for one backend collection and its admin pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Endpoint {
    /// Collection path on the API, with trailing slash (e.g. `/api/academics/students/`).
    pub collection: &'static str,
    /// List page path in the admin UI (e.g. `/students`).
    pub page: &'static str,
    /// Human-readable plural title.
    pub title: &'static str,
}

impl Endpoint {
    /// API path for a single item.
    #[must_use]
    pub fn item(&self, id: i64) -> String {
        format!("{}{id}/", self.collection)
    }

    /// Admin page for creating a new item.
    #[must_use]
    pub fn new_page(&self) -> String {
        format!("{}/new", self.page)
    }

    /// Admin page for editing an existing item.
    #[must_use]
    pub fn edit_page(&self, id: i64) -> String {
        format!("{}/{id}/edit", self.page)
    }
}

/// A backend entity as returned by its collection endpoint.
pub trait Record: Clone + PartialEq + std::fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Where the entity lives on the API and in the UI.
    const ENDPOINT: Endpoint;
    /// Table headers, aligned with [`Record::cells`].
    const COLUMNS: &'static [&'static str];

    fn id(&self) -> i64;

    /// Short display label used in selects and confirmation prompts.
    fn label(&self) -> String;

    /// Table cell text, one per entry in [`Record::COLUMNS`].
    fn cells(&self) -> Vec<String>;

    /// Fields matched by the list filter.
    fn search_fields(&self) -> Vec<&str>;
}

/// Collections a form field can reference through a select input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RefKind {
    Student,
    Teacher,
    Classroom,
    Course,
    Program,
    Exam,
    School,
    Branch,
    Role,
}

impl RefKind {
    #[must_use]
    pub fn endpoint(self) -> Endpoint {
        match self {
            Self::Student => Student::ENDPOINT,
            Self::Teacher => Teacher::ENDPOINT,
            Self::Classroom => Classroom::ENDPOINT,
            Self::Course => Course::ENDPOINT,
            Self::Program => Program::ENDPOINT,
            Self::Exam => Exam::ENDPOINT,
            Self::School => School::ENDPOINT,
            Self::Branch => Branch::ENDPOINT,
            Self::Role => Role::ENDPOINT,
        }
    }
}

/// One `(id, label)` entry for a reference select.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, serde::Deserialize)]
pub struct RefOption {
    pub id: i64,
    pub label: String,
}

impl RefOption {
    #[must_use]
    pub fn from_record<R: Record>(record: &R) -> Self {
        Self { id: record.id(), label: record.label() }
    }
}
