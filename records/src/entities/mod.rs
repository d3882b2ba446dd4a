//! Backend entities, their forms and payloads.
//!
//! One module per admin screen family. Each module defines the read-side
//! record, a field enum, the draft, and the payload the API accepts.

mod attendance;
mod classroom;
mod course;
mod enrollment;
mod exam;
mod program;
mod school;
mod student;
mod teacher;
mod user;

pub use attendance::*;
pub use classroom::*;
pub use course::*;
pub use enrollment::*;
pub use exam::*;
pub use program::*;
pub use school::*;
pub use student::*;
pub use teacher::*;
pub use user::*;

/// Table cell for a foreign key.
pub(crate) fn ref_cell(id: Option<i64>) -> String {
    id.map_or_else(|| "-".to_owned(), |id| format!("#{id}"))
}

pub(crate) fn opt_cell(value: Option<&str>) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or("-").to_owned()
}
