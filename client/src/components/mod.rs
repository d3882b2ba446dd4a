//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render admin chrome and form controls while reading/writing
//! shared state from Leptos context providers.

pub mod confirm_dialog;
pub mod field_input;
pub mod layout;
