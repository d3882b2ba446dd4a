//! Client-side state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shared signals provided through Leptos context. Page data lives in the
//! workflow types each page owns; only cross-page state is kept here.

pub mod auth;
pub mod nav;
