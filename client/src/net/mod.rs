//! Networking for the browser build.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` adapts `gloo-net` to the workflow [`workflow::Transport`]
//! seam; `api` assembles the per-page API client from the baked-in config
//! and the `localStorage` session.

pub mod api;
pub mod transport;
