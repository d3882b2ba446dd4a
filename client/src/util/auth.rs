//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior:
//! gate on mount before any fetch, and leave for `/login` whenever a load or
//! submission reports the session is gone.
//!
//! DESIGN
//! ======
//! Async work and callbacks never hold the router's navigate function. They
//! write a [`Navigate`] into a page-level signal, and one effect per page
//! follows it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use workflow::{KeyValueStore, LoadStatus, Navigate, SessionStore};

/// Where a settled load should send the user, if anywhere.
pub fn redirect_for(status: LoadStatus) -> Option<Navigate> {
    match status {
        LoadStatus::LoginRequired => Some(Navigate::login()),
        LoadStatus::Ready | LoadStatus::Failed => None,
    }
}

/// Follow a workflow navigation request.
pub fn go<F>(navigate: &F, to: &Navigate)
where
    F: Fn(&str, NavigateOptions),
{
    navigate(to.path(), NavigateOptions::default());
}

/// Page-level navigation target, followed by an effect.
pub fn redirect_signal<F>(navigate: F) -> RwSignal<Option<Navigate>>
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    let target = RwSignal::new(None::<Navigate>);
    Effect::new(move || {
        if let Some(to) = target.get() {
            go(&navigate, &to);
        }
    });
    target
}

/// Record the redirect a settled load asks for.
pub fn redirect_on(target: RwSignal<Option<Navigate>>, status: LoadStatus) {
    if let Some(to) = redirect_for(status) {
        target.set(Some(to));
    }
}

/// Run `load` on the client once the session gate passes; otherwise
/// redirect to `/login` without fetching anything.
pub fn gate_then<F>(target: RwSignal<Option<Navigate>>, load: F)
where
    F: Fn() + 'static,
{
    Effect::new(move || match workflow::loader::gate(&crate::net::api::session()) {
        Ok(()) => load(),
        Err(to) => target.set(Some(to)),
    });
}

/// After an API call: a 401 clears the stored session, so a missing token
/// means the user has to sign in again.
pub fn redirect_if_signed_out<S: KeyValueStore>(target: RwSignal<Option<Navigate>>, session: &SessionStore<S>) {
    if let Err(to) = workflow::loader::gate(session) {
        target.set(Some(to));
    }
}
