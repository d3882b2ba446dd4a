//! Page chrome: sidebar navigation and the main content column.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every authenticated page renders inside [`Layout`]. The sidebar reads the
//! current route and highlights entries through `state::nav`.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::AuthState;
use crate::state::nav::{MENU, active_section, is_active};

#[component]
pub fn Layout(#[prop(into)] title: Signal<String>, children: Children) -> impl IntoView {
    view! {
        <div class="admin-layout">
            <Sidebar/>
            <main class="admin-layout__main">
                <header class="admin-layout__header">
                    <h1>{move || title.get()}</h1>
                </header>
                {children()}
            </main>
        </div>
    }
}

/// Grouped navigation; the section holding the current page is expanded.
#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    let on_logout = move |_| {
        if let Some(api) = crate::net::api::client() {
            let to = workflow::auth::logout(&api);
            auth.set(AuthState::default());
            crate::util::auth::go(&navigate, &to);
        }
    };

    let sections = MENU
        .iter()
        .map(|section| {
            let open = move || active_section(&pathname.get()).is_some_and(|s| s.title == section.title);
            let items = section
                .items
                .iter()
                .map(|item| {
                    let active = move || is_active(item.path, &pathname.get());
                    view! {
                        <li>
                            <a href=item.path class="sidebar__link" class:sidebar__link--active=active>
                                {item.label}
                            </a>
                        </li>
                    }
                })
                .collect_view();
            view! {
                <div class="sidebar__section" class:sidebar__section--open=open>
                    <p class="sidebar__title">{section.title}</p>
                    <ul class="sidebar__items">{items}</ul>
                </div>
            }
        })
        .collect_view();

    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">"School Admin"</div>
            {sections}
            <div class="sidebar__footer">
                <span class="sidebar__user">{move || auth.get().display_name()}</span>
                <button class="btn sidebar__logout" on:click=on_logout>
                    "Logout"
                </button>
            </div>
        </nav>
    }
}
