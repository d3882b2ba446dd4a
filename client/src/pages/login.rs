//! Username + password login page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use workflow::Navigate;
use workflow::auth::HOME_PAGE;

use crate::state::auth::AuthState;
use crate::util::auth::redirect_signal;

const MISSING_CREDENTIALS: &str = "Enter a username and password.";

/// Trim the username and require both fields. Passwords are sent verbatim.
fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    Ok((username.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let redirect = redirect_signal(use_navigate());
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Already signed in: skip the form.
    Effect::new(move || {
        if crate::net::api::session().is_authenticated() {
            redirect.set(Some(Navigate(HOME_PAGE.to_owned())));
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (user, pass) = match validate_login_input(&username.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        leptos::task::spawn_local(async move {
            let Some(api) = crate::net::api::client() else {
                info.set("Sign in is unavailable: the API address is misconfigured.".to_owned());
                busy.set(false);
                return;
            };
            match workflow::auth::login(&api, &user, &pass).await {
                Ok(profile) => {
                    auth.set(AuthState::signed_in(profile));
                    redirect.set(Some(Navigate(HOME_PAGE.to_owned())));
                }
                Err(e) => {
                    info.set(e.user_message());
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"School Admin"</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        autocomplete="username"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
