//! Generic create/edit page for any [`Draft`].
//!
//! SYSTEM CONTEXT
//! ==============
//! `/<page>/new` starts from an empty draft; `/<page>/:id/edit` loads the
//! record first. Reference selects are filled from their collections in the
//! same round. Saving goes through `FormController`, so a failed save keeps
//! whatever the user typed. The controller is bound to the route id: if the
//! record under edit fails to load, the form is not shown and cannot save.
//! A save that moves the record to another owner opens a confirmation
//! dialog first.

#[cfg(test)]
#[path = "resource_form_test.rs"]
mod resource_form_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use records::{Draft, Endpoint, FormField, Input, Record};
use workflow::loader::{ReferenceOptions, load_form_page};
use workflow::{ApiError, FormController, FormError, Navigate};

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::field_input::FieldInput;
use crate::components::layout::Layout;
use crate::util::auth::{gate_then, redirect_if_signed_out, redirect_signal};

pub(crate) fn form_title(endpoint: &Endpoint, id: Option<i64>) -> String {
    match id {
        Some(id) => format!("{} / Edit #{id}", endpoint.title),
        None => format!("{} / New", endpoint.title),
    }
}

/// The `:id` route parameter, when present and numeric.
pub(crate) fn parse_id(raw: Option<String>) -> Option<i64> {
    raw.and_then(|raw| raw.trim().parse().ok())
}

/// Load-error messages for reference selects, in a stable order.
fn option_errors(options: &ReferenceOptions) -> Vec<String> {
    let mut errors: Vec<String> = options.values().filter_map(|resource| resource.error.clone()).collect();
    errors.sort();
    errors
}

/// Dialog text for a save that reassigns `changes`.
pub(crate) fn reassign_prompt(changes: &[&str]) -> String {
    let fields = changes.iter().map(|label| label.to_lowercase()).collect::<Vec<_>>().join(", ");
    format!("Saving changes the {fields} of this record. Continue?")
}

/// Send the prepared submission and apply the outcome to `form`. An
/// unconfirmed change of owner lands in `reassigning` instead.
pub(crate) fn submit_form<D: Draft>(
    form: RwSignal<FormController<D>>,
    redirect: RwSignal<Option<Navigate>>,
    reassigning: RwSignal<Vec<&'static str>>,
) {
    let submission = match form.try_update(FormController::prepare) {
        Some(Ok(submission)) => submission,
        Some(Err(FormError::Unconfirmed(changes))) => {
            reassigning.set(changes);
            return;
        }
        _ => return,
    };
    leptos::task::spawn_local(async move {
        let result = match crate::net::api::client() {
            Some(api) => workflow::form::send(&api, &submission).await,
            None => Err(ApiError::Unreachable("API address is misconfigured".to_owned())),
        };
        match form.try_update(|f| f.finish(result)) {
            Some(Ok(next)) => redirect.set(Some(next)),
            Some(Err(err)) if err.requires_login() => redirect.set(Some(Navigate::login())),
            _ => {}
        }
    });
}

/// Confirmation shown while `reassigning` is non-empty. Confirming approves
/// the current draft and saves it.
pub(crate) fn reassign_dialog<D: Draft>(
    form: RwSignal<FormController<D>>,
    redirect: RwSignal<Option<Navigate>>,
    reassigning: RwSignal<Vec<&'static str>>,
) -> impl IntoView {
    let on_confirm = Callback::new(move |()| {
        reassigning.set(Vec::new());
        form.update(FormController::confirm_changes);
        submit_form(form, redirect, reassigning);
    });
    let on_cancel = Callback::new(move |()| reassigning.set(Vec::new()));
    let prompt = Signal::derive(move || reassigning.with(|changes| reassign_prompt(changes)));
    let busy = Signal::derive(move || form.with(FormController::is_busy));

    view! {
        <Show when=move || reassigning.with(|changes| !changes.is_empty())>
            <ConfirmDialog
                title="Confirm reassignment"
                message=prompt
                busy=busy
                confirm_label="Save"
                on_confirm=on_confirm
                on_cancel=on_cancel
            />
        </Show>
    }
}

/// Labelled inputs for every scalar field of `D`.
pub(crate) fn field_inputs<D: Draft>(
    form: RwSignal<FormController<D>>,
    options: RwSignal<ReferenceOptions>,
) -> impl IntoView {
    D::FIELDS
        .iter()
        .map(|field| {
            let field = *field;
            let spec = field.spec();
            let value = Signal::derive(move || form.with(|f| f.draft().value(field).to_owned()));
            let invalid = Signal::derive(move || form.with(|f| f.missing().contains(&field)));
            let choices = Signal::derive(move || match spec.input {
                Input::Reference(kind) => {
                    options.with(|all| all.get(&kind).map(|resource| resource.data.clone()).unwrap_or_default())
                }
                _ => Vec::new(),
            });
            let on_input = Callback::new(move |value: String| form.update(|f| f.set_field(field, value)));
            view! { <FieldInput spec=spec value=value options=choices invalid=invalid on_input=on_input/> }
        })
        .collect_view()
}

pub fn resource_form_page<D: Draft>() -> impl IntoView {
    let redirect = redirect_signal(use_navigate());
    let params = use_params_map();
    let form = RwSignal::new(FormController::<D>::for_route(parse_id(params.with_untracked(|p| p.get("id")))));
    let reassigning = RwSignal::new(Vec::<&'static str>::new());
    let options = RwSignal::new(ReferenceOptions::default());
    let load_error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);
    let endpoint = <D::Record as Record>::ENDPOINT;
    let record_id = move || parse_id(params.with(|p| p.get("id")));

    gate_then(redirect, move || {
        let id = record_id();
        loading.set(true);
        leptos::task::spawn_local(async move {
            let Some(api) = crate::net::api::client() else {
                loading.set(false);
                return;
            };
            let page = load_form_page::<D, _, _>(&api, id).await;
            form.set(page.controller(id));
            load_error.set(page.draft.error);
            options.set(page.options);
            loading.set(false);
            redirect_if_signed_out(redirect, api.session());
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit_form(form, redirect, reassigning);
    };

    let title = Signal::derive(move || form_title(&endpoint, record_id()));

    view! {
        <Layout title=title>
            <Show when=move || load_error.get().is_some()>
                <p class="page__error">{move || load_error.get().unwrap_or_default()}</p>
            </Show>
            {move || {
                option_errors(&options.get())
                    .into_iter()
                    .map(|error| view! { <p class="page__warning">{error}</p> })
                    .collect_view()
            }}
            <Show when=move || !loading.get() fallback=|| view! { <p class="page__loading">"Loading..."</p> }>
                <Show when=move || form.with(FormController::is_loaded)>
                    <form class="record-form" on:submit=on_submit>
                        {field_inputs(form, options)}
                        <Show when=move || form.with(|f| f.error().is_some())>
                            <p class="record-form__error">{move || form.with(|f| f.error().unwrap_or_default().to_owned())}</p>
                        </Show>
                        <div class="record-form__actions">
                            <a class="btn" href=endpoint.page>
                                "Cancel"
                            </a>
                            <button class="btn btn--primary" type="submit" disabled=move || form.with(FormController::is_busy)>
                                {move || if form.with(FormController::is_busy) { "Saving..." } else { "Save" }}
                            </button>
                        </div>
                    </form>
                </Show>
            </Show>
            {reassign_dialog(form, redirect, reassigning)}
        </Layout>
    }
}
