//! Generic list page: filter box, table, edit links, delete confirmation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once per collection from the router as
//! `resource_list_page::<R>`. All state lives in one
//! `RwSignal<ListView<R>>`; the async steps only touch the signal between
//! awaits.

#[cfg(test)]
#[path = "resource_list_test.rs"]
mod resource_list_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use records::{Classroom, Endpoint, Record};
use workflow::loader::load_list;
use workflow::{ListView, LoadStatus};

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::layout::Layout;
use crate::util::auth::{gate_then, redirect_on, redirect_signal};

const UNREACHABLE_API: &str = "Could not delete: the API address is misconfigured.";

fn load_action(endpoint: &Endpoint) -> String {
    format!("load {}", endpoint.title.to_lowercase())
}

/// Prompt shown before deleting a row.
fn delete_prompt(label: Option<&str>) -> String {
    match label {
        Some(label) if !label.trim().is_empty() => format!("Delete \"{label}\"? This cannot be undone."),
        _ => "Delete this record? This cannot be undone.".to_owned(),
    }
}

/// Read-only page for a row, for collections that have one.
fn detail_page(endpoint: &Endpoint, id: i64) -> Option<String> {
    (*endpoint == Classroom::ENDPOINT).then(|| format!("{}/{id}", endpoint.page))
}

fn count_text(visible: usize, total: usize) -> String {
    if visible == total { format!("{total} total") } else { format!("{visible} of {total}") }
}

pub fn resource_list_page<R: Record>() -> impl IntoView {
    let redirect = redirect_signal(use_navigate());
    let list = RwSignal::new(ListView::<R>::new());
    let deleting = RwSignal::new(false);
    let endpoint = R::ENDPOINT;

    gate_then(redirect, move || {
        list.update(|view| view.rows.start());
        leptos::task::spawn_local(async move {
            let Some(api) = crate::net::api::client() else {
                return;
            };
            let result = load_list::<R, _, _>(&api).await;
            if let Some(status) = list.try_update(|view| view.rows.resolve(result, &load_action(&endpoint))) {
                redirect_on(redirect, status);
            }
        });
    });

    let on_cancel = Callback::new(move |()| {
        list.update(|view| {
            view.cancel_delete();
        });
    });

    let on_confirm = Callback::new(move |()| {
        if deleting.get_untracked() {
            return;
        }
        let Some(api) = crate::net::api::client() else {
            list.update(|view| {
                view.abandon_delete(UNREACHABLE_API);
            });
            return;
        };
        let Some(confirmed) = list.try_update(ListView::confirm_delete).flatten() else {
            return;
        };
        deleting.set(true);
        leptos::task::spawn_local(async move {
            let id = confirmed.id();
            let result = api.delete(confirmed).await;
            let status = match &result {
                Err(err) if err.requires_login() => LoadStatus::LoginRequired,
                _ => LoadStatus::Ready,
            };
            list.update(|view| {
                view.finish_delete(id, result);
            });
            deleting.set(false);
            redirect_on(redirect, status);
        });
    });

    let prompt = Signal::derive(move || {
        list.with(|view| delete_prompt(view.delete.pending().and_then(|id| view.row(id)).map(R::label).as_deref()))
    });

    let rows = move || {
        list.with(|view| {
            view.visible()
                .into_iter()
                .map(|row| {
                    let id = row.id();
                    let cells = row.cells().into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view();
                    view! {
                        <tr>
                            {cells}
                            <td class="table__actions">
                                {detail_page(&endpoint, id)
                                    .map(|href| view! { <a class="btn" href=href>"View"</a> })}
                                <a class="btn" href=endpoint.edit_page(id)>
                                    "Edit"
                                </a>
                                <button class="btn btn--danger" on:click=move |_| list.update(|v| v.request_delete(id))>
                                    "Delete"
                                </button>
                            </td>
                        </tr>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <Layout title=endpoint.title.to_owned()>
            <div class="list-page__toolbar">
                <input
                    class="list-page__filter"
                    type="search"
                    placeholder="Filter..."
                    prop:value=move || list.with(|view| view.query.clone())
                    on:input=move |ev| list.update(|view| view.set_query(event_target_value(&ev)))
                />
                <span class="list-page__count">
                    {move || list.with(|view| count_text(view.visible().len(), view.rows.data.len()))}
                </span>
                <a class="btn btn--primary" href=endpoint.new_page()>
                    "New"
                </a>
            </div>
            <Show when=move || list.with(|view| view.rows.error.is_some())>
                <p class="page__error">{move || list.with(|view| view.rows.error.clone().unwrap_or_default())}</p>
            </Show>
            <Show when=move || list.with(|view| view.delete_error.is_some())>
                <p class="page__error">{move || list.with(|view| view.delete_error.clone().unwrap_or_default())}</p>
            </Show>
            <Show
                when=move || !list.with(|view| view.rows.loading)
                fallback=|| view! { <p class="page__loading">"Loading..."</p> }
            >
                <table class="table">
                    <thead>
                        <tr>
                            {R::COLUMNS.iter().map(|column| view! { <th>{*column}</th> }).collect_view()}
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </Show>
            <Show when=move || list.with(|view| view.delete.pending().is_some())>
                <ConfirmDialog
                    title=format!("Delete from {}", endpoint.title)
                    message=prompt
                    busy=deleting
                    on_confirm=on_confirm
                    on_cancel=on_cancel
                />
            </Show>
        </Layout>
    }
}
