//! Read-only classroom view: the classroom, then its program's name.

#[cfg(test)]
#[path = "classroom_detail_test.rs"]
mod classroom_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use records::{Classroom, Record};
use workflow::loader::{ClassroomDetail, load_classroom_detail};

use crate::components::layout::Layout;
use crate::pages::resource_form::parse_id;
use crate::util::auth::{gate_then, redirect_if_signed_out, redirect_signal};

/// `(label, value)` rows for the detail table.
fn detail_rows(detail: &ClassroomDetail) -> Vec<(&'static str, String)> {
    let Some(classroom) = detail.classroom.data.as_ref() else {
        return Vec::new();
    };
    let program = match (&detail.program_name.data, classroom.program) {
        (Some(name), _) => name.clone(),
        (None, Some(id)) if detail.program_name.loading => format!("#{id} ..."),
        (None, Some(id)) => format!("#{id}"),
        (None, None) => "-".to_owned(),
    };
    vec![
        ("Name", classroom.name.clone()),
        ("Program", program),
        ("Teacher", classroom.teacher.map_or_else(|| "-".to_owned(), |id| format!("#{id}"))),
        ("Students", classroom.students.len().to_string()),
    ]
}

#[component]
pub fn ClassroomDetailPage() -> impl IntoView {
    let redirect = redirect_signal(use_navigate());
    let params = use_params_map();
    let detail = RwSignal::new(ClassroomDetail::default());
    let loading = RwSignal::new(false);
    let record_id = move || parse_id(params.with(|p| p.get("id")));

    gate_then(redirect, move || {
        let Some(id) = record_id() else {
            detail.update(|d| d.classroom.error = Some("Unknown classroom.".to_owned()));
            return;
        };
        loading.set(true);
        leptos::task::spawn_local(async move {
            let Some(api) = crate::net::api::client() else {
                loading.set(false);
                return;
            };
            detail.set(load_classroom_detail(&api, id).await);
            loading.set(false);
            redirect_if_signed_out(redirect, api.session());
        });
    });

    let title = Signal::derive(move || {
        detail.with(|d| match &d.classroom.data {
            Some(classroom) => format!("{} / {}", Classroom::ENDPOINT.title, classroom.name),
            None => Classroom::ENDPOINT.title.to_owned(),
        })
    });

    let errors = move || {
        detail.with(|d| {
            [&d.classroom.error, &d.program_name.error]
                .into_iter()
                .flatten()
                .map(|error| view! { <p class="page__error">{error.clone()}</p> })
                .collect_view()
        })
    };

    let rows = move || {
        detail.with(|d| {
            detail_rows(d)
                .into_iter()
                .map(|(label, value)| {
                    view! {
                        <tr>
                            <th>{label}</th>
                            <td>{value}</td>
                        </tr>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <Layout title=title>
            {errors}
            <Show when=move || !loading.get() fallback=|| view! { <p class="page__loading">"Loading..."</p> }>
                <table class="table table--detail">
                    <tbody>{rows}</tbody>
                </table>
                <div class="record-form__actions">
                    <a class="btn" href=Classroom::ENDPOINT.page>
                        "Back"
                    </a>
                    {move || {
                        record_id()
                            .map(|id| {
                                view! {
                                    <a class="btn btn--primary" href=Classroom::ENDPOINT.edit_page(id)>
                                        "Edit"
                                    </a>
                                }
                            })
                    }}
                </div>
            </Show>
        </Layout>
    }
}
