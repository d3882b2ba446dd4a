//! Classroom create/edit page with a student roster.
//!
//! SYSTEM CONTEXT
//! ==============
//! Same shape as the generic form page, plus a roster: pick a student from
//! the select to add them, press the chip's button to drop them. The roster
//! keeps selection order and never holds the same student twice. Saving an
//! existing classroom whose roster, program or teacher changed asks for
//! confirmation first.

#[cfg(test)]
#[path = "classroom_form_test.rs"]
mod classroom_form_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use records::{Classroom, ClassroomDraft, Record, Student};
use workflow::FormController;
use workflow::loader::{ReferenceOptions, load_classroom_edit};

use crate::components::layout::Layout;
use crate::pages::resource_form::{field_inputs, form_title, parse_id, reassign_dialog, submit_form};
use crate::util::auth::{gate_then, redirect_if_signed_out, redirect_signal};

/// Students that can still be added to the roster.
fn roster_candidates(students: &[Student], draft: &ClassroomDraft) -> Vec<(i64, String)> {
    students
        .iter()
        .filter(|student| !draft.students.contains(student.id))
        .map(|student| (student.id, student.full_name()))
        .collect()
}

/// Add the student picked in the select, by id.
fn add_picked(draft: &mut ClassroomDraft, students: &[Student], picked: &str) -> bool {
    let Ok(id) = picked.trim().parse::<i64>() else {
        return false;
    };
    students.iter().find(|student| student.id == id).is_some_and(|student| draft.add_student(student))
}

#[component]
pub fn ClassroomFormPage() -> impl IntoView {
    let redirect = redirect_signal(use_navigate());
    let params = use_params_map();
    let form =
        RwSignal::new(FormController::<ClassroomDraft>::for_route(parse_id(params.with_untracked(|p| p.get("id")))));
    let reassigning = RwSignal::new(Vec::<&'static str>::new());
    let options = RwSignal::new(ReferenceOptions::default());
    let students = RwSignal::new(Vec::<Student>::new());
    let errors = RwSignal::new(Vec::<String>::new());
    let loading = RwSignal::new(false);
    let endpoint = Classroom::ENDPOINT;
    let record_id = move || parse_id(params.with(|p| p.get("id")));

    gate_then(redirect, move || {
        let id = record_id();
        loading.set(true);
        leptos::task::spawn_local(async move {
            let Some(api) = crate::net::api::client() else {
                loading.set(false);
                return;
            };
            let edit = load_classroom_edit(&api, id).await;
            form.set(edit.controller(id));
            options.set(edit.options());
            errors.set(
                [&edit.classroom.error, &edit.students.error, &edit.teachers.error, &edit.programs.error]
                    .into_iter()
                    .flatten()
                    .cloned()
                    .collect(),
            );
            students.set(edit.students.data);
            loading.set(false);
            redirect_if_signed_out(redirect, api.session());
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit_form(form, redirect, reassigning);
    };

    let on_pick = move |ev: leptos::ev::Event| {
        let picked = event_target_value(&ev);
        students.with_untracked(|all| form.update(|f| {
            add_picked(f.draft_mut(), all, &picked);
        }));
    };

    let candidates = move || {
        let draft_candidates = students.with(|all| form.with(|f| roster_candidates(all, f.draft())));
        draft_candidates
            .into_iter()
            .map(|(id, name)| view! { <option value=id.to_string()>{name}</option> })
            .collect_view()
    };

    let roster = move || {
        form.with(|f| {
            f.draft()
                .students
                .iter()
                .map(|(id, name)| {
                    let name = name.to_owned();
                    view! {
                        <li class="roster__item">
                            <span>{name}</span>
                            <button
                                class="btn btn--small"
                                type="button"
                                on:click=move |_| form.update(|f| {
                                    f.draft_mut().remove_student(id);
                                })
                            >
                                "Remove"
                            </button>
                        </li>
                    }
                })
                .collect_view()
        })
    };

    let title = Signal::derive(move || form_title(&endpoint, record_id()));

    view! {
        <Layout title=title>
            {move || errors.get().into_iter().map(|error| view! { <p class="page__error">{error}</p> }).collect_view()}
            <Show when=move || !loading.get() fallback=|| view! { <p class="page__loading">"Loading..."</p> }>
                <Show when=move || form.with(FormController::is_loaded)>
                    <form class="record-form" on:submit=on_submit>
                        {field_inputs(form, options)}
                        <fieldset class="roster">
                            <legend>"Students"</legend>
                            <select class="field__input" prop:value="" on:change=on_pick>
                                <option value="">"Add student..."</option>
                                {candidates}
                            </select>
                            <ul class="roster__list">{roster}</ul>
                        </fieldset>
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
