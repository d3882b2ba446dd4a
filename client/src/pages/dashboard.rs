//! Dashboard: collection counts and shortcuts into each section.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. The four headline counts load
//! concurrently and settle independently, so one failing collection leaves
//! the others on screen.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use records::{Classroom, Course, Record, Student, Teacher};
use workflow::loader::load_list;
use workflow::{ApiError, LoadStatus, Resource};

use crate::components::layout::Layout;
use crate::state::auth::AuthState;
use crate::util::auth::{gate_then, redirect_on, redirect_signal};

#[derive(Clone, Debug, PartialEq)]
struct Stat {
    label: &'static str,
    path: &'static str,
    count: Resource<Option<usize>>,
}

fn stat<R: Record>() -> Stat {
    Stat { label: R::ENDPOINT.title, path: R::ENDPOINT.page, count: Resource::default() }
}

fn counted<R>(result: Result<Vec<R>, ApiError>) -> Result<Option<usize>, ApiError> {
    result.map(|rows| Some(rows.len()))
}

fn stat_text(count: &Resource<Option<usize>>) -> String {
    if count.loading {
        return "...".to_owned();
    }
    count.data.map_or_else(|| "-".to_owned(), |n| n.to_string())
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let redirect = redirect_signal(use_navigate());
    let stats = RwSignal::new(vec![stat::<Student>(), stat::<Teacher>(), stat::<Classroom>(), stat::<Course>()]);

    gate_then(redirect, move || {
        stats.update(|all| all.iter_mut().for_each(|s| s.count.start()));
        leptos::task::spawn_local(async move {
            let Some(api) = crate::net::api::client() else {
                return;
            };
            let (students, teachers, classrooms, courses) = futures::join!(
                load_list::<Student, _, _>(&api),
                load_list::<Teacher, _, _>(&api),
                load_list::<Classroom, _, _>(&api),
                load_list::<Course, _, _>(&api),
            );
            let results = [counted(students), counted(teachers), counted(classrooms), counted(courses)];
            let mut worst = LoadStatus::Ready;
            stats.update(|all| {
                for (stat, result) in all.iter_mut().zip(results) {
                    let action = format!("load {}", stat.label.to_lowercase());
                    if stat.count.resolve(result, &action) == LoadStatus::LoginRequired {
                        worst = LoadStatus::LoginRequired;
                    }
                }
            });
            redirect_on(redirect, worst);
        });
    });

    view! {
        <Layout title="Dashboard".to_owned()>
            <p class="dashboard__welcome">"Welcome, " {move || auth.get().display_name()}</p>
            <div class="dashboard__cards">
                {move || {
                    stats
                        .get()
                        .into_iter()
                        .map(|stat| {
                            view! {
                                <a class="stat-card" href=stat.path>
                                    <span class="stat-card__value">{stat_text(&stat.count)}</span>
                                    <span class="stat-card__label">{stat.label}</span>
                                    {stat
                                        .count
                                        .error
                                        .map(|error| view! { <span class="stat-card__error">{error}</span> })}
                                </a>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </Layout>
    }
}
