//! Root application component with routing and context providers.
//!
//! Every collection gets the same three routes under its list page:
//! `/<page>`, `/<page>/new` and `/<page>/:id/edit`. Classrooms swap in their
//! own form (for the roster) and add a read-only `/classrooms/:id` view.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Outlet, ParentRoute, Route, Router, Routes};
use leptos_router::{ParamSegment, StaticSegment};
use records::{
    Attendance, AttendanceDraft, Branch, BranchDraft, Classroom, Course, CourseDraft, Enrollment, EnrollmentDraft, Exam,
    ExamDraft, ExamResult, ExamResultDraft, Program, ProgramDraft, Record, Role, RoleDraft, School, SchoolDraft, Student,
    StudentDraft, Teacher, TeacherDraft, User, UserDraft,
};

use crate::pages::classroom_detail::ClassroomDetailPage;
use crate::pages::classroom_form::ClassroomFormPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::login::LoginPage;
use crate::pages::resource_form::resource_form_page;
use crate::pages::resource_list::resource_list_page;
use crate::state::auth::AuthState;

/// Router segment for a collection's list page (`/students` -> `students`).
fn segment<R: Record>() -> StaticSegment<&'static str> {
    let page = R::ENDPOINT.page;
    StaticSegment(page.strip_prefix('/').unwrap_or(page))
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the signed-in user and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    // Storage only exists in the browser; effects never run during SSR.
    Effect::new(move || {
        if let Some(user) = crate::net::api::client().and_then(|api| workflow::auth::current_user(&api)) {
            auth.set(AuthState::signed_in(user));
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/schooladmin.css"/>
        <Title text="School Admin"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
                <ParentRoute path={segment::<Student>()} view={|| view! { <Outlet/> }}>
                    <Route path=StaticSegment("") view={resource_list_page::<Student>}/>
                    <Route path=StaticSegment("new") view={resource_form_page::<StudentDraft>}/>
                    <Route path=(ParamSegment("id"), StaticSegment("edit")) view={resource_form_page::<StudentDraft>}/>
                </ParentRoute>
                <ParentRoute path={segment::<Teacher>()} view={|| view! { <Outlet/> }}>
                    <Route path=StaticSegment("") view={resource_list_page::<Teacher>}/>
                    <Route path=StaticSegment("new") view={resource_form_page::<TeacherDraft>}/>
                    <Route path=(ParamSegment("id"), StaticSegment("edit")) view={resource_form_page::<TeacherDraft>}/>
                </ParentRoute>
                <ParentRoute path={segment::<Classroom>()} view={|| view! { <Outlet/> }}>
                    <Route path=StaticSegment("") view={resource_list_page::<Classroom>}/>
                    <Route path=StaticSegment("new") view=ClassroomFormPage/>
                    <Route path=ParamSegment("id") view=ClassroomDetailPage/>
                    <Route path=(ParamSegment("id"), StaticSegment("edit")) view=ClassroomFormPage/>
                </ParentRoute>
                <ParentRoute path={segment::<Course>()} view={|| view! { <Outlet/> }}>
                    <Route path=StaticSegment("") view={resource_list_page::<Course>}/>
                    <Route path=StaticSegment("new") view={resource_form_page::<CourseDraft>}/>
                    <Route path=(ParamSegment("id"), StaticSegment("edit")) view={resource_form_page::<CourseDraft>}/>
                </ParentRoute>
                <ParentRoute path={segment::<Program>()} view={|| view! { <Outlet/> }}>
                    <Route path=StaticSegment("") view={resource_list_page::<Program>}/>
                    <Route path=StaticSegment("new") view={resource_form_page::<ProgramDraft>}/>
                    <Route path=(ParamSegment("id"), StaticSegment("edit")) view={resource_form_page::<ProgramDraft>}/>
                </ParentRoute>
                <ParentRoute path={segment::<Exam>()} view={|| view! { <Outlet/> }}>
                    <Route path=StaticSegment("") view={resource_list_page::<Exam>}/>
                    <Route path=StaticSegment("new") view={resource_form_page::<ExamDraft>}/>
                    <Route path=(ParamSegment("id"), StaticSegment("edit")) view={resource_form_page::<ExamDraft>}/>
                </ParentRoute>
                <ParentRoute path={segment::<ExamResult>()} view={|| view! { <Outlet/> }}>
                    <Route path=StaticSegment("") view={resource_list_page::<ExamResult>}/>
                    <Route path=StaticSegment("new") view={resource_form_page::<ExamResultDraft>}/>
                    <Route path=(ParamSegment("id"), StaticSegment("edit")) view={resource_form_page::<ExamResultDraft>}/>
                </ParentRoute>
                <ParentRoute path={segment::<Enrollment>()} view={|| view! { <Outlet/> }}>
                    <Route path=StaticSegment("") view={resource_list_page::<Enrollment>}/>
                    <Route path=StaticSegment("new") view={resource_form_page::<EnrollmentDraft>}/>
                    <Route path=(ParamSegment("id"), StaticSegment("edit")) view={resource_form_page::<EnrollmentDraft>}/>
                </ParentRoute>
                <ParentRoute path={segment::<Attendance>()} view={|| view! { <Outlet/> }}>
                    <Route path=StaticSegment("") view={resource_list_page::<Attendance>}/>
                    <Route path=StaticSegment("new") view={resource_form_page::<AttendanceDraft>}/>
                    <Route path=(ParamSegment("id"), StaticSegment("edit")) view={resource_form_page::<AttendanceDraft>}/>
                </ParentRoute>
                <ParentRoute path={segment::<School>()} view={|| view! { <Outlet/> }}>
                    <Route path=StaticSegment("") view={resource_list_page::<School>}/>
                    <Route path=StaticSegment("new") view={resource_form_page::<SchoolDraft>}/>
                    <Route path=(ParamSegment("id"), StaticSegment("edit")) view={resource_form_page::<SchoolDraft>}/>
                </ParentRoute>
                <ParentRoute path={segment::<Branch>()} view={|| view! { <Outlet/> }}>
                    <Route path=StaticSegment("") view={resource_list_page::<Branch>}/>
                    <Route path=StaticSegment("new") view={resource_form_page::<BranchDraft>}/>
                    <Route path=(ParamSegment("id"), StaticSegment("edit")) view={resource_form_page::<BranchDraft>}/>
                </ParentRoute>
                <ParentRoute path={segment::<User>()} view={|| view! { <Outlet/> }}>
                    <Route path=StaticSegment("") view={resource_list_page::<User>}/>
                    <Route path=StaticSegment("new") view={resource_form_page::<UserDraft>}/>
                    <Route path=(ParamSegment("id"), StaticSegment("edit")) view={resource_form_page::<UserDraft>}/>
                </ParentRoute>
                <ParentRoute path={segment::<Role>()} view={|| view! { <Outlet/> }}>
                    <Route path=StaticSegment("") view={resource_list_page::<Role>}/>
                    <Route path=StaticSegment("new") view={resource_form_page::<RoleDraft>}/>
                    <Route path=(ParamSegment("id"), StaticSegment("edit")) view={resource_form_page::<RoleDraft>}/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
