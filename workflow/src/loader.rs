//! Page data loading: gate on the session, fetch, and fold results into
//! per-resource display state.
//!
//! DESIGN
//! ======
//! Each [`Resource`] settles independently. Independent fetches on one page
//! run concurrently and a failure in one leaves the others intact, so a page
//! can render partial data. A failed fetch keeps the previous `data`.

#[cfg(test)]
#[path = "loader_test.rs"]
mod loader_test;

use std::collections::HashMap;

use futures::future::join_all;
use records::{
    Branch, Classroom, ClassroomDraft, Course, Draft, Exam, FormField, Input, Program, Record, RefKind, RefOption, Role,
    School, Student, Teacher,
};

use crate::Navigate;
use crate::api::{ApiClient, ApiError};
use crate::form::FormController;
use crate::session::{KeyValueStore, SessionStore};
use crate::transport::Transport;

/// How a fetch settled, from the page's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadStatus {
    Ready,
    Failed,
    /// The session is gone; the page should navigate to login.
    LoginRequired,
}

/// `{data, loading, error}` for one fetched resource.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Resource<T> {
    pub data: T,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Resource<T> {
    pub fn new(data: T) -> Self {
        Self { data, loading: false, error: None }
    }

    pub fn start(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply a fetch result. On failure `data` keeps its previous value.
    ///
    /// `action` names the fetch for the error text (e.g. `"load students"`).
    pub fn resolve(&mut self, result: Result<T, ApiError>, action: &str) -> LoadStatus {
        self.loading = false;
        match result {
            Ok(data) => {
                self.data = data;
                self.error = None;
                LoadStatus::Ready
            }
            Err(err) => {
                tracing::warn!(action, error = %err, "load failed");
                self.error = Some(err.user_message(action));
                if err.requires_login() { LoadStatus::LoginRequired } else { LoadStatus::Failed }
            }
        }
    }

    /// A resource that has already settled with `result`.
    pub fn settled(result: Result<T, ApiError>, action: &str) -> Self
    where
        T: Default,
    {
        let mut resource = Self::default();
        resource.resolve(result, action);
        resource
    }
}

/// Mount-time check for authenticated pages.
///
/// # Errors
///
/// Returns the login redirect when no token is stored. Pages must not start
/// any fetch in that case.
pub fn gate<S: KeyValueStore>(session: &SessionStore<S>) -> Result<(), Navigate> {
    if session.is_authenticated() { Ok(()) } else { Err(Navigate::login()) }
}

/// Fetch a whole collection.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn load_list<R: Record, T: Transport, S: KeyValueStore>(api: &ApiClient<T, S>) -> Result<Vec<R>, ApiError> {
    api.get_list(R::ENDPOINT.collection).await
}

/// Fetch one entity by id.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn load_one<R: Record, T: Transport, S: KeyValueStore>(api: &ApiClient<T, S>, id: i64) -> Result<R, ApiError> {
    api.get_one(&R::ENDPOINT.item(id)).await
}

async fn options_of<R: Record, T: Transport, S: KeyValueStore>(api: &ApiClient<T, S>) -> Result<Vec<RefOption>, ApiError> {
    let rows: Vec<R> = load_list(api).await?;
    Ok(rows.iter().map(RefOption::from_record).collect())
}

/// `(id, label)` pairs for a reference select.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn load_options<T: Transport, S: KeyValueStore>(
    api: &ApiClient<T, S>,
    kind: RefKind,
) -> Result<Vec<RefOption>, ApiError> {
    match kind {
        RefKind::Student => options_of::<Student, _, _>(api).await,
        RefKind::Teacher => options_of::<Teacher, _, _>(api).await,
        RefKind::Classroom => options_of::<Classroom, _, _>(api).await,
        RefKind::Course => options_of::<Course, _, _>(api).await,
        RefKind::Program => options_of::<Program, _, _>(api).await,
        RefKind::Exam => options_of::<Exam, _, _>(api).await,
        RefKind::School => options_of::<School, _, _>(api).await,
        RefKind::Branch => options_of::<Branch, _, _>(api).await,
        RefKind::Role => options_of::<Role, _, _>(api).await,
    }
}

/// Distinct reference collections a draft's form needs, in field order.
#[must_use]
pub fn reference_kinds<D: Draft>() -> Vec<RefKind> {
    let mut kinds = Vec::new();
    for field in D::FIELDS {
        if let Input::Reference(kind) = field.spec().input {
            if !kinds.contains(&kind) {
                kinds.push(kind);
            }
        }
    }
    kinds
}

pub type ReferenceOptions = HashMap<RefKind, Resource<Vec<RefOption>>>;

/// Load every reference collection a draft's form needs, concurrently.
pub async fn load_reference_options<D: Draft, T: Transport, S: KeyValueStore>(api: &ApiClient<T, S>) -> ReferenceOptions {
    let kinds = reference_kinds::<D>();
    let results = join_all(kinds.iter().map(|kind| load_options(api, *kind))).await;
    kinds
        .into_iter()
        .zip(results)
        .map(|(kind, result)| {
            let action = format!("load {}", kind.endpoint().title.to_lowercase());
            (kind, Resource::settled(result, &action))
        })
        .collect()
}

/// Everything a create/edit form page renders.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormPageData<D> {
    /// Draft pre-populated from the record when editing, empty when creating.
    pub draft: Resource<D>,
    pub options: ReferenceOptions,
}

impl<D: Draft> FormPageData<D> {
    /// Controller for the route's record. When the edit fetch failed the
    /// controller stays unloaded and refuses to save.
    #[must_use]
    pub fn controller(&self, id: Option<i64>) -> FormController<D> {
        let mut form = FormController::for_route(id);
        if self.draft.error.is_none() {
            form.load(self.draft.data.clone());
        }
        form
    }
}

/// Load the record under edit (if any) alongside the form's reference options.
pub async fn load_form_page<D: Draft, T: Transport, S: KeyValueStore>(
    api: &ApiClient<T, S>,
    id: Option<i64>,
) -> FormPageData<D> {
    let record = async {
        match id {
            Some(id) => load_one::<D::Record, _, _>(api, id).await.map(|r| D::from_record(&r)),
            None => Ok(D::default()),
        }
    };
    let (draft, options) = futures::join!(record, load_reference_options::<D, _, _>(api));
    let action = format!("load {}", <D::Record as Record>::ENDPOINT.title.to_lowercase());
    FormPageData { draft: Resource::settled(draft, &action), options }
}

/// Classroom form page: roster candidates, select options and, when
/// editing, the classroom itself.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClassroomEdit {
    pub students: Resource<Vec<Student>>,
    pub teachers: Resource<Vec<Teacher>>,
    pub programs: Resource<Vec<RefOption>>,
    pub classroom: Resource<Option<Classroom>>,
}

impl ClassroomEdit {
    /// `Failed` when any of the four fetches failed.
    #[must_use]
    pub fn status(&self) -> LoadStatus {
        let errors = [&self.students.error, &self.teachers.error, &self.programs.error, &self.classroom.error];
        if errors.iter().all(|e| e.is_none()) { LoadStatus::Ready } else { LoadStatus::Failed }
    }

    /// Select options keyed the way the generic form inputs expect them.
    #[must_use]
    pub fn options(&self) -> ReferenceOptions {
        let teachers = Resource {
            data: self.teachers.data.iter().map(RefOption::from_record).collect(),
            loading: self.teachers.loading,
            error: self.teachers.error.clone(),
        };
        HashMap::from([(RefKind::Program, self.programs.clone()), (RefKind::Teacher, teachers)])
    }

    /// Draft for the form: the loaded classroom with roster names resolved,
    /// or an empty draft when creating.
    #[must_use]
    pub fn draft(&self) -> ClassroomDraft {
        let mut draft = self.classroom.data.as_ref().map(ClassroomDraft::from_record).unwrap_or_default();
        draft.resolve_student_names(&self.students.data);
        draft
    }

    /// Controller for the route's classroom; unloaded when the classroom
    /// fetch failed.
    #[must_use]
    pub fn controller(&self, id: Option<i64>) -> FormController<ClassroomDraft> {
        let mut form = FormController::for_route(id);
        if self.classroom.error.is_none() {
            form.load(self.draft());
        }
        form
    }
}

/// Load everything the classroom form needs, concurrently. `id` is `None`
/// when creating, in which case no classroom is fetched.
pub async fn load_classroom_edit<T: Transport, S: KeyValueStore>(
    api: &ApiClient<T, S>,
    id: Option<i64>,
) -> ClassroomEdit {
    let classroom = async {
        match id {
            Some(id) => load_one::<Classroom, _, _>(api, id).await.map(Some),
            None => Ok(None),
        }
    };
    let (students, teachers, programs, classroom) = futures::join!(
        load_list::<Student, _, _>(api),
        load_list::<Teacher, _, _>(api),
        load_options(api, RefKind::Program),
        classroom,
    );
    ClassroomEdit {
        students: Resource::settled(students, "load students"),
        teachers: Resource::settled(teachers, "load teachers"),
        programs: Resource::settled(programs, "load programs"),
        classroom: Resource::settled(classroom, "load classroom"),
    }
}

/// Classroom detail: the classroom, then its program's name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClassroomDetail {
    pub classroom: Resource<Option<Classroom>>,
    pub program_name: Resource<Option<String>>,
}

/// Dependent chain: the program fetch only starts once the classroom has
/// loaded and names a program.
pub async fn load_classroom_detail<T: Transport, S: KeyValueStore>(api: &ApiClient<T, S>, id: i64) -> ClassroomDetail {
    let mut detail = ClassroomDetail::default();
    detail.classroom.start();
    let loaded = load_one::<Classroom, _, _>(api, id).await;
    let program_id = loaded.as_ref().ok().and_then(|c| c.program);
    detail.classroom.resolve(loaded.map(Some), "load classroom");

    if let Some(program_id) = program_id {
        detail.program_name.start();
        let program = load_one::<Program, _, _>(api, program_id).await;
        detail.program_name.resolve(program.map(|p| Some(p.name)), "load program");
    }
    detail
}
