//! Command implementations, generic over transport and storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each command runs the same workflow step the web UI runs for the
//! equivalent screen: `list` is the list page, `create`/`update` the form
//! page, `delete` the confirmation dialog. Output goes to a caller-supplied
//! writer so tests can read it back.

#[cfg(test)]
#[path = "commands_test.rs"]
mod commands_test;

use std::io::Write;

use records::{Draft, FormField, Record};
use workflow::loader::{load_classroom_detail, load_one};
use workflow::{
    ApiClient, ApiError, DeleteOutcome, FormController, FormError, KeyValueStore, ListView, LoadStatus, Transport,
};

use crate::error::CliError;

/// Split `field=value`. The value may itself contain `=` and may be empty.
pub fn parse_assignment(raw: &str) -> Result<(&str, &str), CliError> {
    match raw.split_once('=') {
        Some((field, value)) if !field.trim().is_empty() => Ok((field.trim(), value)),
        _ => Err(CliError::InvalidAssignment(raw.to_owned())),
    }
}

/// `y` / `yes` in any case confirms; anything else declines.
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

fn apply_assignments<D: Draft>(form: &mut FormController<D>, sets: &[String]) -> Result<(), CliError> {
    for raw in sets {
        let (name, value) = parse_assignment(raw)?;
        let Some(field) = D::field_named(name) else {
            let expected = D::FIELDS.iter().map(|f| f.name()).collect::<Vec<_>>().join(", ");
            return Err(CliError::UnknownField {
                kind: <D::Record as Record>::ENDPOINT.title,
                field: name.to_owned(),
                expected,
            });
        };
        form.set_field(field, value.to_owned());
    }
    Ok(())
}

fn load_failed(err: ApiError, action: &str) -> CliError {
    if err.requires_login() { CliError::NotSignedIn } else { CliError::Failed(err.user_message(action)) }
}

fn write_row(out: &mut impl Write, cells: &[String]) -> Result<(), CliError> {
    writeln!(out, "{}", cells.join("\t"))?;
    Ok(())
}

pub async fn login<T: Transport, S: KeyValueStore>(
    api: &ApiClient<T, S>,
    username: &str,
    password: &str,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let user = workflow::auth::login(api, username, password).await?;
    writeln!(out, "Signed in as {}.", user.display_name())?;
    Ok(())
}

pub fn logout<T: Transport, S: KeyValueStore>(api: &ApiClient<T, S>, out: &mut impl Write) -> Result<(), CliError> {
    workflow::auth::logout(api);
    writeln!(out, "Signed out.")?;
    Ok(())
}

pub fn whoami<T: Transport, S: KeyValueStore>(api: &ApiClient<T, S>, out: &mut impl Write) -> Result<(), CliError> {
    let user = workflow::auth::current_user(api).ok_or(CliError::NotSignedIn)?;
    writeln!(out, "{} (id {}, {})", user.display_name(), user.id, user.username)?;
    Ok(())
}

/// Tab-separated table of the rows matching `filter`.
pub async fn list<R: Record, T: Transport, S: KeyValueStore>(
    api: &ApiClient<T, S>,
    filter: Option<&str>,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let mut view = ListView::<R>::new();
    match view.load(api).await {
        LoadStatus::Ready => {}
        LoadStatus::LoginRequired => return Err(CliError::NotSignedIn),
        LoadStatus::Failed => return Err(CliError::Failed(view.rows.error.unwrap_or_default())),
    }
    if let Some(filter) = filter {
        view.set_query(filter);
    }

    let header: Vec<String> = std::iter::once("ID").chain(R::COLUMNS.iter().copied()).map(str::to_owned).collect();
    write_row(out, &header)?;
    let visible = view.visible();
    for row in &visible {
        let cells: Vec<String> = std::iter::once(row.id().to_string()).chain(row.cells()).collect();
        write_row(out, &cells)?;
    }
    if visible.len() != view.rows.data.len() {
        writeln!(out, "({} of {})", visible.len(), view.rows.data.len())?;
    }
    Ok(())
}

/// One record as pretty JSON.
pub async fn show<R: Record, T: Transport, S: KeyValueStore>(
    api: &ApiClient<T, S>,
    id: i64,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let action = format!("load {}", R::ENDPOINT.title.to_lowercase());
    let record = load_one::<R, _, _>(api, id).await.map_err(|err| load_failed(err, &action))?;
    writeln!(out, "{}", serde_json::to_string_pretty(&record)?)?;
    Ok(())
}

/// A classroom plus its program's name, resolved in a second request.
pub async fn show_classroom<T: Transport, S: KeyValueStore>(
    api: &ApiClient<T, S>,
    id: i64,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let detail = load_classroom_detail(api, id).await;
    if !api.session().is_authenticated() {
        return Err(CliError::NotSignedIn);
    }
    let Some(classroom) = detail.classroom.data else {
        return Err(CliError::Failed(detail.classroom.error.unwrap_or_default()));
    };
    writeln!(out, "{}", serde_json::to_string_pretty(&classroom)?)?;
    match (detail.program_name.data, detail.program_name.error) {
        (Some(name), _) => writeln!(out, "Program: {name}")?,
        (None, Some(error)) => writeln!(out, "Program: unavailable ({error})")?,
        (None, None) => {}
    }
    Ok(())
}

/// Outcome of a save that may need the user's approval first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// The user declined a change of owner; nothing was sent.
    Declined,
}

async fn save<D: Draft, T: Transport, S: KeyValueStore>(
    api: &ApiClient<T, S>,
    mut form: FormController<D>,
    sets: &[String],
    confirm: impl FnOnce(&str) -> std::io::Result<bool>,
) -> Result<SaveOutcome, CliError> {
    apply_assignments(&mut form, sets)?;
    let mut result = form.submit(api).await;
    if let Err(FormError::Unconfirmed(changes)) = &result {
        let endpoint = <D::Record as Record>::ENDPOINT;
        let id = form.target().map(|id| format!(" #{id}")).unwrap_or_default();
        let prompt = format!("This moves {}{id} to a different {}. Continue? [y/N] ", endpoint.title, changes.join(", "));
        if !confirm(&prompt)? {
            return Ok(SaveOutcome::Declined);
        }
        form.confirm_changes();
        result = form.submit(api).await;
    }
    match result {
        Ok(_) => Ok(SaveOutcome::Saved),
        Err(err) if err.requires_login() => Err(CliError::NotSignedIn),
        Err(err) => Err(err.into()),
    }
}

pub async fn create<D: Draft, T: Transport, S: KeyValueStore>(
    api: &ApiClient<T, S>,
    sets: &[String],
    out: &mut impl Write,
) -> Result<(), CliError> {
    if !api.session().is_authenticated() {
        return Err(CliError::NotSignedIn);
    }
    // New records have no previous owner to confirm against.
    save(api, FormController::new(D::default()), sets, |_| Ok(true)).await?;
    writeln!(out, "Created in {}.", <D::Record as Record>::ENDPOINT.title)?;
    Ok(())
}

/// Load the record, apply `sets` over it, and PUT the whole draft back.
/// A change of owner is sent only after `confirm` agrees.
pub async fn update<D: Draft, T: Transport, S: KeyValueStore>(
    api: &ApiClient<T, S>,
    id: i64,
    sets: &[String],
    confirm: impl FnOnce(&str) -> std::io::Result<bool>,
    out: &mut impl Write,
) -> Result<SaveOutcome, CliError> {
    let endpoint = <D::Record as Record>::ENDPOINT;
    let action = format!("load {}", endpoint.title.to_lowercase());
    let record = load_one::<D::Record, _, _>(api, id).await.map_err(|err| load_failed(err, &action))?;
    let saved = save(api, FormController::new(D::from_record(&record)), sets, confirm).await?;
    match saved {
        SaveOutcome::Saved => writeln!(out, "Updated {} #{id}.", endpoint.title)?,
        SaveOutcome::Declined => writeln!(out, "Cancelled.")?,
    }
    Ok(saved)
}

/// Delete after `confirm` agrees. Declining sends nothing.
pub async fn delete<R: Record, T: Transport, S: KeyValueStore>(
    api: &ApiClient<T, S>,
    id: i64,
    confirm: impl FnOnce(&str) -> std::io::Result<bool>,
    out: &mut impl Write,
) -> Result<DeleteOutcome, CliError> {
    let mut view = ListView::<R>::new();
    view.request_delete(id);
    let prompt = format!("Delete {} #{id}? This cannot be undone. [y/N] ", R::ENDPOINT.title);
    if !confirm(&prompt)? {
        let outcome = view.cancel_delete();
        writeln!(out, "Cancelled.")?;
        return Ok(outcome);
    }
    match view.confirm_and_delete(api).await {
        DeleteOutcome::Deleted(id) => {
            writeln!(out, "Deleted {} #{id}.", R::ENDPOINT.title)?;
            Ok(DeleteOutcome::Deleted(id))
        }
        DeleteOutcome::Failed(_) if !api.session().is_authenticated() => Err(CliError::NotSignedIn),
        DeleteOutcome::Failed(message) => Err(CliError::Failed(message)),
        DeleteOutcome::Cancelled => Ok(DeleteOutcome::Cancelled),
    }
}
