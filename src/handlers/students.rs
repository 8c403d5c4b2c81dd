use axum::{
    Form,
    extract::{
        Path, Query, State,
        rejection::{FormRejection, QueryRejection},
    },
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use tracing::{debug, info, warn};

use crate::types::form::{FieldErrors, IdQuery, StudentForm, parse_id};
use crate::views::{self, FormPage};
use crate::{RosterError, router::RosterState};

const LIST_PATH: &str = "/";

/// GET / -> table of every student plus the add form.
pub async fn list_students(State(state): State<RosterState>) -> Result<Html<String>, RosterError> {
    let students = state.storage.list().await?;
    debug!(count = students.len(), "listing students");
    Ok(Html(views::list_page(&students)))
}

/// GET /add -> empty add form.
pub async fn new_student_form() -> Html<String> {
    let empty = StudentForm::default();
    let no_errors = FieldErrors::default();
    Html(views::student_form_page(&FormPage::add(&empty, &no_errors)))
}

/// POST / and POST /add -> insert, then back to the list.
pub async fn create_student(
    State(state): State<RosterState>,
    form: Result<Form<StudentForm>, FormRejection>,
) -> Result<Response, RosterError> {
    let form = match read_form(form) {
        Ok(form) => form,
        Err(errors) => {
            let empty = StudentForm::default();
            return Ok(rejected_form(&FormPage::add(&empty, &errors)));
        }
    };
    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            warn!(errors = %errors, "rejected add submission");
            return Ok(rejected_form(&FormPage::add(&form, &errors)));
        }
    };

    let id = state.storage.add(&input).await?;
    info!(id, name = %input.name, "student added");
    Ok(Redirect::to(LIST_PATH).into_response())
}

/// GET /edit?id=N -> form pre-filled from the stored row.
pub async fn edit_student_form(
    State(state): State<RosterState>,
    query: Result<Query<IdQuery>, QueryRejection>,
) -> Result<Html<String>, RosterError> {
    let id = read_query(query)
        .and_then(|q| q.id())
        .map_err(RosterError::Validation)?;
    render_edit_form(&state, id).await
}

/// GET /edit/{id}
pub async fn edit_student_form_by_path(
    State(state): State<RosterState>,
    Path(raw_id): Path<String>,
) -> Result<Html<String>, RosterError> {
    let id = parse_id(Some(&raw_id)).map_err(RosterError::Validation)?;
    render_edit_form(&state, id).await
}

/// POST /edit -> the id travels in a hidden form field.
pub async fn update_student(
    State(state): State<RosterState>,
    form: Result<Form<StudentForm>, FormRejection>,
) -> Result<Response, RosterError> {
    let form = read_form(form).map_err(RosterError::Validation)?;
    let id = parse_id(form.id.as_deref()).map_err(RosterError::Validation)?;
    apply_update(&state, id, form).await
}

/// POST /edit/{id}
pub async fn update_student_by_path(
    State(state): State<RosterState>,
    Path(raw_id): Path<String>,
    form: Result<Form<StudentForm>, FormRejection>,
) -> Result<Response, RosterError> {
    let id = parse_id(Some(&raw_id)).map_err(RosterError::Validation)?;
    let mut form = read_form(form).map_err(RosterError::Validation)?;
    form.id = Some(id.to_string());
    apply_update(&state, id, form).await
}

/// GET /delete?id=N -> delete, then back to the list. Deleting a missing id
/// is not an error.
pub async fn delete_student(
    State(state): State<RosterState>,
    query: Result<Query<IdQuery>, QueryRejection>,
) -> Result<Redirect, RosterError> {
    let id = read_query(query)
        .and_then(|q| q.id())
        .map_err(RosterError::Validation)?;
    remove(&state, id).await
}

/// GET /delete/{id}
pub async fn delete_student_by_path(
    State(state): State<RosterState>,
    Path(raw_id): Path<String>,
) -> Result<Redirect, RosterError> {
    let id = parse_id(Some(&raw_id)).map_err(RosterError::Validation)?;
    remove(&state, id).await
}

async fn render_edit_form(state: &RosterState, id: i64) -> Result<Html<String>, RosterError> {
    let Some(student) = state.storage.get(id).await? else {
        debug!(id, "edit requested for missing student");
        return Err(RosterError::NotFound { id });
    };
    let values = StudentForm::from_student(&student);
    let no_errors = FieldErrors::default();
    Ok(Html(views::student_form_page(&FormPage::edit(
        &values, &no_errors,
    ))))
}

async fn apply_update(
    state: &RosterState,
    id: i64,
    form: StudentForm,
) -> Result<Response, RosterError> {
    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            warn!(id, errors = %errors, "rejected edit submission");
            return Ok(rejected_form(&FormPage::edit(&form, &errors)));
        }
    };

    if !state.storage.update(id, &input).await? {
        return Err(RosterError::NotFound { id });
    }
    info!(id, name = %input.name, "student updated");
    Ok(Redirect::to(LIST_PATH).into_response())
}

async fn remove(state: &RosterState, id: i64) -> Result<Redirect, RosterError> {
    if state.storage.delete(id).await? {
        info!(id, "student deleted");
    } else {
        debug!(id, "delete requested for missing student");
    }
    Ok(Redirect::to(LIST_PATH))
}

/// Turn an unreadable body (duplicate field, wrong content type) into a field error.
fn read_form(form: Result<Form<StudentForm>, FormRejection>) -> Result<StudentForm, FieldErrors> {
    form.map(|Form(form)| form).map_err(|rejection| {
        warn!(error = %rejection, "unreadable form body");
        FieldErrors::single("form", "could not be read")
    })
}

fn read_query(query: Result<Query<IdQuery>, QueryRejection>) -> Result<IdQuery, FieldErrors> {
    query.map(|Query(query)| query).map_err(|rejection| {
        warn!(error = %rejection, "unreadable query string");
        FieldErrors::single("id", "could not be read")
    })
}

fn rejected_form(page: &FormPage<'_>) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Html(views::student_form_page(page)),
    )
        .into_response()
}
