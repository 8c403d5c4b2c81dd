use axum::{Router, routing::get};

use crate::db::sqlite::StudentsStorage;
use crate::handlers::students;

/// Shared state handed to every handler; the repository is injected here
/// rather than reached through a global.
#[derive(Clone)]
pub struct RosterState {
    pub storage: StudentsStorage,
}

impl RosterState {
    pub fn new(storage: StudentsStorage) -> Self {
        Self { storage }
    }
}

pub fn roster_router(state: RosterState) -> Router {
    Router::new()
        .route(
            "/",
            get(students::list_students).post(students::create_student),
        )
        .route(
            "/add",
            get(students::new_student_form).post(students::create_student),
        )
        .route(
            "/edit",
            get(students::edit_student_form).post(students::update_student),
        )
        .route(
            "/edit/{id}",
            get(students::edit_student_form_by_path).post(students::update_student_by_path),
        )
        .route("/delete", get(students::delete_student))
        .route("/delete/{id}", get(students::delete_student_by_path))
        .with_state(state)
}
