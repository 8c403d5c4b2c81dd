#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response, StatusCode, header},
};
use student_roster::config::DatabaseConfig;
use student_roster::router::{RosterState, roster_router};
use student_roster::{StudentsStorage, db};
use tempfile::TempDir;
use tower::ServiceExt;

/// A router over a fresh SQLite file that lives as long as the struct.
pub struct TestApp {
    pub storage: StudentsStorage,
    pub app: Router,
    _dir: TempDir,
}

pub async fn spawn_storage() -> (StudentsStorage, TempDir) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let cfg = DatabaseConfig {
        url: format!("sqlite:{}", dir.path().join("students.db").display()),
        ..DatabaseConfig::default()
    };
    let storage = db::connect(&cfg).await.expect("failed to open storage");
    (storage, dir)
}

pub async fn spawn_app() -> TestApp {
    let (storage, dir) = spawn_storage().await;
    let app = roster_router(RosterState::new(storage.clone()));
    TestApp {
        storage,
        app,
        _dir: dir,
    }
}

impl TestApp {
    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.app
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(uri)
                    .body(Body::empty())
                    .expect("failed to build request"),
            )
            .await
            .expect("request failed")
    }

    pub async fn post_form(&self, uri: &str, form: &str) -> Response<Body> {
        self.app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(form.to_string()))
                    .expect("failed to build request"),
            )
            .await
            .expect("request failed")
    }
}

pub async fn body_text(resp: Response<Body>) -> String {
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    String::from_utf8(body.to_vec()).expect("response body was not utf-8")
}

pub fn assert_redirects_to_list(resp: &Response<Body>) {
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok()),
        Some("/")
    );
}
