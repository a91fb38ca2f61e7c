use anyhow::{Context, Result};
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use quirknotes::infrastructure::SqliteNoteRepository;
use quirknotes::ports::{create_router, AppState};
use serde_json::Value;
use std::path::PathBuf;
use tempfile::TempDir;
use tower::ServiceExt;

/// Test fixture for a notes database in a temporary directory
#[allow(dead_code)]
pub struct TestDatabase {
    _temp_dir: TempDir,
    pub database_path: PathBuf,
}

#[allow(dead_code)]
impl TestDatabase {
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let database_path = temp_dir.path().join("notes.db");

        Ok(Self {
            _temp_dir: temp_dir,
            database_path,
        })
    }

    /// Open repository for this test database
    pub fn open_repository(&self) -> Result<SqliteNoteRepository> {
        SqliteNoteRepository::new(&self.database_path)
    }
}

/// Router over a fresh on-disk database, driven in-process with `oneshot`
#[allow(dead_code)]
pub struct TestApp {
    _database: TestDatabase,
    router: Router,
}

#[allow(dead_code)]
impl TestApp {
    pub fn new() -> Result<Self> {
        let database = TestDatabase::new()?;
        let repository = database.open_repository()?;
        let router = create_router(AppState::new(repository), &[]);

        Ok(Self {
            _database: database,
            router,
        })
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> Result<(StatusCode, Value)> {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let request = builder.body(body).context("Failed to build request")?;

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .context("Router failed to respond")?;
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .context("Failed to read response body")?;
        let json = serde_json::from_slice(&bytes).context("Response body is not JSON")?;

        Ok((status, json))
    }

    pub async fn post_note(&self, title: &str, content: &str) -> Result<(StatusCode, Value)> {
        self.request(
            Method::POST,
            "/postNote",
            Some(serde_json::json!({ "title": title, "content": content })),
        )
        .await
    }

    pub async fn get_all_notes(&self) -> Result<(StatusCode, Value)> {
        self.request(Method::GET, "/getAllNotes", None).await
    }

    pub async fn delete_note(&self, id: &str) -> Result<(StatusCode, Value)> {
        self.request(Method::DELETE, &format!("/deleteNote/{id}"), None)
            .await
    }

    pub async fn patch_note(&self, id: &str, body: Value) -> Result<(StatusCode, Value)> {
        self.request(Method::PATCH, &format!("/patchNote/{id}"), Some(body))
            .await
    }

    pub async fn delete_all_notes(&self) -> Result<(StatusCode, Value)> {
        self.request(Method::DELETE, "/deleteAllNotes", None).await
    }

    pub async fn update_note_color(&self, id: &str, body: Value) -> Result<(StatusCode, Value)> {
        self.request(Method::PATCH, &format!("/updateNoteColor/{id}"), Some(body))
            .await
    }

    /// Post a note and return its inserted id
    pub async fn create_note(&self, title: &str, content: &str) -> Result<String> {
        let (status, body) = self.post_note(title, content).await?;
        anyhow::ensure!(status == StatusCode::OK, "postNote failed: {status} {body}");
        body["insertedId"]
            .as_str()
            .map(str::to_string)
            .context("insertedId missing from postNote response")
    }
}
