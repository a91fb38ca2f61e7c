// src/ports/http.rs
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, HeaderValue, Method},
    routing::{delete, get, patch, post},
    Json, Router,
};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info, instrument, warn};

use crate::application::{NoteCreator, NoteDeleter, NoteEditor, NoteLister, NoteRepository};
use crate::constants::NOTE_ADDED_MESSAGE;
use crate::domain::{DomainError, Note, NoteId};
use crate::ports::dto::{
    color_updated_message, deleted_all_message, deleted_message, patched_message, ApiResponse,
    CreateNoteRequest, CreateNoteResponse, PatchNoteRequest, UpdateNoteColorRequest,
};
use crate::ports::ApiError;

/// Shared handler state: one repository behind a mutex.
///
/// Each repository call runs on the blocking pool and holds the lock for that
/// call only, never across an await.
pub struct AppState<R: NoteRepository> {
    pub repository: Arc<Mutex<R>>,
}

impl<R: NoteRepository> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: NoteRepository> AppState<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(Mutex::new(repository)),
        }
    }

    async fn with_repository<T, F>(&self, op: F) -> Result<T, ApiError>
    where
        R: Send + 'static,
        T: Send + 'static,
        F: FnOnce(&mut R) -> Result<T, DomainError> + Send + 'static,
    {
        let repository = Arc::clone(&self.repository);
        let result = tokio::task::spawn_blocking(move || {
            let mut repository = repository.lock().map_err(|_| {
                DomainError::StorageError("repository lock poisoned".to_string())
            })?;
            op(&mut *repository)
        })
        .await
        .map_err(|e| DomainError::StorageError(format!("repository task failed: {e}")))?;

        result.map_err(ApiError::from)
    }
}

pub fn create_router<R>(state: AppState<R>, cors_allowed_origins: &[String]) -> Router
where
    R: NoteRepository + Send + 'static,
{
    Router::new()
        .route("/postNote", post(post_note::<R>))
        .route("/getAllNotes", get(get_all_notes::<R>))
        .route("/deleteNote/:id", delete(delete_note::<R>))
        .route("/patchNote/:id", patch(patch_note::<R>))
        .route("/deleteAllNotes", delete(delete_all_notes::<R>))
        .route("/updateNoteColor/:id", patch(update_note_color::<R>))
        .layer(cors_layer(cors_allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(%origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
}

/// Bind `host:port` and serve until Ctrl-C.
pub async fn serve(router: Router, host: &str, port: u16) -> Result<()> {
    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind {host}:{port}"))?;
    let addr = listener
        .local_addr()
        .context("Failed to read listener address")?;
    info!(%addr, "Notes service listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Notes service stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!(error = %e, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}

#[instrument(level = "debug", skip_all)]
async fn post_note<R: NoteRepository + Send + 'static>(
    State(state): State<AppState<R>>,
    payload: Result<Json<CreateNoteRequest>, JsonRejection>,
) -> Result<Json<CreateNoteResponse>, ApiError> {
    let Json(request) = payload?;
    let inserted_id = state
        .with_repository(move |repo| {
            NoteCreator::new(repo).create_note(request.title, request.content)
        })
        .await?;

    Ok(Json(CreateNoteResponse {
        response: NOTE_ADDED_MESSAGE.to_string(),
        inserted_id,
    }))
}

#[instrument(level = "debug", skip_all)]
async fn get_all_notes<R: NoteRepository + Send + 'static>(
    State(state): State<AppState<R>>,
) -> Result<Json<ApiResponse<Vec<Note>>>, ApiError> {
    let notes = state
        .with_repository(|repo| NoteLister::new(repo).list_notes())
        .await?;
    Ok(Json(ApiResponse::new(notes)))
}

#[instrument(level = "debug", skip_all)]
async fn delete_note<R: NoteRepository + Send + 'static>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<String>>, ApiError> {
    let id = NoteId::from(id);
    debug!(note_id = %id, "Deleting note");
    let note_id = id.clone();
    state
        .with_repository(move |repo| NoteDeleter::new(repo).delete_note(&note_id))
        .await?;
    Ok(Json(ApiResponse::new(deleted_message(&id))))
}

#[instrument(level = "debug", skip_all)]
async fn patch_note<R: NoteRepository + Send + 'static>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
    payload: Result<Json<PatchNoteRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<String>>, ApiError> {
    let Json(request) = payload?;
    let id = NoteId::from(id);
    debug!(note_id = %id, "Patching note");
    let note_id = id.clone();
    state
        .with_repository(move |repo| {
            NoteEditor::new(repo).patch_note(&note_id, request.title, request.content)
        })
        .await?;
    Ok(Json(ApiResponse::new(patched_message(&id))))
}

#[instrument(level = "debug", skip_all)]
async fn delete_all_notes<R: NoteRepository + Send + 'static>(
    State(state): State<AppState<R>>,
) -> Result<Json<ApiResponse<String>>, ApiError> {
    let deleted = state
        .with_repository(|repo| NoteDeleter::new(repo).delete_all_notes())
        .await?;
    Ok(Json(ApiResponse::new(deleted_all_message(deleted))))
}

#[instrument(level = "debug", skip_all)]
async fn update_note_color<R: NoteRepository + Send + 'static>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateNoteColorRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<String>>, ApiError> {
    let Json(request) = payload?;
    let id = NoteId::from(id);
    debug!(note_id = %id, "Updating note color");
    let note_id = id.clone();
    let color = state
        .with_repository(move |repo| NoteEditor::new(repo).update_color(&note_id, request.color))
        .await?;
    Ok(Json(ApiResponse::new(color_updated_message(&id, color.as_str()))))
}
