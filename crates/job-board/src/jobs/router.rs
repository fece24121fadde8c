use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::json;

use super::domain::{JobDraft, JobId};
use super::query::JobQuery;
use super::repository::JobRepository;
use super::service::{JobDirectoryError, JobDirectoryService};

/// Router builder exposing the directory's HTTP endpoints.
pub fn job_router<R>(service: Arc<JobDirectoryService<R>>) -> Router
where
    R: JobRepository + 'static,
{
    Router::new()
        .route(
            "/api/jobs",
            get(list_handler::<R>).post(create_handler::<R>),
        )
        .route(
            "/api/jobs/:job_id",
            get(get_handler::<R>)
                .put(update_handler::<R>)
                .delete(delete_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn create_handler<R>(
    State(service): State<Arc<JobDirectoryService<R>>>,
    axum::Json(draft): axum::Json<JobDraft>,
) -> Response
where
    R: JobRepository + 'static,
{
    match service.create(draft) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn list_handler<R>(
    State(service): State<Arc<JobDirectoryService<R>>>,
    Query(query): Query<JobQuery>,
) -> Response
where
    R: JobRepository + 'static,
{
    match service.list(&query) {
        Ok(page) => (StatusCode::OK, axum::Json(page)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn get_handler<R>(
    State(service): State<Arc<JobDirectoryService<R>>>,
    Path(job_id): Path<u64>,
) -> Response
where
    R: JobRepository + 'static,
{
    match service.get(JobId(job_id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn update_handler<R>(
    State(service): State<Arc<JobDirectoryService<R>>>,
    Path(job_id): Path<u64>,
    axum::Json(draft): axum::Json<JobDraft>,
) -> Response
where
    R: JobRepository + 'static,
{
    match service.update(JobId(job_id), draft) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn delete_handler<R>(
    State(service): State<Arc<JobDirectoryService<R>>>,
    Path(job_id): Path<u64>,
) -> Response
where
    R: JobRepository + 'static,
{
    match service.delete(JobId(job_id)) {
        Ok(()) => (StatusCode::OK, axum::Json(json!({ "success": true }))).into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: JobDirectoryError) -> Response {
    let status = match err {
        JobDirectoryError::NotFound => StatusCode::NOT_FOUND,
        JobDirectoryError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
        JobDirectoryError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let payload = json!({ "error": err.to_string() });
    (status, axum::Json(payload)).into_response()
}
