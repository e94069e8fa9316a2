//! Run history and record management handlers.

use axum::{Extension, extract::Path, http::StatusCode, response::Json};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    errors::AppError,
    models::{NewRunRequest, Run, RunEntry, UpdateRunRequest},
    store::SharedStore,
};

/// Response for a bulk delete.
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteAllResponse {
    pub deleted: usize,
}

/// List the run history, newest first.
#[utoipa::path(
    get,
    path = "/runs",
    tag = "runs",
    responses(
        (status = 200, description = "Run history, newest first", body = Vec<RunEntry>)
    )
)]
pub async fn list_runs(
    Extension(store): Extension<SharedStore>,
) -> Result<Json<Vec<RunEntry>>, AppError> {
    let mut runs = store.fetch_all().await?;
    runs.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(Json(runs.iter().map(RunEntry::from).collect()))
}

/// Log a new run.
#[utoipa::path(
    post,
    path = "/runs",
    tag = "runs",
    request_body = NewRunRequest,
    responses(
        (status = 200, description = "Run created", body = Run),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_run(
    Extension(store): Extension<SharedStore>,
    Json(req): Json<NewRunRequest>,
) -> Result<Json<Run>, AppError> {
    req.validate()?;
    let run = req.into_run();
    store.insert(run.clone()).await?;
    Ok(Json(run))
}

/// Get a single run.
#[utoipa::path(
    get,
    path = "/runs/{id}",
    tag = "runs",
    params(
        ("id" = Uuid, Path, description = "Run ID")
    ),
    responses(
        (status = 200, description = "The run", body = Run),
        (status = 404, description = "Run not found")
    )
)]
pub async fn get_run(
    Extension(store): Extension<SharedStore>,
    Path(id): Path<Uuid>,
) -> Result<Json<Run>, AppError> {
    let run = store.get(id).await?.ok_or(AppError::NotFound)?;
    Ok(Json(run))
}

/// Correct the date, duration or distance of a run.
#[utoipa::path(
    patch,
    path = "/runs/{id}",
    tag = "runs",
    params(
        ("id" = Uuid, Path, description = "Run ID")
    ),
    request_body = UpdateRunRequest,
    responses(
        (status = 200, description = "Updated run", body = Run),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Run not found")
    )
)]
pub async fn update_run(
    Extension(store): Extension<SharedStore>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateRunRequest>,
) -> Result<Json<Run>, AppError> {
    req.validate()?;
    let run = store.modify(id, req).await?;
    Ok(Json(run))
}

/// Delete a run.
#[utoipa::path(
    delete,
    path = "/runs/{id}",
    tag = "runs",
    params(
        ("id" = Uuid, Path, description = "Run ID")
    ),
    responses(
        (status = 204, description = "Run deleted"),
        (status = 404, description = "Run not found")
    )
)]
pub async fn delete_run(
    Extension(store): Extension<SharedStore>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    store.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete every run.
#[utoipa::path(
    delete,
    path = "/runs",
    tag = "runs",
    responses(
        (status = 200, description = "Number of runs deleted", body = DeleteAllResponse)
    )
)]
pub async fn delete_all_runs(
    Extension(store): Extension<SharedStore>,
) -> Result<Json<DeleteAllResponse>, AppError> {
    let deleted = store.delete_all().await?;
    Ok(Json(DeleteAllResponse { deleted }))
}
