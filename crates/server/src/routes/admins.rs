//! Admin CRUD and statistics handlers.

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    routing::get,
};
use tracing::instrument;

use adminhub_core::{AdminId, StatisticsSummary};

use crate::{
    error::AppError,
    models::{AdminRequest, AdminResponse, StatisticsQuery},
    state::AppState,
};

/// Build the admin router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/admins", get(list).post(create))
        .route("/api/admins/statistics", get(statistics))
        .route("/api/admins/{id}", get(show).put(update).delete(remove))
        .route("/statistics", get(statistics))
}

fn admin_id(path: Result<Path<i64>, PathRejection>) -> Result<AdminId, AppError> {
    path.map(|Path(id)| AdminId::new(id))
        .map_err(|e| AppError::BadRequest(e.body_text()))
}

fn request_body(payload: Result<Json<AdminRequest>, JsonRejection>) -> Result<AdminRequest, AppError> {
    payload
        .map(|Json(body)| body)
        .map_err(|e| AppError::BadRequest(e.body_text()))
}

/// `POST /api/admins`
///
/// # Errors
///
/// 400 on invalid input, 409 if the email is taken.
#[instrument(skip(state, payload))]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<AdminRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AdminResponse>), AppError> {
    let body = request_body(payload)?;
    let created = state.admins().create_admin(&body).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// `GET /api/admins`
///
/// # Errors
///
/// 500 if the store cannot be read.
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<AdminResponse>>, AppError> {
    let admins = state.admins().list_admins().await?;
    Ok(Json(admins.into_iter().map(AdminResponse::from).collect()))
}

/// `GET /api/admins/{id}`
///
/// # Errors
///
/// 404 if no admin has this ID.
#[instrument(skip(state, path))]
pub async fn show(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<AdminResponse>, AppError> {
    let id = admin_id(path)?;
    let admin = state.admins().get_admin(id).await?;
    Ok(Json(admin.into()))
}

/// `PUT /api/admins/{id}`
///
/// # Errors
///
/// 400 on invalid input, 404 if no admin has this ID, 409 if the email is taken.
#[instrument(skip(state, path, payload))]
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<AdminRequest>, JsonRejection>,
) -> Result<Json<AdminResponse>, AppError> {
    let id = admin_id(path)?;
    let body = request_body(payload)?;
    let updated = state.admins().update_admin(id, &body).await?;
    Ok(Json(updated.into()))
}

/// `DELETE /api/admins/{id}`
///
/// # Errors
///
/// 404 if no admin has this ID.
#[instrument(skip(state, path))]
pub async fn remove(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let id = admin_id(path)?;
    state.admins().delete_admin(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /api/admins/statistics?seniorAgeThreshold=<int>`
///
/// # Errors
///
/// 400 if the threshold is not an integer.
#[instrument(skip(state, query))]
pub async fn statistics(
    State(state): State<AppState>,
    query: Result<Query<StatisticsQuery>, QueryRejection>,
) -> Result<Json<StatisticsSummary>, AppError> {
    let Query(query) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let threshold = query
        .senior_age_threshold
        .unwrap_or(state.config().default_senior_age);
    let summary = state.admins().statistics(threshold).await?;
    Ok(Json(summary))
}
