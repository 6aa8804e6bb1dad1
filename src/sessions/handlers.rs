use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Json, Router,
};
use tracing::instrument;

use super::dto::SessionDto;
use super::repo::Session;
use super::services;
use crate::auth::principal::Principal;
use crate::error::ApiError;
use crate::state::AppState;

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/session", get(find_all))
        .route("/session/:id", get(find_by_id))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/session", post(create))
        .route("/session/:id", put(update).delete(remove))
        .route(
            "/session/:id/participate/:user_id",
            post(participate).delete(no_longer_participate),
        )
}

#[instrument(skip(state, _principal))]
pub async fn find_all(
    State(state): State<AppState>,
    _principal: Principal,
) -> Result<Json<Vec<SessionDto>>, ApiError> {
    let sessions = Session::find_all(&state.db).await?;
    Ok(Json(sessions.into_iter().map(SessionDto::from).collect()))
}

#[instrument(skip(state, _principal))]
pub async fn find_by_id(
    State(state): State<AppState>,
    _principal: Principal,
    Path(id): Path<i64>,
) -> Result<Json<SessionDto>, ApiError> {
    let session = Session::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(session.into()))
}

#[instrument(skip(state, _principal, payload))]
pub async fn create(
    State(state): State<AppState>,
    _principal: Principal,
    Json(payload): Json<SessionDto>,
) -> Result<Json<SessionDto>, ApiError> {
    let data = payload.into_data()?;
    let session = Session::create(&state.db, &data).await?;
    Ok(Json(session.into()))
}

#[instrument(skip(state, _principal, payload))]
pub async fn update(
    State(state): State<AppState>,
    _principal: Principal,
    Path(id): Path<i64>,
    Json(payload): Json<SessionDto>,
) -> Result<Json<SessionDto>, ApiError> {
    let data = payload.into_data()?;
    let session = Session::update(&state.db, id, &data)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(session.into()))
}

#[instrument(skip(state, _principal))]
pub async fn remove(
    State(state): State<AppState>,
    _principal: Principal,
    Path(id): Path<i64>,
) -> Result<(), ApiError> {
    // Existence check lives here; the repo delete itself does not care
    Session::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Session::delete(&state.db, id).await?;
    Ok(())
}

#[instrument(skip(state, _principal))]
pub async fn participate(
    State(state): State<AppState>,
    _principal: Principal,
    Path((id, user_id)): Path<(i64, i64)>,
) -> Result<(), ApiError> {
    services::participate(&state.db, id, user_id).await
}

#[instrument(skip(state, _principal))]
pub async fn no_longer_participate(
    State(state): State<AppState>,
    _principal: Principal,
    Path((id, user_id)): Path<(i64, i64)>,
) -> Result<(), ApiError> {
    services::no_longer_participate(&state.db, id, user_id).await
}
