use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::instrument;

use super::dto::TeacherDto;
use super::repo::Teacher;
use crate::auth::principal::Principal;
use crate::error::ApiError;
use crate::state::AppState;

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/teacher", get(find_all))
        .route("/teacher/:id", get(find_by_id))
}

#[instrument(skip(state, _principal))]
pub async fn find_all(
    State(state): State<AppState>,
    _principal: Principal,
) -> Result<Json<Vec<TeacherDto>>, ApiError> {
    let teachers = Teacher::find_all(&state.db).await?;
    Ok(Json(teachers.into_iter().map(TeacherDto::from).collect()))
}

#[instrument(skip(state, _principal))]
pub async fn find_by_id(
    State(state): State<AppState>,
    _principal: Principal,
    Path(id): Path<i64>,
) -> Result<Json<TeacherDto>, ApiError> {
    let teacher = Teacher::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(teacher.into()))
}
