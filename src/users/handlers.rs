use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::{instrument, warn};

use super::dto::UserDto;
use super::repo::User;
use crate::auth::principal::Principal;
use crate::error::ApiError;
use crate::state::AppState;

pub fn user_routes() -> Router<AppState> {
    Router::new().route("/user/:id", get(find_by_id).delete(remove))
}

#[instrument(skip(state, _principal))]
pub async fn find_by_id(
    State(state): State<AppState>,
    _principal: Principal,
    Path(id): Path<i64>,
) -> Result<Json<UserDto>, ApiError> {
    let user = User::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(user.into()))
}

/// A user may only delete their own account; the owner check compares the
/// principal's email against the stored record.
#[instrument(skip(state, principal))]
pub async fn remove(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<i64>,
) -> Result<(), ApiError> {
    let user = User::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound)?;

    if !is_owner(&principal.email, &user.email) {
        warn!(
            principal = %principal.email,
            owner = %user.email,
            "delete refused: not the account owner"
        );
        return Err(ApiError::Unauthorized("Unauthorized".into()));
    }

    User::delete(&state.db, id).await?;
    Ok(())
}

fn is_owner(principal_email: &str, user_email: &str) -> bool {
    principal_email == user_email
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_check_matches_exact_email_only() {
        assert!(is_owner("owner@mail.com", "owner@mail.com"));
        assert!(!is_owner("other@mail.com", "owner@mail.com"));
        assert!(!is_owner("", "owner@mail.com"));
    }
}
