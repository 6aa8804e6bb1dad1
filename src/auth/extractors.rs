use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use tracing::warn;

use crate::auth::jwt::JwtKeys;
use crate::auth::principal::Principal;
use crate::error::ApiError;
use crate::state::AppState;

/// Bearer-token authentication step: validate the token, extract its
/// subject, reload the principal from storage. Any failure short-circuits
/// the request with 401 before the handler runs.
#[async_trait]
impl FromRequestParts<AppState> for Principal {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("Missing Authorization header".into()))?;

        let token = auth
            .strip_prefix("Bearer ")
            .or_else(|| auth.strip_prefix("bearer "))
            .ok_or_else(|| ApiError::Unauthorized("Invalid Authorization header".into()))?;

        let keys = JwtKeys::from_ref(state);
        if !keys.validate(token) {
            return Err(ApiError::Unauthorized("Invalid or expired token".into()));
        }
        let email = keys
            .subject(token)
            .map_err(|_| ApiError::Unauthorized("Invalid or expired token".into()))?;

        match Principal::load_by_email(&state.db, &email).await? {
            Some(principal) => Ok(principal),
            None => {
                warn!(subject = %email, "token subject has no backing user");
                Err(ApiError::Unauthorized("User not found".into()))
            }
        }
    }
}
