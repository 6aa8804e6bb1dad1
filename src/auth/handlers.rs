use axum::{
    extract::{FromRef, State},
    routing::post,
    Json, Router,
};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, instrument, warn};

use crate::auth::dto::{JwtResponse, LoginRequest, MessageResponse, SignupRequest};
use crate::auth::jwt::JwtKeys;
use crate::auth::password::{hash_password, verify_password};
use crate::error::ApiError;
use crate::state::AppState;
use crate::users::repo::User;

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

fn validate_signup(payload: &SignupRequest) -> Result<(), ApiError> {
    // Character counts, not bytes: the columns are VARCHAR(n)
    if payload.email.is_empty()
        || payload.email.chars().count() > 50
        || !is_valid_email(&payload.email)
    {
        return Err(ApiError::Validation("Invalid email".into()));
    }
    for name in [&payload.first_name, &payload.last_name] {
        let len = name.chars().count();
        if !(3..=20).contains(&len) {
            return Err(ApiError::Validation(
                "First and last name must be 3 to 20 characters".into(),
            ));
        }
    }
    let password_len = payload.password.chars().count();
    if !(6..=40).contains(&password_len) {
        return Err(ApiError::Validation(
            "Password must be 6 to 40 characters".into(),
        ));
    }
    Ok(())
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(mut payload): Json<LoginRequest>,
) -> Result<Json<JwtResponse>, ApiError> {
    payload.email = payload.email.trim().to_lowercase();

    if payload.email.is_empty() || payload.password.is_empty() {
        return Err(ApiError::Validation("Email and password are required".into()));
    }

    let user = User::find_by_email(&state.db, &payload.email)
        .await?
        .ok_or_else(|| {
            warn!(email = %payload.email, "login unknown email");
            ApiError::Unauthorized("Invalid credentials".into())
        })?;

    if !verify_password(&payload.password, &user.password_hash)? {
        warn!(email = %payload.email, user_id = user.id, "login invalid password");
        return Err(ApiError::Unauthorized("Invalid credentials".into()));
    }

    let keys = JwtKeys::from_ref(&state);
    let token = keys.issue(&user.email)?;

    // The admin flag comes from a second fresh lookup; a missing row
    // downgrades to false instead of failing the login (legacy behavior).
    let admin = User::find_by_email(&state.db, &user.email)
        .await?
        .map(|u| u.admin)
        .unwrap_or(false);

    info!(user_id = user.id, email = %user.email, "user logged in");
    Ok(Json(JwtResponse::bearer(
        token,
        user.id,
        user.email,
        user.first_name,
        user.last_name,
        admin,
    )))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(mut payload): Json<SignupRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    payload.email = payload.email.trim().to_lowercase();
    validate_signup(&payload)?;

    // Fail fast before any write
    if User::find_by_email(&state.db, &payload.email).await?.is_some() {
        warn!(email = %payload.email, "email already registered");
        return Err(ApiError::BadRequest("Error: Email is already taken!".into()));
    }

    let hash = hash_password(&payload.password)?;
    let user = User::create(
        &state.db,
        &payload.email,
        &payload.first_name,
        &payload.last_name,
        &hash,
    )
    .await?;

    info!(user_id = user.id, email = %user.email, "user registered");
    Ok(Json(MessageResponse {
        message: "User registered successfully!".into(),
    }))
}
