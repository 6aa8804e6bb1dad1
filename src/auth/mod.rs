use axum::Router;

use crate::state::AppState;

pub mod dto;
pub(crate) mod extractors;
pub mod handlers;
pub mod jwt;
pub mod password;
pub mod principal;

pub fn router() -> Router<AppState> {
    handlers::auth_routes()
}
