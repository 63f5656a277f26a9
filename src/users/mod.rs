use crate::state::AppState;
use axum::{routing::get, Router};

mod dto;
pub mod handlers;
pub mod repo;

pub fn router() -> Router<AppState> {
    Router::new().route("/me", get(handlers::get_me))
}
