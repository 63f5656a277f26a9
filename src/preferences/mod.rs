use crate::state::AppState;
use axum::{
    routing::{get, put},
    Router,
};

pub mod dto;
pub mod handlers;
pub mod repo;
pub mod schema;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/preferences", get(handlers::get_preferences))
        .route("/preferences/fitness", put(handlers::put_fitness))
        .route("/preferences/nutrition", put(handlers::put_nutrition))
}
