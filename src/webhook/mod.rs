use crate::state::AppState;
use axum::{routing::post, Router};

mod dto;
pub mod handlers;
pub mod signature;

pub fn router() -> Router<AppState> {
    Router::new().route("/webhooks/clerk", post(handlers::clerk_webhook))
}
